use covid_dash::api::{decode_countries, decode_country, decode_global};
use covid_dash::{Client, FetchError};

const GLOBAL_SAMPLE: &str = r#"
{
  "updated": 1677672000000,
  "cases": 681529665,
  "todayCases": 1029,
  "deaths": 6807574,
  "todayDeaths": 3,
  "recovered": 654250695,
  "todayRecovered": 812,
  "active": 20471396,
  "critical": 38880,
  "casesPerOneMillion": 87435,
  "population": 7866705761,
  "affectedCountries": 231
}
"#;

const COUNTRIES_SAMPLE: &str = r#"
[
  {
    "updated": 1677672000000,
    "country": "Afghanistan",
    "countryInfo": {"_id": 4, "iso2": "AF", "iso3": "AFG", "lat": 33, "long": 65,
                    "flag": "https://disease.sh/assets/img/flags/af.png"},
    "cases": 209451, "todayCases": 0, "deaths": 7896, "todayDeaths": 0,
    "recovered": 187135, "active": 14420
  },
  {
    "country": "MS Zaandam",
    "countryInfo": {"_id": null, "iso2": null, "iso3": null, "flag": null},
    "cases": 9, "todayCases": 0, "deaths": 2, "todayDeaths": 0,
    "recovered": null, "active": 7
  },
  {
    "country": "Diamond Princess",
    "cases": 712, "todayCases": 0, "deaths": 13, "todayDeaths": 0,
    "active": 0
  }
]
"#;

#[test]
fn parse_global_summary() {
    let g = decode_global(200, GLOBAL_SAMPLE).unwrap();
    assert_eq!(g.cases, 681_529_665);
    assert_eq!(g.today_cases, 1029);
    assert_eq!(g.deaths, 6_807_574);
    assert_eq!(g.today_deaths, 3);
    assert_eq!(g.recovered, 654_250_695);
    assert_eq!(g.active, 20_471_396);
    assert_eq!(g.updated, 1_677_672_000_000);
}

#[test]
fn parse_country_list_keeps_order_and_tolerates_gaps() {
    let list = decode_countries(200, COUNTRIES_SAMPLE).unwrap();
    let names: Vec<&str> = list.iter().map(|c| c.country.as_str()).collect();
    assert_eq!(names, ["Afghanistan", "MS Zaandam", "Diamond Princess"]);

    assert_eq!(
        list[0].flag_url(),
        "https://disease.sh/assets/img/flags/af.png"
    );
    // null flag and missing countryInfo both give an empty source
    assert_eq!(list[1].flag_url(), "");
    assert_eq!(list[2].flag_url(), "");
    // null and missing counts decode as zero
    assert_eq!(list[1].recovered, 0);
    assert_eq!(list[2].recovered, 0);
}

#[test]
fn parse_empty_country_list() {
    assert!(decode_countries(200, "[]").unwrap().is_empty());
}

#[test]
fn not_found_payload_is_not_found() {
    let body = r#"{"message":"Country not found or doesn't have any cases"}"#;
    match decode_country(404, body) {
        Err(FetchError::NotFound(msg)) => assert!(msg.contains("Country not found")),
        other => panic!("expected NotFound, got {:?}", other),
    }
    // Same payload with a success status still counts as not found.
    assert!(decode_country(200, body).unwrap_err().is_not_found());
    // 404 with an unreadable body is still not found.
    assert!(decode_country(404, "<html>").unwrap_err().is_not_found());
}

#[test]
fn server_errors_and_garbage_are_reported() {
    assert!(matches!(
        decode_global(503, "upstream down"),
        Err(FetchError::Status(503))
    ));
    assert!(matches!(
        decode_global(200, "{not json"),
        Err(FetchError::Parse(_))
    ));
    // Valid JSON, wrong shape
    assert!(matches!(
        decode_countries(200, r#"{"cases": 1}"#),
        Err(FetchError::Parse(_))
    ));
}

#[test]
fn urls_follow_the_three_endpoints() {
    let c = Client::default().with_base_url("http://localhost:9999/v3/covid-19/");
    assert_eq!(c.global_url(), "http://localhost:9999/v3/covid-19/all");
    assert_eq!(c.countries_url(), "http://localhost:9999/v3/covid-19/countries");
    assert_eq!(
        c.country_url("Germany"),
        "http://localhost:9999/v3/covid-19/countries/Germany"
    );
    // Free text stays inside one path segment.
    assert_eq!(
        c.country_url("South Korea"),
        "http://localhost:9999/v3/covid-19/countries/South%20Korea"
    );
    assert_eq!(
        c.country_url("a/b"),
        "http://localhost:9999/v3/covid-19/countries/a%2Fb"
    );
}
