//! Live API tests. Run with: `cargo test --features online -- --nocapture`
#![cfg(feature = "online")]

use covid_dash::{Client, StatsSource};

#[test]
fn fetch_global_summary() {
    let g = Client::default().fetch_global().unwrap();
    assert!(g.cases > 0);
    assert!(g.cases >= g.active);
    assert!(g.updated > 0);
}

#[test]
fn fetch_country_list() {
    let list = Client::default().fetch_all_countries().unwrap();
    assert!(list.len() > 100);
    assert!(list.iter().any(|c| c.country == "Germany"));
    assert!(list.iter().any(|c| !c.flag_url().is_empty()));
}

#[test]
fn fetch_single_country_and_unknown_one() {
    let cli = Client::default();
    let de = cli.fetch_country("Germany").unwrap();
    assert_eq!(de.country, "Germany");
    let err = cli.fetch_country("Narnia").unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}
