use serde::{Deserialize, Deserializer, Serialize};

/// Worldwide totals returned by `GET /all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    #[serde(default, deserialize_with = "de_count")]
    pub cases: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub today_cases: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub deaths: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub today_deaths: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub recovered: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub active: u64,
    /// Unix timestamp in milliseconds.
    #[serde(default)]
    pub updated: i64,
}

/// Nested `countryInfo` object. Only the flag is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(default)]
    pub flag: Option<String>,
}

/// One entry of `GET /countries`, or the body of `GET /countries/{name}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryStats {
    pub country: String,
    #[serde(default)]
    pub country_info: Option<CountryInfo>,
    #[serde(default, deserialize_with = "de_count")]
    pub cases: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub today_cases: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub deaths: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub today_deaths: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub recovered: u64,
    #[serde(default, deserialize_with = "de_count")]
    pub active: u64,
}

impl CountryStats {
    /// Flag URL, or `""` when the API did not send one.
    pub fn flag_url(&self) -> &str {
        self.country_info
            .as_ref()
            .and_then(|i| i.flag.as_deref())
            .unwrap_or("")
    }
}

/// Serde helper: counts arrive as integers, occasionally as floats or `null`.
/// `null` becomes 0, negative values are clamped to 0.
fn de_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a non-negative number or null")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v)
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(v.max(0) as u64)
        }

        fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            if !v.is_finite() {
                return Err(E::custom("non-finite count"));
            }
            Ok(v.max(0.0).round() as u64)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(0)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}
