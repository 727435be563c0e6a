//! Synchronous client for the **disease.sh COVID-19 API (v3)**.
//!
//! Three endpoints are used:
//! - `GET /all` for the worldwide summary,
//! - `GET /countries` for the per-country list (API order is kept),
//! - `GET /countries/{name}` for a single country.
//!
//! ### Notes
//! - An unknown country comes back as HTTP 404 with `{"message": "..."}`; both the
//!   status and the payload are mapped to [`FetchError::NotFound`].
//! - Every request carries a timeout (30s by default, see [`Client::with_timeout`]).
//! - There is no retry: a failure is reported once and left to the caller.
//!
//! Typical usage:
//! ```no_run
//! # use covid_dash::{Client, StatsSource};
//! let client = Client::default();
//! let world = client.fetch_global()?;
//! println!("{} cases", world.cases);
//! # Ok::<(), covid_dash::FetchError>(())
//! ```

use crate::error::FetchError;
use crate::models::{CountryStats, GlobalStats};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://disease.sh/v3/covid-19";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The three lookups the dashboard needs. Implemented by [`Client`] over HTTP;
/// tests drive the dashboard with in-memory sources.
///
/// ### Errors
/// Every method fails with a [`FetchError`]:
/// - `Network` when the request could not be sent or timed out
/// - `Status` for a non-success HTTP status other than 404
/// - `Parse` when the body is not the expected JSON
/// - `NotFound` for the API's not-found payload (only expected from `fetch_country`)
pub trait StatsSource: Send + Sync + 'static {
    /// Worldwide summary (`GET /all`).
    fn fetch_global(&self) -> Result<GlobalStats, FetchError>;
    /// Every country, in API order (`GET /countries`).
    fn fetch_all_countries(&self) -> Result<Vec<CountryStats>, FetchError>;
    /// One country by name, ISO code or id (`GET /countries/{name}`).
    ///
    /// ### Arguments
    /// - `name`: free text from the user, e.g. `"Germany"`, `"DE"`, `"South Korea"`.
    ///   It is sent as a single percent-encoded path segment.
    ///
    /// ### Errors
    /// `FetchError::NotFound` when the API does not know the name.
    fn fetch_country(&self, name: &str) -> Result<CountryStats, FetchError>;
}

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }
}

// Keep -, _, . readable in the path segment; everything else is escaped.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

impl Client {
    /// Client with a custom total request timeout.
    ///
    /// The connect timeout is 10s or `timeout`, whichever is shorter. A request that
    /// exceeds the timeout fails with a `FetchError::Network` for which
    /// [`FetchError::is_timeout`] is true.
    ///
    /// ### Example
    /// ```no_run
    /// # use covid_dash::{Client, StatsSource};
    /// # use std::time::Duration;
    /// let client = Client::with_timeout(Duration::from_secs(5));
    /// let list = client.fetch_all_countries()?;
    /// # Ok::<(), covid_dash::FetchError>(())
    /// ```
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout) // total request timeout
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .redirect(Policy::limited(5))
            .user_agent(concat!("covid_dash/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("reqwest client build");
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            http,
        }
    }

    /// Point the client at another deployment of the same API.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// `{base}/all`
    pub fn global_url(&self) -> String {
        format!("{}/all", self.base_url)
    }

    /// `{base}/countries`
    pub fn countries_url(&self) -> String {
        format!("{}/countries", self.base_url)
    }

    /// URL for a single country. The name is placed into one path segment.
    pub fn country_url(&self, name: &str) -> String {
        let segment = percent_encoding::utf8_percent_encode(name, SEGMENT);
        format!("{}/countries/{}", self.base_url, segment)
    }

    fn get(&self, url: &str) -> Result<(u16, String), FetchError> {
        log::debug!("GET {}", url);
        let resp = self.http.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        Ok((status, body))
    }
}

impl StatsSource for Client {
    fn fetch_global(&self) -> Result<GlobalStats, FetchError> {
        let (status, body) = self.get(&self.global_url())?;
        decode_global(status, &body)
    }

    fn fetch_all_countries(&self) -> Result<Vec<CountryStats>, FetchError> {
        let (status, body) = self.get(&self.countries_url())?;
        decode_countries(status, &body)
    }

    fn fetch_country(&self, name: &str) -> Result<CountryStats, FetchError> {
        let (status, body) = self.get(&self.country_url(name))?;
        decode_country(status, &body)
    }
}

/// Decode the body of `GET /all`.
pub fn decode_global(status: u16, body: &str) -> Result<GlobalStats, FetchError> {
    decode(status, body)
}

/// Decode the body of `GET /countries`.
pub fn decode_countries(status: u16, body: &str) -> Result<Vec<CountryStats>, FetchError> {
    decode(status, body)
}

/// Decode the body of `GET /countries/{name}`.
pub fn decode_country(status: u16, body: &str) -> Result<CountryStats, FetchError> {
    decode(status, body)
}

fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, FetchError> {
    if status == 404 {
        let message = api_message(body).unwrap_or_else(|| "resource not found".to_string());
        return Err(FetchError::NotFound(message));
    }
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }

    let v: Value = serde_json::from_str(body)?;

    // The API reports lookup failures as an object with a lone "message" field.
    if let Some(message) = v.get("message").and_then(Value::as_str) {
        return Err(FetchError::NotFound(message.to_string()));
    }

    Ok(serde_json::from_value(v)?)
}

fn api_message(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    v.get("message")?.as_str().map(str::to_string)
}
