//! covid_dash
//!
//! A small Rust library for fetching COVID-19 statistics from the public
//! [disease.sh](https://disease.sh) API and turning them into a dashboard.
//! Pairs with the `covid` CLI and the `covid-gui` desktop app.
//!
//! ### Features
//! - Fetch the worldwide summary, every country, or one country by name
//! - Format counts with thousands separators and guarded percentages
//! - Build view-models and render them as HTML fragments or a full page
//! - Drive a dashboard surface with a loading indicator, an auto-hiding error
//!   banner and stale-result protection for searches
//!
//! ### Example
//! ```no_run
//! use covid_dash::{Client, Dashboard, DashboardConfig, Page};
//!
//! let dash = Dashboard::new(Client::default(), Page::new(), DashboardConfig::default());
//! for handle in dash.bootstrap() {
//!     handle.join().expect("worker panicked");
//! }
//! std::fs::write("dashboard.html", dash.surface().to_html())?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod api;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod html;
pub mod models;
pub mod storage;
pub mod surface;
pub mod view;

pub use api::{Client, StatsSource};
pub use dashboard::{Dashboard, DashboardConfig, Endpoint};
pub use error::FetchError;
pub use models::{CountryInfo, CountryStats, GlobalStats};
pub use surface::{Page, PageState, Surface};
