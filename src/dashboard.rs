//! The dashboard controller: fetches, renders into a [`Surface`], and keeps the loading
//! indicator and error banner honest.
//!
//! A [`Dashboard`] is built once with its data source and surface. Clones share state, so
//! a clone can be moved onto a worker thread for each request.
//!
//! ### Ordering
//! The country table has a single writer sequence. The initial country list and every
//! search take a ticket when they are *issued*; when a result arrives, it is applied only
//! if no newer ticket has been issued since. The check and the write happen under one
//! lock, so a newer result always lands after an older one. A slow early search can therefore never
//! overwrite a later one, and a late-arriving full list never replaces a search result.

use crate::api::StatsSource;
use crate::error::FetchError;
use crate::surface::Surface;
use crate::view::{country_row, country_rows, global_view};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const EMPTY_SEARCH_MESSAGE: &str = "Please enter a country name";

/// Which request failed; each kind has its own user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Global,
    Countries,
    Country,
}

impl Endpoint {
    pub fn error_message(self) -> &'static str {
        match self {
            Endpoint::Global => "Failed to fetch global data. Please try again later.",
            Endpoint::Countries => "Failed to fetch country data. Please try again later.",
            Endpoint::Country => "Country not found or there was an error fetching data.",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// How long the error banner stays up.
    pub error_display: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            error_display: Duration::from_secs(5),
        }
    }
}

struct Shared<S, U> {
    source: S,
    surface: U,
    config: DashboardConfig,
    in_flight: Mutex<usize>,
    error_generation: Mutex<u64>,
    table_seq: AtomicU64,
    // Held across the staleness check and the table write.
    table_write: Mutex<()>,
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Keeps the loading indicator up while alive.
struct LoadingGuard<'a, S: StatsSource, U: Surface> {
    shared: &'a Shared<S, U>,
}

impl<'a, S: StatsSource, U: Surface> LoadingGuard<'a, S, U> {
    fn enter(shared: &'a Shared<S, U>) -> Self {
        let mut n = lock(&shared.in_flight);
        *n += 1;
        if *n == 1 {
            shared.surface.set_loading(true);
        }
        Self { shared }
    }
}

impl<S: StatsSource, U: Surface> Drop for LoadingGuard<'_, S, U> {
    fn drop(&mut self) {
        let mut n = lock(&self.shared.in_flight);
        *n = n.saturating_sub(1);
        if *n == 0 {
            self.shared.surface.set_loading(false);
        }
    }
}

pub struct Dashboard<S, U> {
    inner: Arc<Shared<S, U>>,
}

impl<S, U> Clone for Dashboard<S, U> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: StatsSource, U: Surface> Dashboard<S, U> {
    /// Build the dashboard once; nothing is fetched until [`Dashboard::bootstrap`] or one
    /// of the `fetch_*` methods runs.
    pub fn new(source: S, surface: U, config: DashboardConfig) -> Self {
        Self {
            inner: Arc::new(Shared {
                source,
                surface,
                config,
                in_flight: Mutex::new(0),
                error_generation: Mutex::new(0),
                table_seq: AtomicU64::new(0),
                table_write: Mutex::new(()),
            }),
        }
    }

    /// The surface results are rendered into.
    pub fn surface(&self) -> &U {
        &self.inner.surface
    }

    /// The data source requests go to.
    pub fn source(&self) -> &S {
        &self.inner.source
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Start the initial load: the global summary and the full country list, concurrently.
    pub fn bootstrap(&self) -> Vec<JoinHandle<()>> {
        let global = {
            let this = self.clone();
            thread::spawn(move || {
                let _ = this.fetch_global();
            })
        };
        let ticket = self.next_ticket();
        let countries = {
            let this = self.clone();
            thread::spawn(move || {
                let _ = this.load_countries(ticket);
            })
        };
        vec![global, countries]
    }

    /// Input controller for both triggers (button and Enter). Blank input shows the
    /// validation message and sends nothing; otherwise the lookup runs on a worker thread.
    pub fn search(&self, text: &str) -> Option<JoinHandle<()>> {
        let name = text.trim();
        if name.is_empty() {
            self.show_error(EMPTY_SEARCH_MESSAGE);
            return None;
        }
        let name = name.to_string();
        let ticket = self.next_ticket();
        let this = self.clone();
        Some(thread::spawn(move || {
            let _ = this.load_country(&name, ticket);
        }))
    }

    /// Fetch and render the global panel and the last-updated stamp.
    ///
    /// ### Errors
    /// Returns the source's [`FetchError`]. By then the banner already shows
    /// [`Endpoint::Global`]'s message and the loading indicator is cleared.
    pub fn fetch_global(&self) -> Result<(), FetchError> {
        let shared = &*self.inner;
        let _loading = LoadingGuard::enter(shared);
        match shared.source.fetch_global() {
            Ok(stats) => {
                let view = global_view(&stats);
                shared.surface.set_last_updated(&view.last_updated);
                shared.surface.replace_global(view);
                Ok(())
            }
            Err(e) => {
                self.fail(Endpoint::Global, &e);
                Err(e)
            }
        }
    }

    /// Fetch and render the full country table.
    ///
    /// ### Errors
    /// Returns the source's [`FetchError`] after showing [`Endpoint::Countries`]'s message.
    pub fn fetch_all_countries(&self) -> Result<(), FetchError> {
        let ticket = self.next_ticket();
        self.load_countries(ticket)
    }

    /// Fetch one country and show it as the only table row. A result overtaken by a newer
    /// table write is dropped and reported as `Ok`.
    ///
    /// ### Errors
    /// Returns the source's [`FetchError`] (e.g. `NotFound` for an unknown name) after
    /// showing [`Endpoint::Country`]'s message.
    pub fn fetch_country(&self, name: &str) -> Result<(), FetchError> {
        let ticket = self.next_ticket();
        self.load_country(name, ticket)
    }

    /// Show `message` on the banner and hide it after the configured delay, unless a newer
    /// message has replaced it by then. The returned handle finishes when the timer fires.
    pub fn show_error(&self, message: &str) -> JoinHandle<()> {
        let generation = {
            let mut g = lock(&self.inner.error_generation);
            *g += 1;
            self.inner.surface.show_error(message);
            *g
        };
        let this = self.clone();
        thread::spawn(move || {
            thread::sleep(this.inner.config.error_display);
            let g = lock(&this.inner.error_generation);
            if *g == generation {
                this.inner.surface.hide_error();
            }
        })
    }

    fn next_ticket(&self) -> u64 {
        self.inner.table_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, ticket: u64) -> bool {
        self.inner.table_seq.load(Ordering::SeqCst) == ticket
    }

    fn load_countries(&self, ticket: u64) -> Result<(), FetchError> {
        let shared = &*self.inner;
        let _loading = LoadingGuard::enter(shared);
        let result = shared.source.fetch_all_countries();
        let _write = lock(&shared.table_write);
        if !self.is_current(ticket) {
            log::debug!("dropping superseded country list (ticket {})", ticket);
            return Ok(());
        }
        match result {
            Ok(list) => {
                shared.surface.replace_countries(country_rows(&list));
                Ok(())
            }
            Err(e) => {
                self.fail(Endpoint::Countries, &e);
                Err(e)
            }
        }
    }

    fn load_country(&self, name: &str, ticket: u64) -> Result<(), FetchError> {
        let shared = &*self.inner;
        let _loading = LoadingGuard::enter(shared);
        let result = shared.source.fetch_country(name);
        let _write = lock(&shared.table_write);
        if !self.is_current(ticket) {
            log::debug!("dropping superseded result for {:?} (ticket {})", name, ticket);
            return Ok(());
        }
        match result {
            Ok(stats) => {
                shared.surface.replace_countries(vec![country_row(&stats)]);
                Ok(())
            }
            Err(e) => {
                self.fail(Endpoint::Country, &e);
                Err(e)
            }
        }
    }

    fn fail(&self, endpoint: Endpoint, err: &FetchError) {
        if err.is_timeout() {
            log::warn!("{:?} request timed out: {}", endpoint, err);
        } else {
            log::warn!("{:?} request failed: {}", endpoint, err);
        }
        self.show_error(endpoint.error_message());
    }
}
