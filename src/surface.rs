//! The regions a dashboard writes into, and an in-memory page that holds them.

use crate::html;
use crate::view::{CountryRow, GlobalView};
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};

/// Handles to the dashboard's output regions. Every `replace_*` call overwrites the
/// whole region; nothing is diffed.
pub trait Surface: Send + Sync + 'static {
    fn set_loading(&self, visible: bool);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    fn set_last_updated(&self, text: &str);
    fn replace_global(&self, view: GlobalView);
    fn replace_countries(&self, rows: Vec<CountryRow>);
}

/// Snapshot of everything a [`Page`] currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageState {
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<String>,
    pub global: Option<GlobalView>,
    pub rows: Vec<CountryRow>,
}

type Notifier = Box<dyn Fn() + Send + Sync>;

/// In-memory [`Surface`]. The CLI renders it to a document, the desktop app draws it
/// every frame, and tests inspect it directly.
#[derive(Default)]
pub struct Page {
    state: Mutex<PageState>,
    on_change: Option<Notifier>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `notify` after every change (e.g. to schedule a repaint).
    pub fn with_notifier(notify: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            state: Mutex::new(PageState::default()),
            on_change: Some(Box::new(notify)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        // A writer that panicked mid-update leaves plain data behind; keep serving it.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update(&self, f: impl FnOnce(&mut PageState)) {
        f(&mut self.lock());
        if let Some(notify) = &self.on_change {
            notify();
        }
    }

    pub fn snapshot(&self) -> PageState {
        self.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    pub fn error(&self) -> Option<String> {
        self.lock().error.clone()
    }

    pub fn global_html(&self) -> String {
        self.lock()
            .global
            .as_ref()
            .map(html::render_global)
            .unwrap_or_default()
    }

    pub fn table_html(&self) -> String {
        html::render_countries(&self.lock().rows)
    }

    /// Full standalone HTML document.
    pub fn to_html(&self) -> String {
        html::render_page(&self.lock())
    }
}

impl Surface for Page {
    fn set_loading(&self, visible: bool) {
        self.update(|s| s.loading = visible);
    }

    fn show_error(&self, message: &str) {
        self.update(|s| s.error = Some(message.to_string()));
    }

    fn hide_error(&self) {
        self.update(|s| s.error = None);
    }

    fn set_last_updated(&self, text: &str) {
        self.update(|s| s.last_updated = Some(text.to_string()));
    }

    fn replace_global(&self, view: GlobalView) {
        self.update(|s| s.global = Some(view));
    }

    fn replace_countries(&self, rows: Vec<CountryRow>) {
        self.update(|s| s.rows = rows);
    }
}
