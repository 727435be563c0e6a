//! Requests against a server that accepts connections but never answers must give up
//! after the client timeout, and the dashboard must not be left loading.

use covid_dash::{Client, Dashboard, DashboardConfig, Endpoint, Page, StatsSource};
use std::net::TcpListener;
use std::thread;
use std::time::{Duration, Instant};

/// Bind a local listener that accepts and holds every connection without replying.
fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let mut held = Vec::new();
        for stream in listener.incoming() {
            match stream {
                Ok(s) => held.push(s),
                Err(_) => break,
            }
        }
    });
    format!("http://{}/v3/covid-19", addr)
}

#[test]
fn hung_request_times_out() {
    let client = Client::with_timeout(Duration::from_millis(300)).with_base_url(silent_server());

    let started = Instant::now();
    let err = client.fetch_global().unwrap_err();
    assert!(err.is_timeout(), "expected a timeout, got {err}");
    assert!(started.elapsed() < Duration::from_secs(5));
}

#[test]
fn dashboard_clears_loading_after_timeout() {
    let client = Client::with_timeout(Duration::from_millis(300)).with_base_url(silent_server());
    let dash = Dashboard::new(
        client,
        Page::new(),
        DashboardConfig {
            error_display: Duration::from_secs(5),
        },
    );

    let err = dash.fetch_global().unwrap_err();
    assert!(err.is_timeout());
    let page = dash.surface();
    assert!(!page.is_loading());
    assert_eq!(page.error().as_deref(), Some(Endpoint::Global.error_message()));
    assert!(page.snapshot().global.is_none());
}
