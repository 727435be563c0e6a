//! View-models: plain data derived from API snapshots, ready to be drawn by any front end.
//!
//! Everything here is pure. The HTML renderer, the terminal printer and the desktop
//! dashboard all draw from these structs, so formatting decisions live in one place.

use crate::format::{format_number, format_percent, format_updated, percent_of};
use crate::models::{CountryStats, GlobalStats};
use serde::Serialize;

/// Accent used for a card's headline number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tone {
    Blue,
    Red,
    Green,
    Yellow,
}

impl Tone {
    /// Tailwind text class for the headline number.
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Blue => "text-blue-600",
            Tone::Red => "text-red-600",
            Tone::Green => "text-green-600",
            Tone::Yellow => "text-yellow-600",
        }
    }
}

/// One card of the global panel: headline number plus a secondary line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    pub detail: String,
    pub tone: Tone,
}

/// The global panel: last-updated stamp plus four cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalView {
    pub last_updated: String,
    pub cards: [StatCard; 4],
}

/// A number with its secondary line (today's delta or share of total cases).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCell {
    pub value: String,
    pub detail: String,
}

/// One table row. `flag` is empty when the API sent no flag URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryRow {
    pub flag: String,
    pub name: String,
    pub cases: MetricCell,
    pub deaths: MetricCell,
    pub recovered: MetricCell,
    pub active: MetricCell,
}

impl CountryRow {
    /// Metric cells in column order: cases, deaths, recovered, active.
    pub fn cells(&self) -> [&MetricCell; 4] {
        [&self.cases, &self.deaths, &self.recovered, &self.active]
    }

    /// Text standing in for the flag image, e.g. `"Peru flag"`.
    pub fn flag_alt(&self) -> String {
        format!("{} flag", self.name)
    }
}

fn delta(n: u64) -> String {
    format!("+{}", format_number(n))
}

/// Build the global panel for one `/all` snapshot.
pub fn global_view(stats: &GlobalStats) -> GlobalView {
    GlobalView {
        last_updated: format_updated(stats.updated),
        cards: [
            StatCard {
                title: "Total Cases",
                value: format_number(stats.cases),
                detail: format!("{} today", delta(stats.today_cases)),
                tone: Tone::Blue,
            },
            StatCard {
                title: "Total Deaths",
                value: format_number(stats.deaths),
                detail: format!("{} today", delta(stats.today_deaths)),
                tone: Tone::Red,
            },
            StatCard {
                title: "Total Recovered",
                value: format_number(stats.recovered),
                detail: format!(
                    "{} recovery rate",
                    format_percent(percent_of(stats.recovered, stats.cases))
                ),
                tone: Tone::Green,
            },
            StatCard {
                title: "Active Cases",
                value: format_number(stats.active),
                detail: format!(
                    "{} of total cases",
                    format_percent(percent_of(stats.active, stats.cases))
                ),
                tone: Tone::Yellow,
            },
        ],
    }
}

/// One row per country, in input order.
pub fn country_rows(stats: &[CountryStats]) -> Vec<CountryRow> {
    stats.iter().map(country_row).collect()
}

pub fn country_row(c: &CountryStats) -> CountryRow {
    CountryRow {
        flag: c.flag_url().to_string(),
        name: c.country.clone(),
        cases: MetricCell {
            value: format_number(c.cases),
            detail: delta(c.today_cases),
        },
        deaths: MetricCell {
            value: format_number(c.deaths),
            detail: delta(c.today_deaths),
        },
        recovered: MetricCell {
            value: format_number(c.recovered),
            detail: format_percent(percent_of(c.recovered, c.cases)),
        },
        active: MetricCell {
            value: format_number(c.active),
            detail: format_percent(percent_of(c.active, c.cases)),
        },
    }
}
