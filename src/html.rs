//! Markup rendering. Pure functions from view-models to HTML fragments.
//!
//! Class names follow the Tailwind layout of the hosted dashboard page, so the fragments
//! can be dropped into that page as-is. `render_page` wraps them into a standalone document.

use crate::surface::PageState;
use crate::view::{CountryRow, GlobalView, MetricCell};
use std::fmt::Write;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Markup for the global stats panel (four cards).
pub fn render_global(view: &GlobalView) -> String {
    let mut out = String::new();
    for card in &view.cards {
        let _ = write!(
            out,
            r#"<div class="bg-white p-6 rounded-lg shadow-md">
    <h3 class="text-lg font-semibold text-gray-700 mb-2">{}</h3>
    <p class="text-3xl font-bold {}">{}</p>
    <p class="text-sm text-gray-500 mt-1">{}</p>
</div>
"#,
            escape(card.title),
            card.tone.css_class(),
            escape(&card.value),
            escape(&card.detail),
        );
    }
    out
}

fn metric_td(cell: &MetricCell) -> String {
    format!(
        r#"    <td class="px-6 py-4 whitespace-nowrap">
        <div class="text-sm text-gray-900">{}</div>
        <div class="text-sm text-gray-500">{}</div>
    </td>
"#,
        escape(&cell.value),
        escape(&cell.detail)
    )
}

/// Markup for the table body: one `<tr>` per row. Empty input gives an empty string.
pub fn render_countries(rows: &[CountryRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let name = escape(&row.name);
        let alt = escape(&row.flag_alt());
        let _ = write!(
            out,
            r#"<tr>
    <td class="px-6 py-4 whitespace-nowrap">
        <div class="flex items-center">
            <div class="flex-shrink-0 h-10 w-10">
                <img class="h-10 w-10 rounded-full" src="{}" alt="{}">
            </div>
            <div class="ml-4">
                <div class="text-sm font-medium text-gray-900">{}</div>
            </div>
        </div>
    </td>
"#,
            escape(&row.flag),
            alt,
            name,
        );
        for cell in row.cells() {
            out.push_str(&metric_td(cell));
        }
        out.push_str("</tr>\n");
    }
    out
}

/// A complete, self-contained dashboard document for the given page state.
pub fn render_page(state: &PageState) -> String {
    let last_updated = state.last_updated.as_deref().unwrap_or("");
    let global = state.global.as_ref().map(render_global).unwrap_or_default();
    let rows = render_countries(&state.rows);
    let loading_class = if state.loading { "" } else { " hidden" };
    let (error_class, error_text) = match &state.error {
        Some(msg) => ("", escape(msg)),
        None => (" hidden", String::new()),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>COVID-19 Dashboard</title>
<script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100">
<div class="container mx-auto px-4 py-8">
<h1 class="text-3xl font-bold text-gray-800 mb-2">COVID-19 Dashboard</h1>
<p class="text-sm text-gray-500 mb-6">Last updated: <span id="lastUpdated">{last_updated}</span></p>
<div id="loading" class="text-center text-gray-600 mb-4{loading_class}">Loading...</div>
<div id="error" class="bg-red-100 text-red-700 p-4 rounded mb-4{error_class}">{error_text}</div>
<div id="globalStats" class="grid grid-cols-1 md:grid-cols-4 gap-4 mb-8">
{global}</div>
<div class="bg-white rounded-lg shadow-md overflow-x-auto">
<table class="min-w-full divide-y divide-gray-200">
<thead class="bg-gray-50">
<tr>
<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">Country</th>
<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">Cases</th>
<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">Deaths</th>
<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">Recovered</th>
<th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase">Active</th>
</tr>
</thead>
<tbody id="countryData" class="bg-white divide-y divide-gray-200">
{rows}</tbody>
</table>
</div>
</div>
</body>
</html>
"#,
        last_updated = escape(last_updated),
    )
}
