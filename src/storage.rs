//! CSV/JSON export of a fetched country list, used by `covid countries --out`.

use crate::models::CountryStats;
use anyhow::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Save country rows as CSV with header, in the order given.
pub fn save_csv<P: AsRef<Path>>(rows: &[CountryStats], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize((
        "country",
        "flag",
        "cases",
        "today_cases",
        "deaths",
        "today_deaths",
        "recovered",
        "active",
    ))?;
    for c in rows {
        wtr.serialize((
            &c.country,
            c.flag_url(),
            c.cases,
            c.today_cases,
            c.deaths,
            c.today_deaths,
            c.recovered,
            c.active,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save country rows as a pretty JSON array (API field names).
pub fn save_json<P: AsRef<Path>>(rows: &[CountryStats], path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let s = serde_json::to_string_pretty(rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
