use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use covid_dash::api::{DEFAULT_BASE_URL, StatsSource};
use covid_dash::dashboard::EMPTY_SEARCH_MESSAGE;
use covid_dash::view::{self, CountryRow, GlobalView};
use covid_dash::{Client, Dashboard, DashboardConfig, Page, storage};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "covid",
    version,
    about = "Fetch and display global and per-country COVID-19 statistics"
)]
struct Cli {
    /// API base URL.
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Request timeout in seconds.
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the worldwide summary.
    Summary,
    /// Print the per-country table (and optionally save it).
    Countries(CountriesArgs),
    /// Look up a single country by name.
    Country {
        /// Country name, ISO2/ISO3 code, or numeric id (e.g., "Germany", "DE").
        name: String,
    },
    /// Load everything and write the dashboard as a standalone HTML page.
    Dashboard {
        /// Output file (e.g., dashboard.html).
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Debug)]
enum OutFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct CountriesArgs {
    /// Only print the first N rows (API order).
    #[arg(long)]
    limit: Option<usize>,
    /// Save all rows to file (format inferred by --format or extension).
    #[arg(long)]
    out: Option<PathBuf>,
    /// Output format (csv or json). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let client = Client::with_timeout(Duration::from_secs(cli.timeout)).with_base_url(&cli.base_url);
    match cli.cmd {
        Command::Summary => cmd_summary(&client),
        Command::Countries(args) => cmd_countries(&client, args),
        Command::Country { name } => cmd_country(&client, &name),
        Command::Dashboard { out } => cmd_dashboard(client, out),
    }
}

fn print_global(view: &GlobalView) {
    println!("Last updated: {}", view.last_updated);
    for card in &view.cards {
        println!("{:<16} {:>16}  {}", card.title, card.value, card.detail);
    }
}

fn print_rows(rows: &[CountryRow]) {
    println!(
        "{:<28} {:>24} {:>20} {:>24} {:>22}",
        "Country", "Cases", "Deaths", "Recovered", "Active"
    );
    for r in rows {
        let pair = |c: &view::MetricCell| format!("{} ({})", c.value, c.detail);
        println!(
            "{:<28} {:>24} {:>20} {:>24} {:>22}",
            r.name,
            pair(&r.cases),
            pair(&r.deaths),
            pair(&r.recovered),
            pair(&r.active)
        );
    }
}

fn cmd_summary(client: &Client) -> Result<()> {
    let stats = client.fetch_global().context("fetch global summary")?;
    print_global(&view::global_view(&stats));
    Ok(())
}

fn cmd_countries(client: &Client, args: CountriesArgs) -> Result<()> {
    let list = client.fetch_all_countries().context("fetch country list")?;

    if let Some(path) = args.out.as_ref() {
        let fmt = match args.format {
            Some(OutFormat::Csv) => "csv",
            Some(OutFormat::Json) => "json",
            None => path.extension().and_then(|e| e.to_str()).unwrap_or("csv"),
        }
        .to_ascii_lowercase();
        match fmt.as_str() {
            "csv" => storage::save_csv(&list, path)?,
            "json" => storage::save_json(&list, path)?,
            other => anyhow::bail!("unsupported format: {}", other),
        }
        eprintln!("Saved {} rows to {}", list.len(), path.display());
    }

    let shown = match args.limit {
        Some(n) => &list[..n.min(list.len())],
        None => &list[..],
    };
    print_rows(&view::country_rows(shown));
    Ok(())
}

fn cmd_country(client: &Client, name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!(EMPTY_SEARCH_MESSAGE);
    }
    let stats = client
        .fetch_country(name)
        .with_context(|| format!("look up {:?}", name))?;
    print_rows(&[view::country_row(&stats)]);
    Ok(())
}

fn cmd_dashboard(client: Client, out: PathBuf) -> Result<()> {
    // The banner would only matter on a live page; keep it up until the page is written.
    let config = DashboardConfig {
        error_display: Duration::from_secs(3600),
    };
    let dash = Dashboard::new(client, Page::new(), config);
    for handle in dash.bootstrap() {
        if handle.join().is_err() {
            anyhow::bail!("dashboard worker panicked");
        }
    }
    let page = dash.surface();
    if let Some(err) = page.error() {
        eprintln!("Warning: {}", err);
    }
    std::fs::write(&out, page.to_html())
        .with_context(|| format!("write {}", out.display()))?;
    eprintln!("Wrote dashboard to {}", out.display());
    Ok(())
}
