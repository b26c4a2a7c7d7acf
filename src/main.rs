use anyhow::Result;
use clap::Parser;
use farscraper::{
    archive::Layout,
    config::{Config, DEFAULT_BASE_URL, FIRST_YEAR, LAST_YEAR},
    driver,
    fetch::Fetcher,
};
use std::io;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Download the FARS national CSV archives, one year at a time.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// First year to fetch
    #[arg(long, default_value_t = FIRST_YEAR)]
    from: u16,

    /// Last year to fetch (inclusive)
    #[arg(long, default_value_t = LAST_YEAR)]
    to: u16,

    /// `flat` keeps ../data/FARS{year}NationalCSV.zip; `extracted` unpacks into data/raw/{year}/
    #[arg(long, value_enum, default_value_t = Layout::Extracted)]
    layout: Layout,

    /// Alternate mirror of the FARS download tree
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    info!("startup");

    // ─── 2) config ───────────────────────────────────────────────────
    let args = Args::parse();
    let config = Config {
        base_url: args.base_url,
        years: args.from..=args.to,
        layout: args.layout,
        ..Config::default()
    };

    // ─── 3) fetch every year ─────────────────────────────────────────
    let fetcher = Fetcher::new()?;
    let stdout = io::stdout();
    driver::run(&config, &fetcher, &mut stdout.lock())?;

    Ok(())
}
