//! tint-quote - CLI to price window tint quotes.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use tint_quote::catalog::{suggest_rooms, TtlCache};
use tint_quote::{calculate_quote_files, generate_report, Catalog, CatalogSnapshot, EngineConfig};

/// Maximum number of room suggestions printed.
const SUGGESTION_LIMIT: usize = 10;

/// Price a window tint quote and print material rollups.
#[derive(Parser, Debug)]
#[command(name = "tint-quote")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Quote tree JSON file
    #[arg(short, long, required_unless_present = "suggest_room")]
    quote: Option<PathBuf>,

    /// Catalog JSON file with films, materials and rooms
    #[arg(short, long)]
    catalog: PathBuf,

    /// Engine configuration JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Deposit percent, overriding the quote and config
    #[arg(short, long)]
    deposit: Option<f64>,

    /// Print the full calculation as JSON
    #[arg(long)]
    json: bool,

    /// Validate only; exit with an error if the quote has problems
    #[arg(long)]
    validate: bool,

    /// List catalog rooms matching a name prefix and exit
    #[arg(long, value_name = "PREFIX")]
    suggest_room: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if config.roll_widths_in.is_empty() {
        warn!("No roll widths configured; every size will be infeasible");
    }

    if let Some(prefix) = &args.suggest_room {
        let catalog = CatalogSnapshot::load(&args.catalog)
            .with_context(|| format!("Failed to load catalog {}", args.catalog.display()))?;
        let mut cache = TtlCache::new(Duration::from_secs(300));
        let rooms = catalog.get_rooms();
        let suggestions = suggest_rooms(
            &rooms,
            prefix,
            SUGGESTION_LIMIT,
            &mut cache,
            Instant::now(),
        );
        for room in suggestions {
            println!("{}", room.name);
        }
        return Ok(());
    }

    let Some(quote_path) = args.quote.as_deref() else {
        anyhow::bail!("--quote is required");
    };

    info!("Processing: {}", quote_path.display());

    let (quote, calc) = calculate_quote_files(quote_path, &args.catalog, &config, args.deposit)
        .with_context(|| format!("Failed to calculate {}", quote_path.display()))?;

    if args.validate {
        for err in &calc.validation_errors {
            error!("{}", err);
        }
        if calc.has_errors() {
            anyhow::bail!("Validation failed with {} error(s)", calc.validation_errors.len());
        }
        info!("Validation passed");
        return Ok(());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&calc)?;
        println!("{}", json);
        return Ok(());
    }

    let title = if quote.name.is_empty() {
        quote.id.as_str()
    } else {
        quote.name.as_str()
    };
    let report = generate_report(&calc, title, &config)?;
    print!("{}", report);

    Ok(())
}
