//! Life expectancy CLI - clean the Eurostat export for one region
//!
//! ```bash
//! life-expectancy                   # Portugal (PT), default files
//! life-expectancy --country ES      # Spain
//! ```
//!
//! Input and output files live in `data/` (override with
//! `LIFE_EXPECTANCY_DATA_DIR`). Set `RUST_LOG=debug` for more output.

use clap::Parser;
use life_expectancy::{clean_data, logs, CleaningConfig};

#[derive(Parser)]
#[command(name = "life-expectancy")]
#[command(about = "Clean and transform life expectancy data for a specified country", long_about = None)]
struct Cli {
    /// Country code to filter the data
    #[arg(long, default_value = life_expectancy::config::DEFAULT_COUNTRY)]
    country: String,
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();
    logs::init_logging();

    let cli = Cli::parse();
    tracing::info!(country = %cli.country, "starting");

    let config = CleaningConfig::from_env().with_country(cli.country);

    match clean_data(&config) {
        Ok(report) => {
            tracing::debug!(?report, "done");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
