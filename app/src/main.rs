// In app/src/main.rs

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;

mod feed;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = "Replays recorded prices through the moving-average crossover.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Prints the crossover signal for a single day.
    Signal {
        /// Path to the TOML price feed.
        #[arg(short, long)]
        prices: PathBuf,

        /// The day to evaluate, in YYYY-MM-DD format.
        #[arg(long)]
        on: NaiveDate,

        /// Overrides the symbol recorded in the feed.
        #[arg(short, long)]
        symbol: Option<String>,
    },

    /// Reports whether the last three prices are strictly increasing.
    Trend {
        #[arg(short, long)]
        prices: PathBuf,

        #[arg(short, long)]
        symbol: Option<String>,
    },

    /// Prints the signal for every calendar day covered by the feed.
    Replay {
        #[arg(short, long)]
        prices: PathBuf,

        #[arg(short, long)]
        symbol: Option<String>,
    },
}

// --- Main Application Entry Point ---

fn main() -> Result<()> {
    // Load environment variables from a .env file, if it exists.
    dotenvy::dotenv().ok();

    let settings = app_config::load_settings()?;

    let level = tracing::Level::from_str(&settings.app.log_level).unwrap_or(tracing::Level::INFO);
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_filter(tracing_subscriber::filter::Targets::new().with_default(level));
    tracing_subscriber::registry().with(fmt_layer).init();

    let cli = Cli::parse();
    tracing::info!(environment = %settings.app.environment, "Starting stock alerter");

    let crossover = settings.strategies.ma_crossover;
    match cli.command {
        Commands::Signal { prices, on, symbol } => {
            let feed = app_config::load_price_feed(&prices)?;
            let stock = feed::build_stock(&feed, symbol.as_deref(), crossover)?;
            println!("{} {} {}", stock.symbol(), on, stock.crossover_signal(on));
        }
        Commands::Trend { prices, symbol } => {
            let feed = app_config::load_price_feed(&prices)?;
            let stock = feed::build_stock(&feed, symbol.as_deref(), crossover)?;
            let increasing = stock.is_increasing_trend()?;
            println!("{} increasing={}", stock.symbol(), increasing);
        }
        Commands::Replay { prices, symbol } => {
            let feed = app_config::load_price_feed(&prices)?;
            let stock = feed::build_stock(&feed, symbol.as_deref(), crossover)?;
            handle_replay(&stock)?;
        }
    }

    Ok(())
}

// --- "Replay" Subcommand Logic ---

fn handle_replay(stock: &stock::Stock) -> Result<()> {
    let history = stock.history();
    let (Some(first), Some(last)) = (history.get(0), history.latest()) else {
        anyhow::bail!("Cannot replay: the price feed has no updates.");
    };

    for day in first.date().iter_days().take_while(|day| *day <= last.date()) {
        let closing = history
            .closing_prices_on_or_before(day, 1)
            .last()
            .map(|obs| obs.value);
        let signal = stock.crossover_signal(day);
        match closing {
            Some(price) => println!("{day} {price:.2} {signal}"),
            None => println!("{day} - {signal}"),
        }
    }

    Ok(())
}
