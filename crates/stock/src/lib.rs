// In crates/stock/src/lib.rs

use chrono::{DateTime, NaiveDate, Utc};
use core_types::{Error, Result, StockSignal, Symbol};
use strategies::types::MACrossoverSettings;
use strategies::{MACrossover, Strategy};
use timeseries::TimeSeries;

/// A single instrument and its price history.
///
/// `Stock` owns its `TimeSeries` outright; instances never share state. Callers
/// that need one across threads should put it behind an `RwLock`, taking the
/// write lock only for [`Stock::update`].
#[derive(Debug, Clone)]
pub struct Stock {
    symbol: Symbol,
    history: TimeSeries,
    crossover: MACrossover,
}

impl Stock {
    /// Creates a stock using the default 5-day/10-day crossover.
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            history: TimeSeries::new(),
            crossover: MACrossover::default(),
        }
    }

    pub fn with_settings(symbol: Symbol, settings: MACrossoverSettings) -> Result<Self> {
        Ok(Self {
            symbol,
            history: TimeSeries::new(),
            crossover: MACrossover::new(settings)?,
        })
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn history(&self) -> &TimeSeries {
        &self.history
    }

    /// The most recent price, or `None` before the first update.
    pub fn price(&self) -> Option<f64> {
        self.history.latest().map(|obs| obs.value)
    }

    /// Records a price observation.
    ///
    /// Negative and non-finite prices are rejected before anything is written.
    pub fn update(&mut self, timestamp: DateTime<Utc>, price: f64) -> Result<()> {
        if !price.is_finite() || price < 0.0 {
            tracing::warn!(symbol = %self.symbol, %timestamp, price, "Rejected price update.");
            return Err(Error::InvalidPrice { price });
        }
        self.history.update(timestamp, price);
        Ok(())
    }

    /// Whether the three latest observations are strictly increasing.
    pub fn is_increasing_trend(&self) -> Result<bool> {
        let third = self.history.from_end(3)?.value;
        let second = self.history.from_end(2)?.value;
        let latest = self.history.from_end(1)?.value;
        Ok(third < second && second < latest)
    }

    /// The moving-average crossover signal for `on_date`.
    ///
    /// Insufficient history yields `StockSignal::Neutral` rather than an error.
    pub fn crossover_signal(&self, on_date: NaiveDate) -> StockSignal {
        self.crossover.assess(&self.history, on_date)
    }
}
