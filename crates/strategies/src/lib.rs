// In crates/strategies/src/lib.rs

use chrono::NaiveDate;
use core_types::StockSignal;
use timeseries::TimeSeries;

pub mod ma_crossover;
pub mod moving_average;
pub mod types;

pub use ma_crossover::MACrossover;
pub use moving_average::MovingAverage;

/// The universal interface for a signal-generating strategy.
///
/// A strategy analyzes an instrument's price history and produces a `StockSignal`
/// for a given day. Strategies hold configuration only; every assessment is
/// derived from the history it is handed.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    fn assess(&self, history: &TimeSeries, on_date: NaiveDate) -> StockSignal;
}
