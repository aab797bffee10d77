// In crates/core-types/src/error.rs

use thiserror::Error;

/// The error taxonomy shared by the time series, the indicators and the stock facade.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Rejected at the write boundary; the series is left untouched.
    #[error("price should not be negative or non-finite: {price}")]
    InvalidPrice { price: f64 },

    #[error("requested entry {requested} from the end, but only {available} observations exist")]
    InsufficientHistory { requested: usize, available: usize },

    #[error("not enough data to calculate a {window}-day moving average ({available} closing prices)")]
    NotEnoughData { window: usize, available: usize },

    #[error("invalid moving-average window: {reason}")]
    InvalidWindow { reason: String },

    #[error("symbol cannot be empty")]
    InvalidSymbol,
}

pub type Result<T> = std::result::Result<T, Error>;
