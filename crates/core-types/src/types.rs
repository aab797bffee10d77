// In crates/core-types/src/types.rs

use std::fmt::{Display, Formatter};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;

/// A single price observation for an instrument.
///
/// Observations are only created by an update and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl Observation {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// The UTC calendar day this observation falls on.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }
}

/// The outcome of a moving-average crossover evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockSignal {
    Buy,
    #[default]
    Neutral,
    Sell,
}

impl StockSignal {
    /// Directional weight of the signal: buy is `1`, neutral `0`, sell `-1`.
    pub fn weight(self) -> i8 {
        match self {
            StockSignal::Buy => 1,
            StockSignal::Neutral => 0,
            StockSignal::Sell => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockSignal::Buy => "buy",
            StockSignal::Neutral => "neutral",
            StockSignal::Sell => "sell",
        }
    }
}

impl From<StockSignal> for i8 {
    fn from(signal: StockSignal) -> Self {
        signal.weight()
    }
}

impl Display for StockSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized instrument symbol (trimmed, upper-cased, never empty).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidSymbol);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Symbol {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Symbol> for String {
    fn from(value: Symbol) -> Self {
        value.0
    }
}
