// In crates/strategies/src/ma_crossover.rs

use chrono::NaiveDate;
use core_types::{Error, Result, StockSignal};
use timeseries::TimeSeries;

use crate::moving_average::MovingAverage;
use crate::types::MACrossoverSettings;
use crate::Strategy;

/// Short and long averages on the assessed day and on the day before it.
#[derive(Debug, Clone, Copy, PartialEq)]
struct CrossoverWindow {
    prev_short: f64,
    prev_long: f64,
    short: f64,
    long: f64,
}

/// The moving-average crossover strategy.
///
/// Each assessment rebuilds a short and a long `MovingAverage` over the history and
/// compares them on two consecutive days. Nothing is carried between calls.
#[derive(Debug, Clone)]
pub struct MACrossover {
    /// The configuration for this strategy instance.
    settings: MACrossoverSettings,
}

impl MACrossover {
    /// Creates a new `MACrossover` strategy instance from its settings.
    pub fn new(settings: MACrossoverSettings) -> Result<Self> {
        if settings.short_period == 0 {
            return Err(Error::InvalidWindow {
                reason: "short period must be at least one day".into(),
            });
        }
        if settings.short_period >= settings.long_period {
            return Err(Error::InvalidWindow {
                reason: format!(
                    "short period {} must be below long period {}",
                    settings.short_period, settings.long_period
                ),
            });
        }
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &MACrossoverSettings {
        &self.settings
    }

    fn window_on(&self, history: &TimeSeries, on_date: NaiveDate) -> Result<CrossoverWindow> {
        let short_ma = MovingAverage::new(history, self.settings.short_period as usize)?;
        let long_ma = MovingAverage::new(history, self.settings.long_period as usize)?;
        let Some(prev_date) = on_date.pred_opt() else {
            return Err(Error::NotEnoughData {
                window: long_ma.window(),
                available: 0,
            });
        };

        Ok(CrossoverWindow {
            prev_short: short_ma.value_on(prev_date)?,
            prev_long: long_ma.value_on(prev_date)?,
            short: short_ma.value_on(on_date)?,
            long: long_ma.value_on(on_date)?,
        })
    }
}

impl Default for MACrossover {
    fn default() -> Self {
        Self {
            settings: MACrossoverSettings::default(),
        }
    }
}

impl Strategy for MACrossover {
    fn name(&self) -> &'static str {
        "MACrossover"
    }

    fn assess(&self, history: &TimeSeries, on_date: NaiveDate) -> StockSignal {
        let settings = self.settings();
        match self.window_on(history, on_date) {
            Ok(window) => {
                let signal = classify(window);
                tracing::debug!(
                    strategy = self.name(),
                    short_period = settings.short_period,
                    long_period = settings.long_period,
                    %on_date,
                    short = window.short,
                    long = window.long,
                    prev_short = window.prev_short,
                    prev_long = window.prev_long,
                    %signal,
                    "Assessed moving-average crossover."
                );
                signal
            }
            // Insufficient history is never a buy or sell.
            Err(error) => {
                tracing::debug!(strategy = self.name(), %on_date, %error, "Crossover is neutral: averages unavailable.");
                StockSignal::Neutral
            }
        }
    }
}

/// The series was strictly under its reference and is now strictly over it.
fn is_crossover_below_to_above(prev: f64, prev_reference: f64, current: f64, current_reference: f64) -> bool {
    prev < prev_reference && current > current_reference
}

fn classify(window: CrossoverWindow) -> StockSignal {
    if is_crossover_below_to_above(window.prev_short, window.prev_long, window.short, window.long) {
        StockSignal::Buy
    } else if is_crossover_below_to_above(window.prev_long, window.prev_short, window.long, window.short) {
        StockSignal::Sell
    } else {
        StockSignal::Neutral
    }
}
