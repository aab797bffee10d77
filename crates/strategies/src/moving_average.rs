// In crates/strategies/src/moving_average.rs

use chrono::NaiveDate;
use core_types::{Error, Result};
use ta::indicators::SimpleMovingAverage as Sma;
use ta::Next;
use timeseries::TimeSeries;

/// A simple moving average over the closing prices of a borrowed `TimeSeries`.
///
/// The view owns no data and caches nothing; every call to [`value_on`] is
/// recomputed from the series.
///
/// [`value_on`]: MovingAverage::value_on
#[derive(Debug, Clone, Copy)]
pub struct MovingAverage<'a> {
    series: &'a TimeSeries,
    window: usize,
}

impl<'a> MovingAverage<'a> {
    pub fn new(series: &'a TimeSeries, window: usize) -> Result<Self> {
        if window == 0 {
            return Err(Error::InvalidWindow {
                reason: "window must be at least one day".into(),
            });
        }
        Ok(Self { series, window })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Mean of the `window` closing prices ending at `date`.
    ///
    /// Fails with `NotEnoughData` rather than averaging a partial window.
    pub fn value_on(&self, date: NaiveDate) -> Result<f64> {
        let closing = self.series.closing_prices_on_or_before(date, self.window);
        if closing.len() < self.window {
            return Err(Error::NotEnoughData {
                window: self.window,
                available: closing.len(),
            });
        }

        let mut sma = Sma::new(self.window).map_err(|e| Error::InvalidWindow {
            reason: format!("{e:?}"),
        })?;
        Ok(closing.iter().fold(0.0, |_, obs| sma.next(obs.value)))
    }
}
