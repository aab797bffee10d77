// In crates/timeseries/src/lib.rs

use chrono::{DateTime, Days, NaiveDate, Utc};
use core_types::{Error, Observation, Result};

/// Chronologically ordered price history for a single instrument.
///
/// The observations are always sorted ascending by timestamp, regardless of the
/// order updates arrive in. Observations sharing a timestamp keep their insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeSeries {
    series: Vec<Observation>,
}

impl TimeSeries {
    /// Creates a new, empty series.
    pub fn new() -> Self {
        Self { series: Vec::new() }
    }

    /// Inserts an observation, keeping the series sorted by timestamp.
    ///
    /// The insertion point is after every existing observation with the same
    /// timestamp, so duplicates are ordered by arrival.
    pub fn update(&mut self, timestamp: DateTime<Utc>, value: f64) {
        let index = self.series.partition_point(|obs| obs.timestamp <= timestamp);
        tracing::trace!(%timestamp, value, index, "Inserting observation.");
        self.series.insert(index, Observation::new(timestamp, value));
    }

    /// The observation with the greatest timestamp, if any.
    pub fn latest(&self) -> Option<&Observation> {
        self.series.last()
    }

    /// Returns the `n`-th most recent observation, where `n = 1` is the latest.
    pub fn from_end(&self, n: usize) -> Result<&Observation> {
        let available = self.series.len();
        if n == 0 || n > available {
            return Err(Error::InsufficientHistory {
                requested: n,
                available,
            });
        }
        Ok(&self.series[available - n])
    }

    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.series.get(index)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.series.iter()
    }

    /// Closing prices for the `num_days` calendar days ending at `on_date`,
    /// ordered oldest to newest.
    ///
    /// Each day maps to the most recent observation dated on or before it, so the
    /// last known price is carried across days without trading. Days that precede
    /// the whole history produce no entry; the result is never padded.
    pub fn closing_prices_on_or_before(&self, on_date: NaiveDate, num_days: usize) -> Vec<Observation> {
        let mut closing = Vec::with_capacity(num_days.min(self.series.len()));
        for offset in 0..num_days {
            let Some(day) = on_date.checked_sub_days(Days::new(offset as u64)) else {
                break;
            };
            let end = self.series.partition_point(|obs| obs.date() <= day);
            if end == 0 {
                // Every earlier day predates the history as well.
                break;
            }
            closing.push(self.series[end - 1]);
        }
        closing.reverse();
        closing
    }
}

impl FromIterator<Observation> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = Observation>>(iter: I) -> Self {
        let mut series = TimeSeries::new();
        series.extend(iter);
        series
    }
}

impl Extend<Observation> for TimeSeries {
    fn extend<I: IntoIterator<Item = Observation>>(&mut self, iter: I) {
        for obs in iter {
            self.update(obs.timestamp, obs.value);
        }
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, hour, 0, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn values(observations: &[Observation]) -> Vec<f64> {
        observations.iter().map(|obs| obs.value).collect()
    }

    #[test]
    fn out_of_order_updates_are_sorted() {
        let mut series = TimeSeries::new();
        series.update(at(5, 10), 5.0);
        series.update(at(1, 10), 1.0);
        series.update(at(3, 10), 3.0);
        series.update(at(2, 10), 2.0);

        let timestamps: Vec<_> = series.iter().map(|obs| obs.timestamp).collect();
        assert!(timestamps.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(series.latest().map(|obs| obs.value), Some(5.0));
    }

    #[test]
    fn duplicate_timestamps_keep_insertion_order() {
        let mut series = TimeSeries::new();
        series.update(at(2, 10), 20.0);
        series.update(at(2, 10), 8.0);
        series.update(at(1, 10), 1.0);

        let collected: Vec<f64> = series.iter().map(|obs| obs.value).collect();
        assert_eq!(collected, vec![1.0, 20.0, 8.0]);
        assert_eq!(series.latest().map(|obs| obs.value), Some(8.0));
    }

    #[test]
    fn latest_is_none_when_empty() {
        let series = TimeSeries::new();
        assert!(series.is_empty());
        assert!(series.latest().is_none());
    }

    #[test]
    fn from_end_indexes_relative_to_latest() {
        let series: TimeSeries = (1..=4)
            .map(|day| Observation::new(at(day, 12), day as f64))
            .collect();

        assert_eq!(series.from_end(1).expect("latest").value, 4.0);
        assert_eq!(series.from_end(3).expect("third").value, 2.0);
    }

    #[test]
    fn from_end_beyond_history_is_out_of_range() {
        let mut series = TimeSeries::new();
        series.update(at(1, 12), 1.0);
        series.update(at(2, 12), 2.0);

        assert_eq!(
            series.from_end(3),
            Err(Error::InsufficientHistory { requested: 3, available: 2 })
        );
        assert!(matches!(series.from_end(0), Err(Error::InsufficientHistory { .. })));
    }

    #[test]
    fn closing_prices_use_last_update_of_each_day() {
        let mut series = TimeSeries::new();
        series.update(at(1, 9), 10.0);
        series.update(at(1, 15), 11.0);
        series.update(at(2, 15), 12.0);
        series.update(at(3, 9), 13.0);

        let closing = series.closing_prices_on_or_before(date(3), 3);
        assert_eq!(values(&closing), vec![11.0, 12.0, 13.0]);
    }

    #[test]
    fn closing_prices_carry_forward_across_gaps() {
        let mut series = TimeSeries::new();
        series.update(at(1, 12), 10.0);
        series.update(at(4, 12), 40.0);

        let closing = series.closing_prices_on_or_before(date(5), 5);
        assert_eq!(values(&closing), vec![10.0, 10.0, 10.0, 40.0, 40.0]);
    }

    #[test]
    fn closing_prices_are_short_when_history_is_short() {
        let mut series = TimeSeries::new();
        series.update(at(3, 12), 3.0);
        series.update(at(4, 12), 4.0);

        let closing = series.closing_prices_on_or_before(date(4), 10);
        assert_eq!(values(&closing), vec![3.0, 4.0]);
    }

    #[test]
    fn closing_prices_ignore_later_observations() {
        let mut series = TimeSeries::new();
        series.update(at(1, 12), 1.0);
        series.update(at(2, 12), 2.0);
        series.update(at(9, 12), 9.0);

        let closing = series.closing_prices_on_or_before(date(2), 2);
        assert_eq!(values(&closing), vec![1.0, 2.0]);
    }

    #[test]
    fn closing_prices_before_history_are_empty() {
        let mut series = TimeSeries::new();
        series.update(at(10, 12), 1.0);

        assert!(series.closing_prices_on_or_before(date(9), 5).is_empty());
    }

    #[test]
    fn huge_day_count_is_bounded_by_history() {
        let mut series = TimeSeries::new();
        series.update(at(5, 12), 5.0);

        let closing = series.closing_prices_on_or_before(date(5), usize::MAX);
        assert_eq!(values(&closing), vec![5.0]);
    }

    #[test]
    fn closing_prices_are_idempotent() {
        let series: TimeSeries = [(1, 3.0), (2, 1.0), (4, 7.0)]
            .into_iter()
            .map(|(day, value)| Observation::new(at(day, 12), value))
            .collect();

        let first = series.closing_prices_on_or_before(date(6), 4);
        let second = series.closing_prices_on_or_before(date(6), 4);
        assert_eq!(first, second);
    }
}
