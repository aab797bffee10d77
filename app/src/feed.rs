// In app/src/feed.rs

use anyhow::{Context, Result};
use app_config::PriceFeed;
use core_types::Symbol;
use stock::Stock;
use strategies::types::MACrossoverSettings;

/// Builds a `Stock` from a recorded feed.
///
/// The symbol given on the command line wins over the one in the feed.
pub fn build_stock(
    feed: &PriceFeed,
    symbol_override: Option<&str>,
    settings: MACrossoverSettings,
) -> Result<Stock> {
    let raw_symbol = symbol_override
        .or(feed.symbol.as_deref())
        .context("No symbol given on the command line or in the price feed.")?;
    let symbol = Symbol::parse(raw_symbol)?;

    let mut stock = Stock::with_settings(symbol, settings)?;
    for update in &feed.updates {
        stock
            .update(update.timestamp, update.price)
            .with_context(|| format!("Invalid update at {}", update.timestamp))?;
    }

    tracing::info!(symbol = %stock.symbol(), updates = feed.updates.len(), "Loaded price feed.");
    Ok(stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_config::PriceUpdate;
    use chrono::{TimeZone, Utc};

    fn feed(symbol: Option<&str>, prices: &[f64]) -> PriceFeed {
        PriceFeed {
            symbol: symbol.map(str::to_owned),
            updates: prices
                .iter()
                .enumerate()
                .map(|(i, price)| PriceUpdate {
                    timestamp: Utc.with_ymd_and_hms(2024, 1, i as u32 + 1, 16, 0, 0).unwrap(),
                    price: *price,
                })
                .collect(),
        }
    }

    #[test]
    fn command_line_symbol_overrides_feed() {
        let stock = build_stock(&feed(Some("msft"), &[1.0]), Some("goog"), MACrossoverSettings::default())
            .expect("stock");
        assert_eq!(stock.symbol().as_str(), "GOOG");
        assert_eq!(stock.price(), Some(1.0));
    }

    #[test]
    fn missing_symbol_is_an_error() {
        assert!(build_stock(&feed(None, &[1.0]), None, MACrossoverSettings::default()).is_err());
    }

    #[test]
    fn negative_price_in_feed_is_an_error() {
        let result = build_stock(&feed(Some("goog"), &[1.0, -2.0]), None, MACrossoverSettings::default());
        assert!(result.is_err());
    }
}
