// In crates/strategies/src/types.rs

use serde::{Deserialize, Serialize};

/// Window sizes for the moving-average crossover, in calendar days.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct MACrossoverSettings {
    #[serde(default = "default_short_period")]
    pub short_period: u32,
    #[serde(default = "default_long_period")]
    pub long_period: u32,
}

impl Default for MACrossoverSettings {
    fn default() -> Self {
        Self {
            short_period: default_short_period(),
            long_period: default_long_period(),
        }
    }
}

fn default_short_period() -> u32 { 5 }
fn default_long_period() -> u32 { 10 }
