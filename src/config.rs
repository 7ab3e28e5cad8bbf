use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Maximum number of path entries retained before the oldest is evicted.
pub const DEFAULT_MAX_SIZE: usize = 5;

/// Delay before a restored offset is actually written, giving
/// asynchronously-loaded content time to lay out.
pub const DEFAULT_RESTORE_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Capacity of the position store.
    pub max_history: usize,
    /// Scroll-capture throttle window in milliseconds; 0 disables throttling
    /// and captures on every scroll event.
    pub throttle_time_ms: u64,
    /// Delay in milliseconds before a restored offset is written.
    pub restore_delay_ms: u64,
}

impl Config {
    pub fn throttle_time(&self) -> Duration {
        Duration::from_millis(self.throttle_time_ms)
    }

    pub fn restore_delay(&self) -> Duration {
        Duration::from_millis(self.restore_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_history: DEFAULT_MAX_SIZE,
            throttle_time_ms: 0,
            restore_delay_ms: DEFAULT_RESTORE_DELAY_MS,
        }
    }
}
