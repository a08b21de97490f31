use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub orders: OrdersConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Order submission settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrdersConfig {
    /// Give up on an order request after this many seconds (default: 15).
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Delay of the simulated order service in milliseconds (default: 0).
    #[serde(default)]
    pub simulated_delay_ms: u64,
}

/// Ingredient catalog settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file used when the CLI gets no `--catalog`.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_timeout_seconds() -> u64 {
    15
}

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            simulated_delay_ms: 0,
        }
    }
}

impl OrdersConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}
