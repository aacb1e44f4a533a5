//! Server settings read from the environment

use hub_batch::{BatchOptions, DEFAULT_MAX_ENTRIES};
use hub_core::DEFAULT_PRECISION;
use tracing::warn;

pub const PRECISION_VAR: &str = "HUB_PRECISION";
pub const MAX_BATCH_VAR: &str = "HUB_MAX_BATCH";
pub const HISTORY_VAR: &str = "HUB_HISTORY";

pub const DEFAULT_HISTORY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServerConfig {
    /// Decimal places in formatted output
    pub precision: usize,
    /// Entries allowed in one batch
    pub max_batch: usize,
    /// Conversions kept for the `history` tool
    pub history_capacity: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            precision: DEFAULT_PRECISION,
            max_batch: DEFAULT_MAX_ENTRIES,
            history_capacity: DEFAULT_HISTORY,
        }
    }
}

impl ServerConfig {
    /// Defaults overridden by `HUB_*` variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, with a custom variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = ServerConfig::default();
        ServerConfig {
            precision: read_usize(&lookup, PRECISION_VAR, defaults.precision),
            max_batch: read_usize(&lookup, MAX_BATCH_VAR, defaults.max_batch),
            history_capacity: read_usize(&lookup, HISTORY_VAR, defaults.history_capacity),
        }
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            max_entries: self.max_batch,
            precision: self.precision,
        }
    }
}

fn read_usize(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: usize) -> usize {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(key, value = %raw, default, "ignoring invalid setting");
                default
            }
        },
    }
}
