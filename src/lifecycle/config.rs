//! Runtime settings for an inventory session.

use crate::model::Currency;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const ENV_CHANNEL_CAPACITY: &str = "SPARE_PARTS_CHANNEL_CAPACITY";
pub const ENV_CURRENCY: &str = "SPARE_PARTS_CURRENCY";
pub const ENV_LOG: &str = "SPARE_PARTS_LOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many requests may queue for the session actor.
    pub channel_capacity: usize,
    /// Currency every price is expressed in.
    pub currency: Currency,
    /// Filter used when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            currency: Currency::Pkr,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset or unparsable values keep
    /// their defaults and log a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_CHANNEL_CAPACITY) {
            match raw.trim().parse::<usize>() {
                Ok(capacity) if capacity > 0 => config.channel_capacity = capacity,
                _ => warn!(key = ENV_CHANNEL_CAPACITY, value = %raw, "ignoring invalid channel capacity"),
            }
        }

        if let Some(raw) = lookup(ENV_CURRENCY) {
            match raw.parse::<Currency>() {
                Ok(currency) => config.currency = currency,
                Err(e) => warn!(key = ENV_CURRENCY, error = %e, "ignoring invalid currency"),
            }
        }

        if let Some(raw) = lookup(ENV_LOG) {
            if !raw.trim().is_empty() {
                config.log_level = raw.trim().to_string();
            }
        }

        config
    }
}
