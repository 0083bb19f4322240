use std::env;
use std::fmt::Display;
use std::str::FromStr;

use chrono::{FixedOffset, Offset, Utc};
use thiserror::Error;
use tracing::info;

pub const CHANNEL_BUFFER_KEY: &str = "MARKETPLACE_CHANNEL_BUFFER";
pub const LOAD_CONCURRENCY_KEY: &str = "MARKETPLACE_LOAD_CONCURRENCY";
pub const UTC_OFFSET_KEY: &str = "MARKETPLACE_UTC_OFFSET_MINUTES";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Runtime settings for the order system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of each resource actor's request channel.
    pub channel_buffer: usize,
    /// Orders formatted at once when loading a batch.
    pub load_concurrency: usize,
    /// Offset timestamps are shown in.
    pub display_offset: FixedOffset,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            load_concurrency: 16,
            display_offset: Utc.fix(),
        }
    }
}

impl SystemConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let channel_buffer = positive(CHANNEL_BUFFER_KEY, try_load(&lookup, CHANNEL_BUFFER_KEY, defaults.channel_buffer)?)?;
        let load_concurrency =
            positive(LOAD_CONCURRENCY_KEY, try_load(&lookup, LOAD_CONCURRENCY_KEY, defaults.load_concurrency)?)?;

        let offset_minutes: i32 = try_load(&lookup, UTC_OFFSET_KEY, 0)?;
        let display_offset = offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::Invalid {
                key: UTC_OFFSET_KEY,
                value: offset_minutes.to_string(),
                reason: "offset must be within ±24h".to_string(),
            })?;

        Ok(Self {
            channel_buffer,
            load_concurrency,
            display_offset,
        })
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default}");
            Ok(default)
        }
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn positive(key: &'static str, value: usize) -> Result<usize, ConfigError> {
    if value == 0 {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = SystemConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SystemConfig::default());
        assert_eq!(config.display_offset.local_minus_utc(), 0);
    }

    #[test]
    fn test_values_are_parsed() {
        let config = SystemConfig::from_lookup(lookup(&[
            (CHANNEL_BUFFER_KEY, "64"),
            (LOAD_CONCURRENCY_KEY, " 4 "),
            (UTC_OFFSET_KEY, "-180"),
        ]))
        .unwrap();
        assert_eq!(config.channel_buffer, 64);
        assert_eq!(config.load_concurrency, 4);
        assert_eq!(config.display_offset.local_minus_utc(), -3 * 3600);
    }

    #[test]
    fn test_bad_values_are_rejected() {
        let zero = SystemConfig::from_lookup(lookup(&[(CHANNEL_BUFFER_KEY, "0")]));
        assert!(matches!(zero, Err(ConfigError::Invalid { key: CHANNEL_BUFFER_KEY, .. })));

        let junk = SystemConfig::from_lookup(lookup(&[(LOAD_CONCURRENCY_KEY, "many")]));
        assert!(matches!(junk, Err(ConfigError::Invalid { key: LOAD_CONCURRENCY_KEY, .. })));

        let far = SystemConfig::from_lookup(lookup(&[(UTC_OFFSET_KEY, "1500")]));
        assert!(matches!(far, Err(ConfigError::Invalid { key: UTC_OFFSET_KEY, .. })));
    }
}
