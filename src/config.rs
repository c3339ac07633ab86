//! Configuration management for PhonyPhones.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::error::{ConfigError, ConfigResult};
use crate::models::{Contract, Currency};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Configuration for the PhonyPhones demo.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,

    /// Currency for plans that do not pick one (default: USD)
    pub default_currency: Currency,

    /// Contract length for plans that do not pick one (default: 12 months)
    pub default_contract: Contract,

    /// Whether created plans are announced on stdout (default: true)
    pub announce_plans: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONY_LOG_LEVEL`: Logging level (default: "info")
    /// - `PHONY_DEFAULT_CURRENCY`: USD, EUR, GBP or JPY (default: USD)
    /// - `PHONY_DEFAULT_CONTRACT`: 6, 12, 24 or minimum/medium/maximum (default: 12)
    /// - `PHONY_ANNOUNCE_PLANS`: true/false, yes/no, 1/0 (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy does not print, and a missing .env file is fine
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("PHONY_LOG_LEVEL").unwrap_or(defaults.log_level);
        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "PHONY_LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let default_currency =
            Self::parse_env("PHONY_DEFAULT_CURRENCY", defaults.default_currency)?;
        let default_contract =
            Self::parse_env("PHONY_DEFAULT_CONTRACT", defaults.default_contract)?;
        let announce_plans = Self::parse_env_bool("PHONY_ANNOUNCE_PLANS", defaults.announce_plans)?;

        Ok(Config {
            log_level,
            default_currency,
            default_contract,
            announce_plans,
        })
    }

    /// Parse an environment variable with `FromStr`, falling back to a default.
    fn parse_env<T>(var_name: &str, default: T) -> ConfigResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match env::var(var_name) {
            Ok(val) => val.parse::<T>().map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a boolean flag with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            default_currency: Currency::Usd,
            default_contract: Contract::Medium,
            announce_plans: true,
        }
    }
}
