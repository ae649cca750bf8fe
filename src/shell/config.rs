// Runtime configuration read from the process environment.
//
// Variables
// - HOST, PORT: listen address (defaults 0.0.0.0:8080).
// - INSIGHTS_SPENDING_MONTHS, INSIGHTS_TREND_MONTHS: series windows (defaults 4 and 6).

use crate::modules::fuel_logs::core::series::SeriesWindow;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    Invalid {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("{name} must be at least 1")]
    EmptyWindow { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub window: SeriesWindow,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = SeriesWindow::default();
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080, "port number")?;
        let spending_months =
            window_or(&lookup, "INSIGHTS_SPENDING_MONTHS", defaults.spending_months)?;
        let trend_months = window_or(&lookup, "INSIGHTS_TREND_MONTHS", defaults.trend_months)?;

        Ok(Self {
            host,
            port,
            window: SeriesWindow {
                spending_months,
                trend_months,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value,
            expected,
        }),
    }
}

fn window_or(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: usize,
) -> Result<usize, ConfigError> {
    let months = parse_or(lookup, name, default, "month count")?;
    if months == 0 {
        return Err(ConfigError::EmptyWindow { name });
    }
    Ok(months)
}
