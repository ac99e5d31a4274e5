//! Demo settings read from the environment.

use log::warn;
use thiserror::Error;

pub const ROWS_VAR: &str = "COMPOSELAB_ROWS";
pub const WIDTH_VAR: &str = "COMPOSELAB_WIDTH";
pub const HEIGHT_VAR: &str = "COMPOSELAB_HEIGHT";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid {expected}")]
    Unparsable {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("{var} must be at least 1")]
    ZeroRows { var: &'static str },
    #[error("{var} must be a positive finite size, got {value}")]
    InvalidSize { var: &'static str, value: f32 },
}

/// Grid row count and window size of the tutorial screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoConfig {
    pub rows: usize,
    pub width: f32,
    pub height: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            width: 360.0,
            height: 640.0,
        }
    }
}

impl DemoConfig {
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Reads `COMPOSELAB_ROWS`, `COMPOSELAB_WIDTH` and `COMPOSELAB_HEIGHT`.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`DemoConfig::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = lookup(ROWS_VAR) {
            config.rows = parse_rows(ROWS_VAR, &value)?;
        }
        if let Some(value) = lookup(WIDTH_VAR) {
            config.width = parse_size(WIDTH_VAR, &value)?;
        }
        if let Some(value) = lookup(HEIGHT_VAR) {
            config.height = parse_size(HEIGHT_VAR, &value)?;
        }
        Ok(config)
    }
}

fn parse_rows(var: &'static str, value: &str) -> Result<usize, ConfigError> {
    let rows = value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::Unparsable {
            var,
            value: value.to_owned(),
            expected: "row count",
        })?;
    if rows == 0 {
        warn!("rejecting {var}=0");
        return Err(ConfigError::ZeroRows { var });
    }
    Ok(rows)
}

fn parse_size(var: &'static str, value: &str) -> Result<f32, ConfigError> {
    let size = value
        .trim()
        .parse::<f32>()
        .map_err(|_| ConfigError::Unparsable {
            var,
            value: value.to_owned(),
            expected: "size in pixels",
        })?;
    if !size.is_finite() || size <= 0.0 {
        warn!("rejecting {var}={size}");
        return Err(ConfigError::InvalidSize { var, value: size });
    }
    Ok(size)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
