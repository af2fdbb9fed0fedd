//! Diagnostics configuration
//!
//! Accessibility warnings are a development aid. By default they follow the
//! build profile (on in debug builds, off in release builds); the
//! `ALERT_DIALOG_WARNINGS` environment variable can force them either way.

use std::str::FromStr;

use thiserror::Error;
use tracing::warn;

/// Environment variable overriding [`WarningMode`]
pub const WARNINGS_ENV_VAR: &str = "ALERT_DIALOG_WARNINGS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown warning mode `{0}` (expected `auto`, `always` or `never`)")]
    UnknownWarningMode(String),
}

/// When accessibility warnings are emitted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WarningMode {
    /// Only in builds with debug assertions
    #[default]
    Auto,
    Always,
    Never,
}

impl WarningMode {
    pub fn is_enabled(self) -> bool {
        match self {
            Self::Auto => cfg!(debug_assertions),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

impl FromStr for WarningMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "always" | "on" | "1" | "true" => Ok(Self::Always),
            "never" | "off" | "0" | "false" => Ok(Self::Never),
            other => Err(ConfigError::UnknownWarningMode(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    pub warnings: WarningMode,
}

impl DiagnosticsConfig {
    pub fn new(warnings: WarningMode) -> Self {
        Self { warnings }
    }

    /// Read the configuration from the process environment.
    ///
    /// An unreadable or unknown value is logged and treated as `auto`.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(WARNINGS_ENV_VAR).ok().as_deref())
    }

    fn from_env_value(value: Option<&str>) -> Self {
        let warnings = match value.map(WarningMode::from_str) {
            None => WarningMode::Auto,
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                warn!("Ignoring {}: {}", WARNINGS_ENV_VAR, e);
                WarningMode::Auto
            }
        };
        Self { warnings }
    }

    pub fn warnings_enabled(&self) -> bool {
        self.warnings.is_enabled()
    }
}
