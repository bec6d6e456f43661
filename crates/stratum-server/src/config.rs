#![forbid(unsafe_code)]

//! Region-mover configuration.
//!
//! [`MoverConfig::default()`] is the stock behavior. With the `config`
//! feature the same struct loads from TOML; missing keys keep their defaults.
//!
//! ```toml
//! # stratum.toml
//! skip_zero_offset = true
//! max_planes = 2
//! redraw_limit = 64
//! ```

#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use stratum_render::redraw::{DEFAULT_REDRAW_LIMIT, RedrawQueue};

/// Default number of display planes a mover accepts.
pub const DEFAULT_MAX_PLANES: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default))]
pub struct MoverConfig {
    /// Return before any clipping when the offset is `(0, 0)`.
    pub skip_zero_offset: bool,
    /// Upper bound on the planes passed to a single move.
    pub max_planes: usize,
    /// Per-window pending limit for redraw queues built from this config.
    pub redraw_limit: usize,
}

impl Default for MoverConfig {
    fn default() -> Self {
        Self {
            skip_zero_offset: true,
            max_planes: DEFAULT_MAX_PLANES,
            redraw_limit: DEFAULT_REDRAW_LIMIT,
        }
    }
}

impl MoverConfig {
    /// Check every field, returning one message per problem.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.max_planes == 0 {
            errors.push("max_planes must be > 0".into());
        }
        if self.redraw_limit == 0 {
            errors.push("redraw_limit must be > 0".into());
        }
        errors
    }

    /// A redraw queue sized by [`redraw_limit`](Self::redraw_limit).
    pub fn redraw_queue(&self) -> RedrawQueue {
        RedrawQueue::with_limit(self.redraw_limit)
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(ConfigError::Toml)?;
        let errors = config.validate();
        if errors.is_empty() {
            Ok(config)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    #[cfg(feature = "config")]
    Toml(toml::de::Error),
    /// Validation errors.
    Validation(Vec<String>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "config")]
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Validation(errors) => {
                write!(f, "validation errors: {}", errors.join("; "))
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "config")]
            Self::Toml(e) => Some(e),
            Self::Validation(_) => None,
        }
    }
}
