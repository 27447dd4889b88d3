//! Optional TOML settings for the command-line front end.
//!
//! ```toml
//! max_name_len = 64
//! reject_long_names = true
//! ```
use std::path::Path;

use serde::Deserialize;

use crate::error::SettingsError;
use crate::parser::{DEFAULT_MAX_NAME_LEN, NamePolicy, ParseOptions};

/// Parser settings loaded from a TOML file. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Maximum length in bytes of section and key names.
    pub max_name_len: usize,
    /// Fail on overlong names instead of truncating them.
    pub reject_long_names: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_name_len: DEFAULT_MAX_NAME_LEN,
            reject_long_names: false,
        }
    }
}

impl Settings {
    /// Load settings from `path`. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid
    /// settings TOML.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// The parser options these settings describe.
    #[must_use]
    pub const fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            max_name_len: self.max_name_len,
            name_policy: if self.reject_long_names {
                NamePolicy::Reject
            } else {
                NamePolicy::Truncate
            },
        }
    }
}
