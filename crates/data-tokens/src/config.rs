//! Resolver settings loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::error::CliError;
use crate::resolver::DEFAULT_MAX_UNIQUE_ID_LENGTH;

/// Name reported to OrthoConfig when loading settings without CLI flags.
const PROGRAM_NAME: &str = "data-tokens";

/// Configuration values controlling how tokens are resolved.
///
/// Values come from `DATA_TOKENS_*` environment variables or a
/// configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DATA_TOKENS")]
pub struct ResolverSettings {
    /// Seed for reproducible identifiers and names.
    pub seed: Option<u64>,
    /// Longest identifier `<UNIQUEIDN>` may request.
    #[ortho_config(default = DEFAULT_MAX_UNIQUE_ID_LENGTH)]
    pub max_unique_id_length: usize,
}

impl ResolverSettings {
    /// Loads settings from the environment and configuration files only.
    ///
    /// Command-line flags are left to the caller so positional values are
    /// not mistaken for settings.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Settings`] if a configured value cannot be parsed.
    pub fn load_ambient() -> Result<Self, CliError> {
        Self::load_from_iter([OsString::from(PROGRAM_NAME)]).map_err(|e| CliError::Settings {
            message: e.to_string(),
        })
    }
}
