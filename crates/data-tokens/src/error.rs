//! Error types for the data-tokens crate.
//!
//! Resolution itself never fails; these errors belong to the outer
//! surfaces: loading settings and running the command-line tool.

use thiserror::Error;

/// Errors surfaced while configuring or running the command-line tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings from the environment or a configuration file were invalid.
    #[error("failed to load resolver settings: {message}")]
    Settings {
        /// Description of the configuration error.
        message: String,
    },

    /// Nothing was requested.
    #[error("no values supplied; pass at least one value or --registration")]
    MissingInput,

    /// The registration record could not be encoded.
    #[error("failed to encode registration data: {message}")]
    Serialize {
        /// Description of the serialisation error.
        message: String,
    },

    /// Writing to the output stream failed.
    #[error("failed to write output: {message}")]
    Output {
        /// Description of the I/O error.
        message: String,
    },
}
