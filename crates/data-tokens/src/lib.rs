//! Test-data token resolution for end-to-end browser suites.
//!
//! Test steps describe their inputs with symbolic placeholders and resolve
//! them just before typing them into a page. A placeholder is a whole string
//! wrapped in angle brackets:
//!
//! | Token | Value |
//! |---|---|
//! | `<TODAY>`, `<TODAY+N>`, `<TODAY-N>` | current date shifted by `N` days, `MM/DD/YYYY` |
//! | `<DOB>`, `<DOB+NY>`, `<DOB-NY>` | current date shifted by `N` years, `MM/DD/YYYY` |
//! | `<UNIQUEID>`, `<UNIQUEIDN>` | `[A-Za-z0-9]` identifier, 12 or `N` characters |
//! | `<FIRSTNAME>`, `<LASTNAME>` | random English first or last name |
//!
//! Anything else, including misspelt tokens, is returned unchanged.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use data_tokens::{FixedDateClock, SeededRandomSource, TokenResolver};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 12, 30).expect("valid date");
//! let resolver = TokenResolver::new(
//!     Arc::new(FixedDateClock::new(date)),
//!     Arc::new(SeededRandomSource::new(42)),
//! );
//!
//! assert_eq!(resolver.resolve("<TODAY+2>"), "01/01/2025");
//! assert_eq!(resolver.resolve("<DOB-20Y>"), "12/30/2004");
//! assert_eq!(resolver.resolve("<UNIQUEID6>").len(), 6);
//! assert_eq!(resolver.resolve("<BIRTHDAY>"), "<BIRTHDAY>");
//! ```

pub mod cli;
mod clock;
mod config;
mod date;
mod error;
mod random;
mod registration;
mod resolver;
#[cfg(test)]
mod test_support;
mod token;

pub use clock::FixedDateClock;
pub use config::ResolverSettings;
pub use date::{DATE_FORMAT, format_date};
pub use error::CliError;
pub use random::{
    RandomSource, SeededRandomSource, ThreadRandomSource, generate_unique_id, random_source_for,
};
pub use registration::{EMAIL_DOMAIN, RegistrationData};
pub use resolver::{DEFAULT_MAX_UNIQUE_ID_LENGTH, Resolution, TokenResolver, resolve};
pub use token::{DEFAULT_UNIQUE_ID_LENGTH, Direction, Offset, Token};
