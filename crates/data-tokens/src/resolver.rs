//! Token resolution.
//!
//! [`TokenResolver`] turns a recognised token into a concrete value and
//! hands every other input back untouched. The clock and the random source
//! are injected so callers can pin both for reproducible runs.

use std::fmt;
use std::sync::{Arc, LazyLock};

use chrono::NaiveDate;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::config::ResolverSettings;
use crate::date::{format_date, shift_days, shift_years};
use crate::random::{RandomSource, ThreadRandomSource, random_source_for};
use crate::token::Token;

/// Default upper bound for the length requested by `<UNIQUEIDN>`.
pub const DEFAULT_MAX_UNIQUE_ID_LENGTH: usize = 1_048_576;

static DEFAULT_RESOLVER: LazyLock<TokenResolver> = LazyLock::new(TokenResolver::default);

/// Outcome of evaluating one input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resolution {
    /// The input was not a usable token and is returned verbatim.
    Literal(String),
    /// The input was a token and has been replaced by a generated value.
    Resolved(String),
}

impl Resolution {
    /// Returns `true` when a token was substituted.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Borrows the final text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(value) | Self::Resolved(value) => value,
        }
    }

    /// Flattens the outcome into the final text.
    #[must_use]
    pub fn into_string(self) -> String {
        match self {
            Self::Literal(value) | Self::Resolved(value) => value,
        }
    }
}

/// Resolves data tokens such as `<TODAY+2>`, `<DOB-20Y>`, `<UNIQUEID6>` and
/// `<FIRSTNAME>`.
///
/// Unrecognised or out-of-range tokens are never errors: the original text
/// is returned so a misspelt placeholder shows up verbatim in the test.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use chrono::NaiveDate;
/// use data_tokens::{FixedDateClock, SeededRandomSource, TokenResolver};
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 30).expect("valid date");
/// let resolver = TokenResolver::new(
///     Arc::new(FixedDateClock::new(date)),
///     Arc::new(SeededRandomSource::new(42)),
/// );
///
/// assert_eq!(resolver.resolve("<TODAY+2>"), "01/01/2025");
/// assert_eq!(resolver.resolve("<UNIQUEID7>").len(), 7);
/// assert_eq!(resolver.resolve("04/03/2003"), "04/03/2003");
/// assert_eq!(resolver.resolve_opt(None), None);
/// ```
#[derive(Clone)]
pub struct TokenResolver {
    clock: Arc<dyn Clock + Send + Sync>,
    random: Arc<dyn RandomSource>,
    max_unique_id_length: usize,
}

impl TokenResolver {
    /// Creates a resolver over the given collaborators.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock + Send + Sync>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            clock,
            random,
            max_unique_id_length: DEFAULT_MAX_UNIQUE_ID_LENGTH,
        }
    }

    /// Creates a resolver on the system clock, seeded when the settings
    /// carry a seed.
    #[must_use]
    pub fn from_settings(settings: &ResolverSettings) -> Self {
        Self::new(Arc::new(DefaultClock), random_source_for(settings.seed))
            .with_max_unique_id_length(settings.max_unique_id_length)
    }

    /// Sets the longest identifier `<UNIQUEIDN>` may request. Longer
    /// requests pass through unchanged.
    #[must_use]
    pub fn with_max_unique_id_length(mut self, max_unique_id_length: usize) -> Self {
        self.max_unique_id_length = max_unique_id_length;
        self
    }

    /// Returns the configured identifier length bound.
    #[must_use]
    pub const fn max_unique_id_length(&self) -> usize {
        self.max_unique_id_length
    }

    /// Evaluates `input`, keeping track of whether a token was substituted.
    #[must_use]
    pub fn evaluate(&self, input: &str) -> Resolution {
        let Some(token) = Token::parse(input) else {
            if input.starts_with('<') && input.ends_with('>') {
                debug!(value = input, "unrecognised data token; passing through");
            }
            return Resolution::Literal(input.to_owned());
        };

        match self.render(token) {
            Some(value) => Resolution::Resolved(value),
            None => {
                debug!(value = input, ?token, "data token out of range; passing through");
                Resolution::Literal(input.to_owned())
            }
        }
    }

    /// Resolves `input` to its final text.
    #[must_use]
    pub fn resolve(&self, input: &str) -> String {
        self.evaluate(input).into_string()
    }

    /// Resolves an optional input; `None` stays `None`.
    #[must_use]
    pub fn resolve_opt(&self, input: Option<&str>) -> Option<String> {
        input.map(|value| self.resolve(value))
    }

    fn render(&self, token: Token) -> Option<String> {
        match token {
            Token::Today(offset) => format_date(shift_days(self.today(), offset)?),
            Token::DateOfBirth(offset) => format_date(shift_years(self.today(), offset)?),
            Token::UniqueId(length) => {
                (length <= self.max_unique_id_length).then(|| self.random.unique_id(length))
            }
            Token::FirstName => Some(self.random.first_name()),
            Token::LastName => Some(self.random.last_name()),
        }
    }

    fn today(&self) -> NaiveDate {
        self.clock.local().date_naive()
    }
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock), Arc::new(ThreadRandomSource))
    }
}

impl fmt::Debug for TokenResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenResolver")
            .field("max_unique_id_length", &self.max_unique_id_length)
            .finish_non_exhaustive()
    }
}

/// Resolves `input` with the process-wide resolver (system clock,
/// thread-local randomness).
///
/// # Example
///
/// ```
/// assert_eq!(data_tokens::resolve(None), None);
/// assert_eq!(data_tokens::resolve(Some("")).as_deref(), Some(""));
/// assert_eq!(data_tokens::resolve(Some("<UNIQUEID>")).map(|id| id.len()), Some(12));
/// ```
#[must_use]
pub fn resolve(input: Option<&str>) -> Option<String> {
    DEFAULT_RESOLVER.resolve_opt(input)
}
