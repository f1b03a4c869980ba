//! Command-line front end for the resolver.
//!
//! The `data-tokens` binary parses [`CliArgs`] and delegates to [`run`], so
//! the behaviour can be exercised in tests without spawning a process.

use std::io::Write;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::Parser;
use mockable::{Clock, DefaultClock};
use tracing::debug;

use crate::clock::FixedDateClock;
use crate::config::ResolverSettings;
use crate::error::CliError;
use crate::random::random_source_for;
use crate::registration::RegistrationData;
use crate::resolver::TokenResolver;

const RUN_DATE_FORMAT: &str = "%Y-%m-%d";

/// `data-tokens` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "data-tokens",
    about = "Resolve test-data placeholders such as <TODAY+2>, <DOB-20Y> or <UNIQUEID6>",
    version
)]
pub struct CliArgs {
    /// Values to resolve; anything that is not a token is echoed unchanged.
    #[arg(value_name = "value")]
    pub values: Vec<String>,
    /// Seed for reproducible identifiers and names. Overrides `DATA_TOKENS_SEED`.
    #[arg(long, value_name = "seed")]
    pub seed: Option<u64>,
    /// Pin the run date used by date tokens.
    #[arg(long = "date", value_name = "YYYY-MM-DD", value_parser = parse_run_date)]
    pub run_date: Option<NaiveDate>,
    /// Longest identifier `<UNIQUEIDN>` may request.
    #[arg(long = "max-unique-id-length", value_name = "n")]
    pub max_unique_id_length: Option<usize>,
    /// Print one generated registration record as JSON.
    #[arg(long)]
    pub registration: bool,
}

impl CliArgs {
    /// Builds a resolver from the flags, falling back to `settings`.
    #[must_use]
    pub fn build_resolver(&self, settings: &ResolverSettings) -> TokenResolver {
        let clock = self.run_date.map_or_else(
            || Arc::new(DefaultClock) as Arc<dyn Clock + Send + Sync>,
            |date| Arc::new(FixedDateClock::new(date)) as Arc<dyn Clock + Send + Sync>,
        );
        let seed = self.seed.or(settings.seed);
        let max_unique_id_length = self
            .max_unique_id_length
            .unwrap_or(settings.max_unique_id_length);

        TokenResolver::new(clock, random_source_for(seed))
            .with_max_unique_id_length(max_unique_id_length)
    }
}

/// Resolves every value in `args`, one per line, then the optional
/// registration record.
///
/// # Errors
///
/// Returns [`CliError::MissingInput`] when nothing was requested, and
/// [`CliError::Serialize`] or [`CliError::Output`] when the output cannot be
/// produced.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use data_tokens::cli::{CliArgs, run};
/// use data_tokens::{DEFAULT_MAX_UNIQUE_ID_LENGTH, ResolverSettings};
///
/// let args = CliArgs::try_parse_from(["data-tokens", "--date", "2024-12-30", "<TODAY+2>"])
///     .expect("parse args");
/// let settings = ResolverSettings {
///     seed: None,
///     max_unique_id_length: DEFAULT_MAX_UNIQUE_ID_LENGTH,
/// };
/// let mut out = Vec::new();
///
/// run(&args, &settings, &mut out).expect("run");
/// assert_eq!(String::from_utf8(out).expect("utf-8"), "01/01/2025\n");
/// ```
pub fn run(
    args: &CliArgs,
    settings: &ResolverSettings,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if args.values.is_empty() && !args.registration {
        return Err(CliError::MissingInput);
    }

    let resolver = args.build_resolver(settings);
    for value in &args.values {
        let resolution = resolver.evaluate(value);
        debug!(
            value = %value,
            resolved = resolution.is_resolved(),
            "value processed"
        );
        writeln!(out, "{}", resolution.as_str()).map_err(output_error)?;
    }

    if args.registration {
        let record = RegistrationData::generate(&resolver);
        let json = serde_json::to_string_pretty(&record).map_err(|e| CliError::Serialize {
            message: e.to_string(),
        })?;
        writeln!(out, "{json}").map_err(output_error)?;
    }

    Ok(())
}

fn parse_run_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, RUN_DATE_FORMAT)
        .map_err(|error| format!("expected a date as YYYY-MM-DD: {error}"))
}

fn output_error(error: std::io::Error) -> CliError {
    CliError::Output {
        message: error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    //! Covers argument parsing and output of the command-line front end.

    use env_lock::lock_env;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::registration::EMAIL_DOMAIN;
    use crate::resolver::DEFAULT_MAX_UNIQUE_ID_LENGTH;

    #[fixture]
    fn settings() -> ResolverSettings {
        ResolverSettings {
            seed: None,
            max_unique_id_length: DEFAULT_MAX_UNIQUE_ID_LENGTH,
        }
    }

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(std::iter::once("data-tokens").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    fn run_to_string(args: &CliArgs, settings: &ResolverSettings) -> String {
        let mut out = Vec::new();
        run(args, settings, &mut out).expect("run should succeed");
        String::from_utf8(out).expect("output should be UTF-8")
    }

    #[rstest]
    fn resolves_each_value_on_its_own_line(settings: ResolverSettings) {
        let args = parse(&["--date", "2024-12-30", "<TODAY+2>", "04/03/2003", "<DOB-20Y>"]);

        assert_eq!(
            run_to_string(&args, &settings),
            "01/01/2025\n04/03/2003\n12/30/2004\n"
        );
    }

    #[rstest]
    fn seed_flag_makes_output_reproducible(settings: ResolverSettings) {
        let args = parse(&["--seed", "42", "<UNIQUEID>", "<FIRSTNAME>", "<LASTNAME>"]);

        let first = run_to_string(&args, &settings);
        let second = run_to_string(&args, &settings);

        assert_eq!(first, second);
        assert_eq!(first.lines().count(), 3);
        assert_eq!(first.lines().next().map(str::len), Some(12));
    }

    #[test]
    fn flags_take_precedence_over_settings() {
        let settings = ResolverSettings {
            seed: Some(1),
            max_unique_id_length: 4,
        };
        let args = parse(&["--seed", "2", "--max-unique-id-length", "10"]);
        let resolver = args.build_resolver(&settings);

        assert_eq!(resolver.max_unique_id_length(), 10);
        assert_eq!(
            resolver.resolve("<UNIQUEID12>"),
            "<UNIQUEID12>",
            "lengths above the flag bound pass through"
        );
    }

    #[test]
    fn settings_apply_when_flags_are_absent() {
        let settings = ResolverSettings {
            seed: Some(1),
            max_unique_id_length: 4,
        };
        let resolver = parse(&[]).build_resolver(&settings);

        assert_eq!(resolver.max_unique_id_length(), 4);
        assert_eq!(resolver.resolve("<UNIQUEID5>"), "<UNIQUEID5>");
    }

    #[rstest]
    fn registration_prints_json_record(settings: ResolverSettings) {
        let args = parse(&["--seed", "7", "--registration"]);
        let output = run_to_string(&args, &settings);

        let record: RegistrationData = serde_json::from_str(&output).expect("valid JSON record");
        assert!(!record.first_name.is_empty());
        assert!(record.email.ends_with(&format!("@{EMAIL_DOMAIN}")));
    }

    #[test]
    fn runs_with_ambient_settings_in_a_bare_environment() {
        let _guard = lock_env([
            ("DATA_TOKENS_SEED", None::<String>),
            ("DATA_TOKENS_MAX_UNIQUE_ID_LENGTH", None::<String>),
        ]);
        let settings = ResolverSettings::load_ambient().expect("settings should load");
        let args = parse(&["--date", "2024-12-30", "<TODAY>", "<UNIQUEID6>"]);

        let output = run_to_string(&args, &settings);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.first(), Some(&"12/30/2024"));
        assert_eq!(lines.get(1).copied().map(str::len), Some(6));
    }

    #[rstest]
    fn rejects_empty_requests(settings: ResolverSettings) {
        let args = parse(&[]);
        let mut out = Vec::new();

        assert_eq!(
            run(&args, &settings, &mut out),
            Err(CliError::MissingInput)
        );
        assert!(out.is_empty());
    }

    #[rstest]
    #[case(&["--date", "30/12/2024", "<TODAY>"])]
    #[case(&["--seed", "minus-one", "<UNIQUEID>"])]
    #[case(&["--unknown"])]
    fn rejects_invalid_arguments(#[case] args: &[&str]) {
        let argv = std::iter::once("data-tokens").chain(args.iter().copied());
        assert!(CliArgs::try_parse_from(argv).is_err());
    }
}
