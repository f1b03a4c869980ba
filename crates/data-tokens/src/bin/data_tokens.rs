//! Resolves data tokens passed on the command line.
//!
//! This binary delegates to `data_tokens::cli`, keeping the behaviour
//! testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use data_tokens::cli::{CliArgs, run};
use data_tokens::{CliError, ResolverSettings};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();
    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

fn execute(args: &CliArgs) -> Result<(), CliError> {
    let settings = ResolverSettings::load_ambient()?;
    run(args, &settings, &mut io::stdout().lock())
}
