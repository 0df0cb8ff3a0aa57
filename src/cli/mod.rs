//! The normharness Command-Line Interface.
//!
//! Turns process arguments into a [`RunConfig`], runs the normalization
//! suite and prints the report. The exit status is a failure when any test
//! failed.

use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};

use crate::cli::args::HarnessArgs;
use crate::suite::normalize_suite;
use crate::test::{run_tests, RunConfig, RunReport};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() -> Result<ExitCode> {
    let args = HarnessArgs::parse();
    env_logger::Builder::from_default_env()
        .try_init()
        .into_diagnostic()?;
    run_with(&args)
}

/// Runs the suite as directed by already-parsed arguments.
pub fn run_with(args: &HarnessArgs) -> Result<ExitCode> {
    let config = RunConfig::from_args(&args.directives);
    log::debug!("run configuration: {config:?}");

    let report = run_tests(&normalize_suite(), &config);
    output::print_report(&report, config.verbose, args.color.choice()).into_diagnostic()?;
    Ok(exit_code(&report))
}

fn exit_code(report: &RunReport) -> ExitCode {
    if report.has_failures() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
