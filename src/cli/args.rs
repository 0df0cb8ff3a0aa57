//! Defines the command-line arguments for the test runner.
//!
//! Harness directives keep their single-dash spelling (`-only:1,3`,
//! `-verbose`) and are collected verbatim as trailing arguments; they are
//! interpreted by [`RunConfig::from_args`](crate::test::RunConfig::from_args).

use clap::{Parser, ValueEnum};
use termcolor::ColorChoice;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "test_runner",
    version,
    about = "Runs the String.prototype.normalize conformance suite."
)]
pub struct HarnessArgs {
    /// When to colour the report.
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Harness directives: `-only:<name|index>[,...]` (repeatable) and `-verbose`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub directives: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode to a `termcolor` choice; `auto` only colours a terminal.
    pub fn choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto if atty::is(atty::Stream::Stdout) => ColorChoice::Auto,
            ColorMode::Auto | ColorMode::Never => ColorChoice::Never,
            ColorMode::Always => ColorChoice::Always,
        }
    }
}
