// Runs the String.prototype.normalize conformance suite.
// Usage: cargo run --bin test_runner -- [--color <when>] [-only:<name|index>[,...]]... [-verbose]

use std::process::ExitCode;

fn main() -> miette::Result<ExitCode> {
    normharness::cli::run()
}
