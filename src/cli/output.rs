//! Handles all user-facing output for the CLI.
//!
//! Renders a [`RunReport`] as console text. Verbose mode lists passed and
//! failed tests between separator lines; default mode lists only failures,
//! or prints `pass` when there are none. Labels are coloured when the sink
//! supports it; the text is otherwise identical.

use std::io;

use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::test::{ExecutionResult, RunReport};

pub const SEPARATOR_WIDTH: usize = 80;

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Writes the report for `report` to `out`.
pub fn write_report<W: WriteColor>(
    out: &mut W,
    report: &RunReport,
    verbose: bool,
) -> io::Result<()> {
    let failed: Vec<_> = report.failed().collect();

    if verbose {
        let passed: Vec<_> = report.passed().collect();
        write_separator(out)?;
        write_count(out, "Passed", passed.len(), Color::Green)?;
        for result in &passed {
            writeln!(out, "{}", test_summary(result))?;
        }
        write_separator(out)?;
        write_count(out, "Failed", failed.len(), Color::Red)?;
        for result in &failed {
            writeln!(out, "{}", test_summary(result))?;
        }
        write_separator(out)?;
    } else if !failed.is_empty() {
        write_count(out, "Failed", failed.len(), Color::Red)?;
        for result in &failed {
            writeln!(out, "{}", test_summary(result))?;
        }
    } else {
        write_label(out, "pass", Color::Green)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Renders the report as plain text.
///
/// ```rust
/// use normharness::cli::output::render_report;
/// use normharness::test::RunReport;
/// assert_eq!(render_report(&RunReport::default(), false).unwrap(), "pass\n");
/// ```
pub fn render_report(report: &RunReport, verbose: bool) -> io::Result<String> {
    let mut buffer = Buffer::no_color();
    write_report(&mut buffer, report, verbose)?;
    Ok(String::from_utf8_lossy(buffer.as_slice()).into_owned())
}

/// Prints the report to stdout.
pub fn print_report(report: &RunReport, verbose: bool, choice: ColorChoice) -> io::Result<()> {
    let stdout = StandardStream::stdout(choice);
    let mut lock = stdout.lock();
    write_report(&mut lock, report, verbose)
}

/// `Test <index> - <name>`, followed for failures by the tab-indented stack trace.
pub fn test_summary(result: &ExecutionResult) -> String {
    let summary = format!("Test {} - {}", result.index, result.name);
    match result.error() {
        Some(err) => {
            let stack = err.stack().split('\n').collect::<Vec<_>>().join("\n\t");
            format!("{summary}\n\t{stack}")
        }
        None => summary,
    }
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn write_separator<W: WriteColor>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))
}

fn write_count<W: WriteColor>(
    out: &mut W,
    label: &str,
    count: usize,
    color: Color,
) -> io::Result<()> {
    write_label(out, label, color)?;
    writeln!(out, " {count}")
}

fn write_label<W: WriteColor>(out: &mut W, label: &str, color: Color) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{label}")?;
    out.reset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorKind, HarnessError};
    use crate::test::Outcome;

    fn result(index: usize, name: &str, outcome: Outcome) -> ExecutionResult {
        ExecutionResult {
            index,
            name: name.to_string(),
            outcome,
        }
    }

    fn failure(message: &str) -> Outcome {
        Outcome::Failed(HarnessError::without_frames(ErrorKind::Error, message))
    }

    fn sample() -> RunReport {
        RunReport {
            results: vec![
                result(0, "first", Outcome::Passed),
                result(1, "second", failure("a\nb")),
                result(2, "third", Outcome::Skipped),
            ],
        }
    }

    #[test]
    fn all_pass_prints_marker() {
        let report = RunReport {
            results: vec![result(0, "only", Outcome::Passed)],
        };
        assert_eq!(render_report(&report, false).unwrap(), "pass\n");
    }

    #[test]
    fn default_mode_lists_failures_only() {
        let text = render_report(&sample(), false).unwrap();
        assert_eq!(text, "Failed 1\nTest 1 - second\n\tError: a\n\tb\n");
    }

    #[test]
    fn verbose_mode_lists_everything_between_separators() {
        let sep = "-".repeat(80);
        let text = render_report(&sample(), true).unwrap();
        let expected = format!(
            "{sep}\nPassed 1\nTest 0 - first\n{sep}\nFailed 1\nTest 1 - second\n\tError: a\n\tb\n{sep}\n"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn verbose_mode_with_nothing_run() {
        let sep = "-".repeat(80);
        let text = render_report(&RunReport::default(), true).unwrap();
        assert_eq!(text, format!("{sep}\nPassed 0\n{sep}\nFailed 0\n{sep}\n"));
    }

    #[test]
    fn stack_frames_are_tab_indented() {
        let err = HarnessError::range_error("bad form");
        let r = result(4, "frames", Outcome::Failed(err));
        let summary = test_summary(&r);
        let lines: Vec<_> = summary.lines().collect();
        assert_eq!(lines[0], "Test 4 - frames");
        assert_eq!(lines[1], "\tRangeError: bad form");
        assert!(lines[2].starts_with("\t    at "));
    }

    #[test]
    fn colored_output_keeps_the_text() {
        let mut buffer = Buffer::ansi();
        write_report(&mut buffer, &sample(), false).unwrap();
        let text = String::from_utf8_lossy(buffer.as_slice()).into_owned();
        assert!(text.contains("\x1b["));
        assert!(text.contains("Test 1 - second"));
    }
}
