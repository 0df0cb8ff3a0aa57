//! Runner properties exercised through the public API, using both synthetic
//! cases and the normalization suite.

use std::cell::Cell;
use std::rc::Rc;

use normharness::assert;
use normharness::runtime::{normalize, Value};
use normharness::suite::normalize_suite;
use normharness::test::{run_tests, RunConfig, TestCase};
use normharness::ErrorKind;

#[test]
fn normalization_suite_passes() {
    let report = run_tests(&normalize_suite(), &RunConfig::default());
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.passed_count(), normalize_suite().len());
}

#[test]
fn only_one_and_three_run_exactly_those() {
    let runs = Rc::new(Cell::new(0u32));
    let tests: Vec<TestCase> = (0..5)
        .map(|i| {
            let runs = Rc::clone(&runs);
            TestCase::new(format!("case {i}"), move || {
                runs.set(runs.get() | (1 << i));
                Ok(())
            })
        })
        .collect();

    let report = run_tests(&tests, &RunConfig::from_args(["-only:1,3"]));

    assert_eq!(runs.get(), 0b01010);
    assert_eq!(report.passed_count(), 2);
    assert_eq!(report.failed_count(), 0);
    assert_eq!(report.skipped().count(), 3);
}

#[test]
fn raising_body_does_not_stop_later_cases() {
    let reached = Rc::new(Cell::new(false));
    let flag = Rc::clone(&reached);
    let tests = vec![
        TestCase::new("wrong kind", || {
            assert::throws(
                || normalize(&Value::Null, &Value::Undefined),
                ErrorKind::RangeError,
                "",
            )
        }),
        TestCase::new("later", move || {
            flag.set(true);
            Ok(())
        }),
    ];

    let report = run_tests(&tests, &RunConfig::default());

    assert!(reached.get());
    let err = report.results[0].error().unwrap();
    assert_eq!(
        err.message(),
        "Expected test to throw RangeError, but it actually threw TypeError"
    );
    assert!(err.stack().contains("integration_tests.rs"));
}

#[test]
fn suite_selection_by_index_and_name_combine() {
    let config = RunConfig::from_args(["-only:0,NFKD normalization tests"]);
    let report = run_tests(&normalize_suite(), &config);
    let ran: Vec<_> = report.passed().map(|r| r.index).collect();
    assert_eq!(ran, vec![0, 5]);
}
