use clap::Parser;
use doppler::cli::Cli;
use doppler::error::{ExitCode, InvocationError};

fn run(args: &[&str]) -> anyhow::Result<ExitCode> {
    let cli = Cli::try_parse_from(args).unwrap();
    doppler::run_app(cli)
}

#[test]
fn test_both_checks_skipped_is_rejected() {
    let err = run(&[
        "doppler",
        "-q",
        "scan",
        "--skip-name",
        "--skip-hash",
        "tests/fixtures/tree1",
    ])
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<InvocationError>(),
        Some(&InvocationError::NothingToCheck)
    );
    assert_eq!(ExitCode::for_error(&err), ExitCode::InvocationError);
    assert_eq!(ExitCode::for_error(&err).as_i32(), 2);
}

#[test]
fn test_no_directories_is_rejected() {
    let err = run(&["doppler", "-q", "scan"]).unwrap_err();

    assert_eq!(
        err.downcast_ref::<InvocationError>(),
        Some(&InvocationError::NoDirectories)
    );
}

#[test]
fn test_zero_io_threads_is_rejected() {
    let err = run(&[
        "doppler",
        "-q",
        "scan",
        "--io-threads",
        "0",
        "tests/fixtures/tree1",
    ])
    .unwrap_err();

    assert_eq!(
        err.downcast_ref::<InvocationError>(),
        Some(&InvocationError::InvalidThreadCount(0))
    );
}

#[test]
fn test_scan_with_per_file_errors_still_succeeds() {
    let code = run(&[
        "doppler",
        "-q",
        "scan",
        "tests/fixtures/does-not-exist",
        "tests/fixtures/tree2",
    ])
    .unwrap();

    assert_eq!(code, ExitCode::Success);
}

#[test]
fn test_json_scan_succeeds() {
    let code = run(&["doppler", "-q", "scan", "--json", "tests/fixtures/tree1"]).unwrap();
    assert_eq!(code.as_i32(), 0);
}
