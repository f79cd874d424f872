use std::process::{Command, Output};

use bitgen::{frequency::frequency_test, BitString, SIZE};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bitgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("could not run bitgen")
}

fn run_with_log(level: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bitgen"))
        .env("RUST_LOG", level)
        .output()
        .expect("could not run bitgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is not UTF-8")
}

#[test]
fn prints_size_bits_without_newline() {
    let output = run(&[]);
    assert!(output.status.success());

    let out = stdout(&output);
    assert_eq!(out.len(), SIZE);
    assert!(out.chars().all(|c| c == '0' || c == '1'), "bad output: {}", out);
    assert!(!out.ends_with('\n'));
}

#[test]
fn stderr_is_silent_by_default() {
    let output = run(&[]);
    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn debug_log_reports_frequency() {
    let output = run_with_log("debug");
    assert!(output.status.success());
    assert_eq!(stdout(&output).len(), SIZE);

    let err = String::from_utf8_lossy(&output.stderr);
    assert!(
        err.contains(&format!("ones out of {} bits", SIZE)),
        "missing frequency log in: {}",
        err
    );
}

#[test]
fn arguments_are_ignored() {
    let output = run(&["-n", "8", "--whatever", "foo"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).len(), SIZE);
}

#[test]
fn runs_differ() {
    assert_ne!(stdout(&run(&[])), stdout(&run(&[])));
}

#[test]
fn many_runs_look_uniform() {
    let all: String = (0..50).map(|_| stdout(&run(&[]))).collect();
    let bits: BitString = all.parse().expect("output should only contain bits");

    let report = frequency_test(&bits);
    assert_eq!(report.zeros + report.ones, 50 * SIZE);
    assert!(
        (report.ones_ratio() - 0.5).abs() < 0.05,
        "ratio of ones too far from 1/2: {}",
        report.ones_ratio()
    );
}
