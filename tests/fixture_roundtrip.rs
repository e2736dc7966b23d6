//! Generated inputs, run through their benchmarks, verify against the
//! sidecars written alongside them.

use parity_bench::BenchmarkId;
use parity_bench::bench::verification::load_sidecar;
use parity_bench::config::AppConfig;
use parity_bench::fixtures::{generate_log, generate_users_json};
use parity_bench::runner::{self, RunOptions};

fn verified(id: BenchmarkId, input: &std::path::Path) -> String {
    let opts = RunOptions {
        input: Some(input.to_path_buf()),
        verify: true,
        ..RunOptions::default()
    };
    let outcome = runner::execute(id, &opts, &AppConfig::default()).unwrap();
    assert_eq!(outcome.verified.as_deref(), Some(outcome.checksum.to_string().as_str()));
    outcome.checksum.to_string()
}

#[test]
fn log_fixture_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sample.log");
    let summary = generate_log(&path, 42, 64 * 1024).unwrap();

    let count = verified(BenchmarkId::FileProcessing, &path);
    assert_eq!(Some(count.clone()), summary.expected);

    // Roughly one line in ten is an ERROR line
    let matches: u64 = count.parse().unwrap();
    assert!(matches > 0 && matches < summary.records / 4, "{} of {}", matches, summary.records);
}

#[test]
fn json_fixture_verifies() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("users.json");
    generate_users_json(&path, 42, 600).unwrap();

    let city = verified(BenchmarkId::JsonParsing, &path);
    assert_eq!(load_sidecar(&path).unwrap(), Some(city));
}

#[test]
fn json_fixture_below_lookup_index_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.json");
    generate_users_json(&path, 42, 500).unwrap();

    let err = runner::run(BenchmarkId::JsonParsing, Some(&path)).unwrap_err();
    assert_eq!(err.code(), "INDEX_OUT_OF_RANGE");
}
