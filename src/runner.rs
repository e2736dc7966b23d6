//! Benchmark Runner - Drives one benchmark through the workload pipeline
//!
//! # Flow
//! ```text
//! 1. Resolve input path (CLI argument > config default), I/O benchmarks only
//! 2. prepare → execute → checksum
//! 3. Optionally verify against the published literal or sidecar
//! 4. Emit: print the checksum, or keep it observable and print nothing
//! ```
//!
//! Runs are single-threaded and single-shot. Any error ends the run; nothing
//! is retried.

use std::hint::black_box;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::bench::params::BenchmarkId;
use crate::bench::verification::{self, Checksum, OutputMode};
use crate::config::AppConfig;
use crate::error::Result;
use crate::workloads::{
    ArraySum, BinaryTrees, Fibonacci, JsonFieldLookup, LogScan, MatrixMultiply, NestedLoops,
    Primes, StringConcat, Workload,
};

/// Environment variable selecting `config/<env>.yaml` for standalone binaries
pub const ENV_VAR: &str = "PARITY_BENCH_ENV";

/// Run one workload through prepare → execute → checksum.
pub fn run_workload<W: Workload>(workload: &W) -> Result<Checksum> {
    let id = workload.id();
    tracing::debug!(bench = id.code(), "prepare");
    let input = workload.prepare()?;
    tracing::debug!(bench = id.code(), "execute");
    let output = workload.execute(input)?;
    let checksum = workload.checksum(&output);
    drop(output);
    tracing::debug!(bench = id.code(), checksum = %checksum, "reduced");
    Ok(checksum)
}

/// Dispatch by id. `input` is required by the I/O benchmarks and ignored by
/// the rest.
pub fn run(id: BenchmarkId, input: Option<&Path>) -> Result<Checksum> {
    let input_path = || input.map(Path::to_path_buf).unwrap_or_default();
    match id {
        BenchmarkId::MatrixMultiply => run_workload(&MatrixMultiply),
        BenchmarkId::StringConcat => run_workload(&StringConcat),
        BenchmarkId::BinaryTree => run_workload(&BinaryTrees),
        BenchmarkId::ArraySum => run_workload(&ArraySum),
        BenchmarkId::FileProcessing => run_workload(&LogScan::new(input_path())),
        BenchmarkId::Fibonacci => run_workload(&Fibonacci),
        BenchmarkId::Primes => run_workload(&Primes),
        BenchmarkId::JsonParsing => run_workload(&JsonFieldLookup::new(input_path())),
        BenchmarkId::NestedLoops => run_workload(&NestedLoops),
    }
}

/// Per-run options
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Overrides the configured default input path
    pub input: Option<PathBuf>,
    /// Overrides the benchmark's published default output mode
    pub output: Option<OutputMode>,
    pub verify: bool,
}

/// Result of one run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub id: BenchmarkId,
    pub input: Option<PathBuf>,
    pub checksum: Checksum,
    /// Literal matched when verification was requested
    pub verified: Option<String>,
    pub output: OutputMode,
}

/// Input path for `id`: explicit override, else the configured default.
pub fn resolve_input(id: BenchmarkId, explicit: Option<&Path>, config: &AppConfig) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    match id {
        BenchmarkId::FileProcessing => Some(config.inputs.log_scan_path.clone()),
        BenchmarkId::JsonParsing => Some(config.inputs.json_path.clone()),
        _ => None,
    }
}

/// Run, and verify when asked.
pub fn execute(id: BenchmarkId, opts: &RunOptions, config: &AppConfig) -> Result<RunOutcome> {
    let input = resolve_input(id, opts.input.as_deref(), config);
    if let Some(path) = &input {
        tracing::info!(bench = id.code(), input = %path.display(), "running");
    } else {
        tracing::info!(bench = id.code(), "running");
    }

    let checksum = run(id, input.as_deref())?;

    let verified = if opts.verify {
        let matched = verification::verify(id, input.as_deref(), &checksum)?;
        tracing::info!(bench = id.code(), expected = %matched, "verified");
        Some(matched)
    } else {
        None
    };

    Ok(RunOutcome {
        id,
        input,
        checksum,
        verified,
        output: opts
            .output
            .unwrap_or(verification::expectation(id).default_output),
    })
}

/// Write the outcome per its output mode.
///
/// Silent runs print nothing but still pass the checksum through
/// [`black_box`] so the computation stays observable.
pub fn emit<W: Write>(outcome: &RunOutcome, out: &mut W) -> io::Result<()> {
    match outcome.output {
        OutputMode::Print => writeln!(out, "{}", outcome.checksum),
        OutputMode::Silent => {
            black_box(&outcome.checksum);
            Ok(())
        }
    }
}

/// Entry point shared by the per-benchmark executables.
///
/// The optional first argument overrides the input path. Errors go to stderr
/// and yield exit status 1.
pub fn standalone_main(id: BenchmarkId) -> ExitCode {
    let input = std::env::args_os().nth(1).map(PathBuf::from);
    let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "dev".to_string());

    let config = match AppConfig::load_or_default(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {:#}", id.code(), e);
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = crate::logging::init_logging(&config);

    let opts = RunOptions {
        input,
        ..RunOptions::default()
    };

    let outcome = match execute(id, &opts, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(bench = id.code(), code = e.code(), "{}", e);
            eprintln!("{}: {}", id.code(), e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    if let Err(e) = emit(&outcome, &mut stdout.lock()) {
        eprintln!("{}: failed to write checksum: {}", id.code(), e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
