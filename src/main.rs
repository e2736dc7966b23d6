//! parity_bench - suite driver
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Params  │───▶│Generator │───▶│ Executor │───▶│ Checksum │───▶│  stdout  │
//! │ (const)  │    │(LCG/file)│    │          │    │ (verify) │    │          │
//! └──────────┘    └──────────┘    └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage:
//!
//! ```text
//! parity_bench --list
//! parity_bench --params <bench>
//! parity_bench <bench> [input] [--input <path>] [--verify] [--print|--silent] [--env <env>]
//! parity_bench all [--verify] [--env <env>]
//! ```
//!
//! `<bench>` is an id (`BENCH-002`) or slug (`matrix-multiply`).

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};

use parity_bench::bench::params::BenchmarkId;
use parity_bench::bench::verification::{OutputMode, expectation};
use parity_bench::config::AppConfig;
use parity_bench::runner::{self, RunOptions};

// ============================================================
// ARGUMENTS
// ============================================================

/// Flags that take a value
const VALUE_FLAGS: &[&str] = &["--env", "-e", "--input", "--params"];

fn get_flag_value(args: &[String], names: &[&str]) -> Option<String> {
    for i in 0..args.len() {
        if names.contains(&args[i].as_str()) && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|a| a == name)
}

/// Positional arguments, skipping flags and flag values
fn positionals(args: &[String]) -> Vec<String> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for a in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&a.as_str()) {
            skip_next = true;
            continue;
        }
        if a.starts_with('-') {
            continue;
        }
        out.push(a.clone());
    }
    out
}

/// `all` runs each benchmark on its configured default input and prints one
/// summary line per benchmark, so per-run input and output flags do not apply.
fn reject_all_overrides(args: &[String], pos: &[String]) -> Result<()> {
    if has_flag(args, "--input") || pos.len() > 1 {
        bail!("'all' takes no input path; set inputs.* in config/<env>.yaml instead");
    }
    if has_flag(args, "--print") || has_flag(args, "--silent") {
        bail!("--print/--silent select a single benchmark's output and cannot be used with 'all'");
    }
    Ok(())
}

fn output_override(args: &[String]) -> Result<Option<OutputMode>> {
    match (has_flag(args, "--print"), has_flag(args, "--silent")) {
        (true, true) => bail!("--print and --silent are mutually exclusive"),
        (true, false) => Ok(Some(OutputMode::Print)),
        (false, true) => Ok(Some(OutputMode::Silent)),
        (false, false) => Ok(None),
    }
}

// ============================================================
// COMMANDS
// ============================================================

fn list(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{:<10} {:<16} {:<8} {:<14} REDUCTION", "ID", "SLUG", "OUTPUT", "EXPECTED")?;
    for id in BenchmarkId::ALL {
        let exp = expectation(id);
        let output = match exp.default_output {
            OutputMode::Print => "print",
            OutputMode::Silent => "silent",
        };
        writeln!(
            out,
            "{:<10} {:<16} {:<8} {:<14} {}",
            id.code(),
            id.slug(),
            output,
            exp.expected.unwrap_or("<sidecar>"),
            exp.reduction
        )?;
    }
    Ok(())
}

fn params(name: &str, out: &mut impl Write) -> Result<()> {
    let id = BenchmarkId::lookup(name)?;
    writeln!(out, "# {}", id)?;
    for p in id.params() {
        writeln!(out, "{}={}", p.name, p.value)?;
    }
    Ok(())
}

fn run_one(id: BenchmarkId, opts: &RunOptions, config: &AppConfig) -> Result<()> {
    let outcome = runner::execute(id, opts, config)?;
    let stdout = io::stdout();
    runner::emit(&outcome, &mut stdout.lock()).context("Failed to write checksum")?;
    Ok(())
}

/// Every benchmark in id order; the first failure ends the run.
fn run_all(opts: &RunOptions, config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for id in BenchmarkId::ALL {
        let outcome = runner::execute(id, opts, config)?;
        let status = if outcome.verified.is_some() { "verified" } else { "-" };
        writeln!(out, "{}\t{}\t{}\t{}", id.code(), id.slug(), outcome.checksum, status)?;
    }
    Ok(())
}

fn real_main(args: &[String]) -> Result<()> {
    if has_flag(args, "--version") {
        println!("parity_bench {} ({})", env!("CARGO_PKG_VERSION"), parity_bench::SOURCE_REV);
        return Ok(());
    }
    if has_flag(args, "--list") {
        list(&mut io::stdout().lock())?;
        return Ok(());
    }
    if let Some(name) = get_flag_value(args, &["--params"]) {
        return params(&name, &mut io::stdout().lock());
    }

    let pos = positionals(args);
    let Some(target) = pos.first() else {
        bail!("missing benchmark name (try --list)");
    };
    if target == "all" {
        reject_all_overrides(args, &pos)?;
    }

    let env = get_flag_value(args, &["--env", "-e"]).unwrap_or_else(|| "dev".to_string());
    let config = AppConfig::load_or_default(&env)?;
    let _log_guard = parity_bench::logging::init_logging(&config);
    tracing::info!(env = %env, rev = parity_bench::SOURCE_REV, "parity_bench starting");

    let input = get_flag_value(args, &["--input"])
        .or_else(|| pos.get(1).cloned())
        .map(PathBuf::from);

    if target == "all" {
        let opts = RunOptions {
            verify: has_flag(args, "--verify"),
            ..RunOptions::default()
        };
        return run_all(&opts, &config);
    }

    let opts = RunOptions {
        input,
        output: output_override(args)?,
        verify: has_flag(args, "--verify"),
    };

    let id = BenchmarkId::lookup(target)?;
    run_one(id, &opts, &config)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match real_main(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<parity_bench::BenchError>() {
                Some(bench_err) => eprintln!("error[{}]: {}", bench_err.code(), bench_err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_positionals_skip_flag_values() {
        let a = args("--env ci fibonacci --verify data.log");
        assert_eq!(positionals(&a), vec!["fibonacci", "data.log"]);
    }

    #[test]
    fn test_output_override() {
        assert_eq!(output_override(&args("x --print")).unwrap(), Some(OutputMode::Print));
        assert_eq!(output_override(&args("x")).unwrap(), None);
        assert!(output_override(&args("x --print --silent")).is_err());
    }

    #[test]
    fn test_all_rejects_per_run_overrides() {
        let ok = args("all --verify --env ci");
        assert!(reject_all_overrides(&ok, &positionals(&ok)).is_ok());

        for bad in ["all --input x.log", "all x.log", "all --print", "all --silent"] {
            let a = args(bad);
            assert!(reject_all_overrides(&a, &positionals(&a)).is_err(), "{}", bad);
        }
    }

    #[test]
    fn test_real_main_all_with_input_fails_before_running() {
        let err = real_main(&args("all --input some.log")).unwrap_err();
        assert!(err.to_string().contains("'all' takes no input path"));
    }

    #[test]
    fn test_list_mentions_every_benchmark() {
        let mut buf = Vec::new();
        list(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        for id in BenchmarkId::ALL {
            assert!(text.contains(id.code()));
        }
        assert!(text.contains("248683.505429"));
    }

    #[test]
    fn test_params_output() {
        let mut buf = Vec::new();
        params("BENCH-002", &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("n=100"));
        assert!(text.contains("seed_a=42"));
    }
}
