//! Generate the input files for BENCH-006 and BENCH-009
//!
//! ```text
//! gen_fixtures [--env <env>] [--seed <n>] [--log <path>] [--log-bytes <n>]
//!              [--json <path>] [--users <n>] [--only log|json]
//! ```
//!
//! Paths and sizes default to the `inputs` and `fixtures` config sections.
//! Each file gets a `<path>.expected` sidecar for `parity_bench --verify`.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};

use parity_bench::config::AppConfig;
use parity_bench::fixtures::{FixtureSummary, generate_log, generate_users_json};

fn get_arg(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|a| a == name)
        .and_then(|i| args.get(i + 1).cloned())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    get_arg(args, name)
        .map(|v| v.parse::<T>().with_context(|| format!("invalid {} value: {}", name, v)))
        .transpose()
}

fn report(summary: &FixtureSummary) {
    println!(
        "{}\t{} records\t{} bytes\texpected={}",
        summary.path.display(),
        summary.records,
        summary.bytes,
        summary.expected.as_deref().unwrap_or("<none>")
    );
}

fn run(args: &[String]) -> Result<()> {
    let env = get_arg(args, "--env").unwrap_or_else(|| "dev".to_string());
    let config = AppConfig::load_or_default(&env)?;
    let _log_guard = parity_bench::logging::init_logging(&config);

    let seed = parse_arg(args, "--seed")?.unwrap_or(config.fixtures.seed);
    let log_bytes = parse_arg(args, "--log-bytes")?.unwrap_or(config.fixtures.log_target_bytes);
    let users = parse_arg(args, "--users")?.unwrap_or(config.fixtures.json_user_count);
    let log_path = get_arg(args, "--log")
        .map(PathBuf::from)
        .unwrap_or(config.inputs.log_scan_path.clone());
    let json_path = get_arg(args, "--json")
        .map(PathBuf::from)
        .unwrap_or(config.inputs.json_path.clone());

    let (want_log, want_json) = match get_arg(args, "--only").as_deref() {
        None => (true, true),
        Some("log") => (true, false),
        Some("json") => (false, true),
        Some(other) => bail!("--only expects 'log' or 'json', got '{}'", other),
    };

    tracing::info!(seed, env = %env, "generating fixtures");

    if want_log {
        report(&generate_log(&log_path, seed, log_bytes)?);
    }
    if want_json {
        report(&generate_users_json(&json_path, seed, users)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gen_fixtures: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
