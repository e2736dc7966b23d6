//! Fixture Generation - Deterministic input files for the I/O benchmarks
//!
//! The log-scan and JSON-parse benchmarks read external files. These
//! generators draw every choice from the suite's [`Lcg`], so any port given the
//! same seed and size writes byte-identical files. Each generator also writes
//! the `<path>.expected` sidecar the verifier checks against.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::bench::lcg::Lcg;
use crate::bench::params;
use crate::bench::verification::write_sidecar;
use crate::core_types::Seed;
use crate::workloads::log_scan::contains_ascii_ci;

// ============================================================
// Log fixture
// ============================================================

const INFO_MESSAGES: &[&str] = &[
    "Request processed successfully",
    "Cache hit for session key",
    "Scheduled job completed",
    "Health check passed",
    "Configuration reloaded",
];

const WARN_MESSAGES: &[&str] = &[
    "High memory usage detected: 85% threshold exceeded",
    "Slow query detected",
    "Retrying upstream call",
];

const ERROR_MESSAGES: &[&str] = &[
    "Failed to process request: connection timeout",
    "Payment declined by gateway",
    "Network failure: connection reset by peer",
    "Disk quota exhausted",
];

/// Summary of a generated fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSummary {
    pub path: PathBuf,
    /// Lines (log) or user records (JSON)
    pub records: u64,
    pub bytes: u64,
    /// Literal written to the sidecar, if any
    pub expected: Option<String>,
}

fn log_epoch() -> Result<NaiveDateTime> {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .context("invalid log epoch")
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    Ok(())
}

/// Render one log line. Draw order: level, message, service.
fn log_line(rng: &mut Lcg, at: NaiveDateTime) -> String {
    let roll = rng.next_below(100);
    let (level, messages) = match roll {
        0..=9 => ("ERROR", ERROR_MESSAGES),
        10..=29 => ("WARN", WARN_MESSAGES),
        _ => ("INFO", INFO_MESSAGES),
    };
    let message = rng.choose(messages);
    let service = rng.next_below(10);
    format!(
        "{} [{}] service-{} - {}\n",
        at.format("%Y-%m-%d %H:%M:%S"),
        level,
        service,
        message
    )
}

/// Write a log of at least `target_bytes` bytes.
///
/// Timestamps start at 2024-01-01 00:00:00 and advance 10 seconds per line.
/// Roughly 10% of lines are ERROR lines; only those contain the scan needle.
pub fn generate_log(path: &Path, seed: Seed, target_bytes: u64) -> Result<FixtureSummary> {
    ensure_parent(path)?;
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);

    let mut rng = Lcg::new(seed);
    let mut at = log_epoch()?;
    let step = TimeDelta::seconds(10);
    let needle = params::file_processing::NEEDLE.as_bytes();

    let mut bytes = 0u64;
    let mut lines = 0u64;
    let mut matches = 0u64;

    while bytes < target_bytes {
        let line = log_line(&mut rng, at);
        if contains_ascii_ci(line.as_bytes(), needle) {
            matches += 1;
        }
        out.write_all(line.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        bytes += line.len() as u64;
        lines += 1;
        at += step;
    }
    out.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    let expected = matches.to_string();
    write_sidecar(path, &expected)?;

    tracing::info!(
        path = %path.display(),
        lines,
        bytes,
        matches,
        "log fixture written"
    );

    Ok(FixtureSummary {
        path: path.to_path_buf(),
        records: lines,
        bytes,
        expected: Some(expected),
    })
}

// ============================================================
// JSON fixture
// ============================================================

const CITIES: &[&str] = &["New York", "London", "Tokyo", "Paris", "Berlin"];
const COUNTRIES: &[&str] = &["USA", "UK", "Japan", "France", "Germany"];
const THEMES: &[&str] = &["light", "dark", "auto"];
const LANGUAGES: &[&str] = &["en", "es", "fr", "de", "ja"];

#[derive(Debug, Serialize)]
struct Dataset {
    metadata: Metadata,
    users: Vec<User>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    version: &'static str,
    seed: Seed,
    total_users: usize,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct User {
    id: u64,
    username: String,
    email: String,
    created_at: String,
    profile: Profile,
    stats: Stats,
    preferences: Preferences,
}

#[derive(Debug, Serialize)]
struct Profile {
    first_name: String,
    last_name: String,
    age: u64,
    location: Location,
}

#[derive(Debug, Serialize)]
struct Location {
    city: &'static str,
    country: &'static str,
    coordinates: Coordinates,
}

#[derive(Debug, Serialize)]
struct Coordinates {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Serialize)]
struct Stats {
    posts: usize,
    followers: usize,
    following: usize,
}

#[derive(Debug, Serialize)]
struct Preferences {
    theme: &'static str,
    notifications: bool,
    language: &'static str,
}

/// Uniform value in `[lo, hi)` rounded to 6 decimals.
fn coordinate(rng: &mut Lcg, lo: f64, hi: f64) -> f64 {
    let v = lo + rng.next_f64() * (hi - lo);
    (v * 1e6).round() / 1e6
}

/// One user record. Draw order: city, country, lat, lng, posts, followers,
/// following, theme, notifications, language.
fn user(rng: &mut Lcg, id: u64, epoch: NaiveDate) -> Result<User> {
    let created = epoch
        .checked_add_days(Days::new(id))
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .with_context(|| format!("created_at overflow for user {}", id))?;

    let city = *rng.choose(CITIES);
    let country = *rng.choose(COUNTRIES);
    let lat = coordinate(rng, -90.0, 90.0);
    let lng = coordinate(rng, -180.0, 180.0);

    Ok(User {
        id,
        username: format!("user{}", id),
        email: format!("user{}@example.com", id),
        created_at: created.format("%Y-%m-%dT%H:%M:%S").to_string(),
        profile: Profile {
            first_name: format!("First{}", id),
            last_name: format!("Last{}", id),
            age: 20 + id % 50,
            location: Location {
                city,
                country,
                coordinates: Coordinates { lat, lng },
            },
        },
        stats: Stats {
            posts: rng.next_below(1001),
            followers: rng.next_below(10_001),
            following: rng.next_below(501),
        },
        preferences: Preferences {
            theme: *rng.choose(THEMES),
            notifications: rng.next_below(2) == 1,
            language: *rng.choose(LANGUAGES),
        },
    })
}

/// Write a `{"metadata": .., "users": [..]}` document with `user_count` users.
///
/// User ids start at 1, so `users[500]` is id 501. The sidecar holds the
/// canonical lookup result when the array is long enough; otherwise no sidecar
/// is written and the benchmark is expected to fail with an index error.
pub fn generate_users_json(path: &Path, seed: Seed, user_count: usize) -> Result<FixtureSummary> {
    let mut rng = Lcg::new(seed);
    let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).context("invalid user epoch")?;

    let users = (1..=user_count as u64)
        .map(|id| user(&mut rng, id, epoch))
        .collect::<Result<Vec<_>>>()?;

    let expected = users
        .get(params::json_parsing::USER_INDEX)
        .map(|u| u.profile.location.city.to_string());

    let dataset = Dataset {
        metadata: Metadata {
            version: "1.0",
            seed,
            total_users: users.len(),
            description: "Test dataset for JSON parsing benchmark",
        },
        users,
    };

    ensure_parent(path)?;
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, &dataset)
        .with_context(|| format!("Failed to serialize {}", path.display()))?;
    out.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    if let Some(city) = &expected {
        write_sidecar(path, city)?;
    }

    let bytes = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    tracing::info!(
        path = %path.display(),
        users = user_count,
        bytes,
        expected = expected.as_deref().unwrap_or("<none>"),
        "json fixture written"
    );

    Ok(FixtureSummary {
        path: path.to_path_buf(),
        records: user_count as u64,
        bytes,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::verification::load_sidecar;

    #[test]
    fn test_log_line_shape() {
        let mut rng = Lcg::new(1);
        let line = log_line(&mut rng, log_epoch().unwrap());
        assert!(line.starts_with("2024-01-01 00:00:00 ["), "{}", line);
        assert!(line.ends_with('\n'));
        assert!(line.contains("service-"));
    }

    #[test]
    fn test_only_error_messages_contain_needle() {
        for m in INFO_MESSAGES.iter().chain(WARN_MESSAGES) {
            assert!(!contains_ascii_ci(m.as_bytes(), b"error"), "{}", m);
        }
    }

    #[test]
    fn test_log_fixture_sidecar_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("app.log");
        let summary = generate_log(&path, 42, 4096).unwrap();

        assert!(summary.bytes >= 4096);
        assert_eq!(fs::metadata(&path).unwrap().len(), summary.bytes);
        assert_eq!(load_sidecar(&path).unwrap(), summary.expected);
    }

    #[test]
    fn test_log_fixture_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.log");
        let b = dir.path().join("b.log");
        generate_log(&a, 7, 2048).unwrap();
        generate_log(&b, 7, 2048).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());

        let c = dir.path().join("c.log");
        generate_log(&c, 8, 2048).unwrap();
        assert_ne!(fs::read(&a).unwrap(), fs::read(&c).unwrap());
    }

    #[test]
    fn test_json_fixture_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let summary = generate_users_json(&path, 42, 520).unwrap();

        let city = summary.expected.clone().unwrap();
        assert!(CITIES.contains(&city.as_str()));
        assert_eq!(load_sidecar(&path).unwrap(), Some(city));
    }

    #[test]
    fn test_short_json_fixture_has_no_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("few.json");
        let summary = generate_users_json(&path, 42, 10).unwrap();
        assert_eq!(summary.expected, None);
        assert_eq!(load_sidecar(&path).unwrap(), None);
    }

    #[test]
    fn test_json_fixture_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.json");
        let b = dir.path().join("b.json");
        generate_users_json(&a, 3, 50).unwrap();
        generate_users_json(&b, 3, 50).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn test_user_record_fields() {
        let mut rng = Lcg::new(42);
        let epoch = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let u = user(&mut rng, 1, epoch).unwrap();
        assert_eq!(u.created_at, "2020-01-02T00:00:00");
        assert_eq!(u.profile.age, 21);
        assert!((-90.0..=90.0).contains(&u.profile.location.coordinates.lat));
        assert!(u.stats.following <= 500);
    }
}
