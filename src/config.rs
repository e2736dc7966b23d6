use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::bench::params;
use crate::core_types::Seed;

/// Runtime settings. Nothing here can change a workload's parameters; those
/// live in [`crate::bench::params`].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    /// Write a rolling log file in addition to stderr
    #[serde(default)]
    pub file_logging: bool,
    #[serde(default)]
    pub inputs: InputsConfig,
    #[serde(default)]
    pub fixtures: FixturesConfig,
}

/// Default input paths for the I/O benchmarks, used when no path is passed
/// on the command line.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InputsConfig {
    pub log_scan_path: PathBuf,
    pub json_path: PathBuf,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            log_scan_path: PathBuf::from(params::file_processing::DEFAULT_PATH),
            json_path: PathBuf::from(params::json_parsing::DEFAULT_PATH),
        }
    }
}

/// Fixture generator sizing
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FixturesConfig {
    pub seed: Seed,
    pub log_target_bytes: u64,
    pub json_user_count: usize,
}

impl Default for FixturesConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            log_target_bytes: 100 * 1024 * 1024,
            json_user_count: 100_000,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_dir: "./logs".to_string(),
            log_file: "parity_bench.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            file_logging: false,
            inputs: InputsConfig::default(),
            fixtures: FixturesConfig::default(),
        }
    }
}

impl AppConfig {
    /// Path of the config file for `env`: `config/<env>.yaml`
    pub fn path_for(env: &str) -> PathBuf {
        Path::new("config").join(format!("{}.yaml", env))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Failed to parse config yaml")
    }

    pub fn load(env: &str) -> Result<Self> {
        Self::load_from(&Self::path_for(env))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load `env`, falling back to built-in defaults when the file is absent.
    ///
    /// Standalone benchmark binaries run from arbitrary directories, so a
    /// missing file is not an error. A present but malformed file still is.
    pub fn load_or_default(env: &str) -> Result<Self> {
        let path = Self::path_for(env);
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_uses_section_defaults() {
        let cfg = AppConfig::from_yaml(
            "log_level: info\nlog_dir: ./logs\nlog_file: bench.log\nuse_json: false\nrotation: daily\n",
        )
        .unwrap();
        assert_eq!(cfg.log_level, "info");
        assert!(!cfg.file_logging);
        assert_eq!(
            cfg.inputs.log_scan_path,
            PathBuf::from("test-data/sample-100mb.log")
        );
        assert_eq!(cfg.fixtures.seed, 42);
    }

    #[test]
    fn test_input_override() {
        let cfg = AppConfig::from_yaml(
            "log_level: info\nlog_dir: ./logs\nlog_file: b.log\nuse_json: true\nrotation: never\n\
             inputs:\n  log_scan_path: testdata/bench-006-logs-100mb.txt\n  json_path: data/users.json\n",
        )
        .unwrap();
        assert_eq!(
            cfg.inputs.log_scan_path,
            PathBuf::from("testdata/bench-006-logs-100mb.txt")
        );
        assert_eq!(cfg.inputs.json_path, PathBuf::from("data/users.json"));
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(AppConfig::from_yaml("log_level: [unterminated").is_err());
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = AppConfig::load_from(Path::new("config/__nope__.yaml")).unwrap_err();
        assert!(err.to_string().contains("__nope__"));
    }

    #[test]
    fn test_load_or_default_without_file() {
        let cfg = AppConfig::load_or_default("__no_such_env__").unwrap();
        assert_eq!(cfg.log_level, "warn");
    }
}
