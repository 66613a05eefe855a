//! Run configuration: defaults, YAML file and command-line overrides.

use crate::error::{open_error, JobError, JobResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WINDOW_SIZE: usize = 5;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_REQUIRED_COLUMN: &str = "close";
pub const DEFAULT_VERSION: &str = "v1";
pub const DEFAULT_DELIMITER: u8 = b',';

/// Deployment environment, read from `APP_ENV` (defaults to `sandbox`).
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|e| e.trim().to_lowercase())
        .ok()
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

/// Keys accepted in the YAML config document. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JobConfigFile {
    #[serde(default, alias = "window")]
    pub window_size: Option<i64>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default, alias = "column")]
    pub required_column: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub delimiter: Option<String>,
}

impl JobConfigFile {
    /// Parse a YAML document. An empty document means "all defaults".
    pub fn from_yaml_str(contents: &str) -> JobResult<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
            .map_err(|e| JobError::Config(format!("Invalid config document: {}", e)))
    }

    pub fn load(path: &Path) -> JobResult<Self> {
        if !path.is_file() {
            return Err(JobError::NotFound(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let contents = fs::read_to_string(path).map_err(|e| open_error("Config", path, e))?;
        Self::from_yaml_str(&contents)
    }
}

/// Values supplied on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub window_size: Option<i64>,
    pub seed: Option<u64>,
    pub required_column: Option<String>,
}

/// Fully resolved, immutable configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub window_size: usize,
    pub seed: u64,
    pub required_column: String,
    pub version: String,
    pub delimiter: u8,
    pub output_path: PathBuf,
    pub log_path: PathBuf,
}

impl ResolvedConfig {
    /// Defaults only, with the given output locations.
    pub fn with_defaults(output_path: impl Into<PathBuf>, log_path: impl Into<PathBuf>) -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            seed: DEFAULT_SEED,
            required_column: DEFAULT_REQUIRED_COLUMN.to_string(),
            version: DEFAULT_VERSION.to_string(),
            delimiter: DEFAULT_DELIMITER,
            output_path: output_path.into(),
            log_path: log_path.into(),
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_required_column(mut self, column: impl Into<String>) -> Self {
        self.required_column = column.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Merge defaults, an optional YAML file and overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    output_path: &Path,
    log_path: &Path,
) -> JobResult<ResolvedConfig> {
    let file = match config_path {
        Some(path) => JobConfigFile::load(path)?,
        None => JobConfigFile::default(),
    };
    merge(file, overrides, output_path, log_path)
}

/// Merge an already parsed config document with overrides.
pub fn merge(
    file: JobConfigFile,
    overrides: &ConfigOverrides,
    output_path: &Path,
    log_path: &Path,
) -> JobResult<ResolvedConfig> {
    let mut resolved = ResolvedConfig::with_defaults(output_path, log_path);

    if let Some(window) = overrides.window_size.or(file.window_size) {
        resolved.window_size = validate_window(window)?;
    }
    if let Some(seed) = overrides.seed.or(file.seed) {
        resolved.seed = seed;
    }
    if let Some(column) = overrides.required_column.clone().or(file.required_column) {
        let column = column.trim().to_string();
        if column.is_empty() {
            return Err(JobError::Config("required_column must not be empty".to_string()));
        }
        resolved.required_column = column;
    }
    if let Some(version) = file.version {
        resolved.version = version;
    }
    if let Some(delimiter) = file.delimiter {
        resolved.delimiter = parse_delimiter(&delimiter)?;
    }

    Ok(resolved)
}

fn validate_window(window: i64) -> JobResult<usize> {
    if window < 1 {
        return Err(JobError::Config(format!(
            "window_size must be >= 1, got {}",
            window
        )));
    }
    usize::try_from(window)
        .map_err(|_| JobError::Config(format!("window_size out of range: {}", window)))
}

fn parse_delimiter(raw: &str) -> JobResult<u8> {
    let raw = if raw == "\\t" { "\t" } else { raw };
    match raw.as_bytes() {
        [b] if b.is_ascii() && *b != b'"' && *b != b'\n' && *b != b'\r' => Ok(*b),
        _ => Err(JobError::Config(format!(
            "delimiter must be a single ASCII character, got {:?}",
            raw
        ))),
    }
}
