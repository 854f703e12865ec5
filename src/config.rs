// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::warn;

use crate::preview::DEFAULT_PREVIEW_ROWS;

/// Runtime settings for the converter binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory `meta_audience.csv` is written into.
    pub out_dir: PathBuf,
    /// Data rows printed in the preview table.
    pub preview_rows: usize,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            preview_rows: DEFAULT_PREVIEW_ROWS,
            log_level: "info".to_string(),
        }
    }
}

/// An env override that could not be applied and was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub key: &'static str,
    pub value: String,
    pub reason: String,
}

/// Log each skipped override. Called once the subscriber is installed, since
/// config is read before logging is set up.
pub fn log_rejected(rejected: &[RejectedOverride]) {
    for r in rejected {
        warn!(value = %r.value, "ignoring {}: {}", r.key, r.reason);
    }
}

impl Config {
    /// YAML file named by `AUDIENCE_CONFIG` (if any), then env overrides.
    pub fn load() -> Result<(Self, Vec<RejectedOverride>)> {
        let mut cfg = match env::var_os("AUDIENCE_CONFIG") {
            Some(path) => Self::from_yaml_file(Path::new(&path))?,
            None => Self::default(),
        };
        let rejected = cfg.apply_overrides(|key| env::var(key).ok());
        Ok((cfg, rejected))
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_yaml::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Apply `AUDIENCE_OUT_DIR`, `AUDIENCE_PREVIEW_ROWS` and `LOG_LEVEL` as
    /// returned by `lookup`. Values that fail to parse are left out and
    /// handed back.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Vec<RejectedOverride>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut rejected = Vec::new();
        if let Some(dir) = lookup("AUDIENCE_OUT_DIR") {
            self.out_dir = PathBuf::from(dir);
        }
        if let Some(raw) = lookup("AUDIENCE_PREVIEW_ROWS") {
            match raw.trim().parse() {
                Ok(n) => self.preview_rows = n,
                Err(e) => rejected.push(RejectedOverride {
                    key: "AUDIENCE_PREVIEW_ROWS",
                    reason: e.to_string(),
                    value: raw,
                }),
            }
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.log_level = level;
        }
        rejected
    }
}
