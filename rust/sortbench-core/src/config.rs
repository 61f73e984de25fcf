//! Configuration file parsing for `sortbench.toml`.
//!
//! Searches the current directory then its ancestors. Every key is optional;
//! anything missing falls back to [`BenchConfig::default`] or
//! [`OutputConfig::default`].

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::sort::Algorithm;
use crate::{BenchError, Result};

pub const CONFIG_FILE_NAME: &str = "sortbench.toml";

/// What to measure. Passed explicitly into the suite; the harness itself has
/// no built-in lengths or trial counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub input_lengths: Vec<usize>,
    pub trial_count: u32,
    pub algorithms: Vec<Algorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            input_lengths: vec![1000],
            trial_count: 1000,
            algorithms: Algorithm::all(),
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trial_count == 0 {
            return Err(BenchError::NoTrials);
        }
        if self.input_lengths.is_empty() {
            return Err(BenchError::EmptySweep);
        }
        if self.algorithms.is_empty() {
            return Err(BenchError::NoAlgorithms);
        }
        Ok(())
    }

    /// Sort and dedupe the lengths, and drop repeated algorithms while
    /// keeping first-seen order.
    pub fn normalized(mut self) -> Self {
        self.input_lengths.sort_unstable();
        self.input_lengths.dedup();

        let mut seen = Vec::with_capacity(self.algorithms.len());
        self.algorithms.retain(|a| {
            if seen.contains(a) {
                false
            } else {
                seen.push(*a);
                true
            }
        });
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{}' (expected text, csv or json)",
                other
            )),
        }
    }
}

/// Where and how results are written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// SVG chart path.
    pub chart: PathBuf,
    /// Summary printed to stdout.
    pub format: OutputFormat,
    pub title: String,
    /// Optional JSON report path.
    pub json: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            chart: PathBuf::from("sortbench.svg"),
            format: OutputFormat::default(),
            title: "Sorting algorithm benchmark".to_string(),
            json: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SortbenchConfig {
    pub benchmark: BenchConfig,
    pub output: OutputConfig,
}

impl SortbenchConfig {
    /// Load from an explicit path, or from the nearest `sortbench.toml`.
    /// Returns the path that was read, if any.
    pub fn load(explicit: Option<&Path>) -> Result<(Option<PathBuf>, Self)> {
        if let Some(path) = explicit {
            return Ok((Some(path.to_path_buf()), Self::load_from(path)?));
        }
        let cwd = std::env::current_dir().map_err(|source| BenchError::Io {
            path: PathBuf::from("."),
            source,
        })?;
        match Self::find_from(&cwd) {
            Some(path) => {
                let cfg = Self::load_from(&path)?;
                Ok((Some(path), cfg))
            }
            None => {
                debug!("no {} found, using defaults", CONFIG_FILE_NAME);
                Ok((None, Self::default()))
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| BenchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = toml::from_str(&content).map_err(|source| BenchError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    /// Walk from `start` up through its ancestors looking for the config file.
    pub fn find_from(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Parse a TOML string directly.
    pub fn parse(s: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Commented `sortbench.toml` matching the built-in defaults.
    pub fn default_template() -> &'static str {
        r#"# sortbench configuration

[benchmark]
# Input sizes to sweep. Each one becomes a point on every curve.
input_lengths = [1000]
# Fresh random inputs timed per (algorithm, length) pair.
trial_count = 1000
algorithms = ["quicksort", "bubblesort", "mergesort"]
# Fix the RNG for reproducible inputs.
# seed = 42

[output]
chart = "sortbench.svg"
# text, csv or json
format = "text"
title = "Sorting algorithm benchmark"
# json = "sortbench.json"
"#
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
