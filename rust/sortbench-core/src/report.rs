//! Tabular summaries of a finished sweep.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::bench::Series;
use crate::config::{BenchConfig, OutputFormat};
use crate::{BenchError, Result};

/// Everything a sweep produced, ready for export.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub config: BenchConfig,
    pub series: Vec<Series>,
}

impl SuiteReport {
    pub fn new(title: impl Into<String>, config: BenchConfig, series: Vec<Series>) -> Self {
        Self {
            title: title.into(),
            generated_at: Utc::now(),
            config,
            series,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Csv => Ok(self.to_csv()),
            OutputFormat::Json => self.to_json(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", "=".repeat(self.title.chars().count()));
        let _ = writeln!(out);
        for s in &self.series {
            for p in &s.points {
                let _ = writeln!(
                    out,
                    "[{}/{}] {:.6}s avg ({} trials) | {:.3}ms",
                    s.label,
                    p.input_len,
                    p.mean_secs,
                    self.config.trial_count,
                    p.mean_secs * 1000.0,
                );
            }
        }
        out
    }

    pub fn to_csv(&self) -> String {
        let mut out = String::from("algorithm,input_len,trials,mean_secs\n");
        for s in &self.series {
            for p in &s.points {
                let _ = writeln!(
                    out,
                    "{},{},{},{:.9}",
                    s.label, p.input_len, self.config.trial_count, p.mean_secs
                );
            }
        }
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| BenchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "wrote json report");
        Ok(())
    }
}
