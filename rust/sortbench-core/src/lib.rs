//! sortbench core
//!
//! Textbook sorting algorithms, a trial-averaging timing harness, and the
//! reporters that turn measurements into tables and an SVG chart.

pub mod bench;
pub mod chart;
pub mod config;
pub mod report;
pub mod sort;

use std::path::PathBuf;

use thiserror::Error;

pub use bench::{run_suite, Benchmark, Clock, Measurement, MonotonicClock, Point, Series};
pub use config::{BenchConfig, OutputConfig, OutputFormat, SortbenchConfig};
pub use report::SuiteReport;
pub use sort::{Algorithm, Sorter};

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("trial count must be at least 1")]
    NoTrials,
    #[error("no input lengths configured")]
    EmptySweep,
    #[error("no algorithms configured")]
    NoAlgorithms,
    #[error("unknown algorithm '{0}' (expected one of: quicksort, bubblesort, mergesort)")]
    UnknownAlgorithm(String),
    #[error("invalid toml in '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("cannot access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
