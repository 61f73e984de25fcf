//! Trial-averaging timing harness.
//!
//! Each trial generates fresh uniform input in [0, 1), reads the clock,
//! sorts, reads the clock again. Only the sort call sits between the two
//! clock reads.

use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::BenchConfig;
use crate::sort::Sorter;
use crate::{BenchError, Result};

/// Source of "now" readings for the harness.
pub trait Clock {
    /// Time since an arbitrary fixed origin. Successive readings never decrease.
    fn now(&mut self) -> Duration;
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&mut self) -> Duration {
        self.origin.elapsed()
    }
}

/// Generate `len` independent values uniform in [0, 1).
pub fn random_input<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>()).collect()
}

/// One (input length, mean seconds) point on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub input_len: usize,
    pub mean_secs: f64,
}

/// All points measured for one algorithm, in sweep order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<Point>,
}

/// Result of timing one sorter at one input length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Measurement {
    pub label: String,
    pub input_len: usize,
    pub trials: u32,
    pub mean_secs: f64,
}

pub struct Benchmark<C, R> {
    clock: C,
    rng: R,
}

impl Benchmark<MonotonicClock, StdRng> {
    /// Production harness. A `seed` makes the generated inputs reproducible.
    pub fn seeded(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(MonotonicClock::new(), rng)
    }
}

impl<C: Clock, R: Rng> Benchmark<C, R> {
    pub fn new(clock: C, rng: R) -> Self {
        Self { clock, rng }
    }

    /// Average seconds per `sorter` call over `trials` fresh random inputs of
    /// length `input_len`.
    pub fn mean_time<S>(&mut self, sorter: &S, input_len: usize, trials: u32) -> Result<f64>
    where
        S: Sorter<f64> + ?Sized,
    {
        if trials == 0 {
            return Err(BenchError::NoTrials);
        }

        let mut total = Duration::ZERO;
        for _ in 0..trials {
            let values = random_input(&mut self.rng, input_len);
            let start = self.clock.now();
            let sorted = sorter.sort(black_box(&values));
            let end = self.clock.now();
            black_box(sorted);
            total += end.saturating_sub(start);
        }

        Ok(total.as_secs_f64() / f64::from(trials))
    }

    pub fn measure<S>(&mut self, sorter: &S, input_len: usize, trials: u32) -> Result<Measurement>
    where
        S: Sorter<f64> + ?Sized,
    {
        let mean_secs = self.mean_time(sorter, input_len, trials)?;
        Ok(Measurement {
            label: sorter.label().to_string(),
            input_len,
            trials,
            mean_secs,
        })
    }
}

/// Sweep every configured algorithm over every configured input length.
pub fn run_suite(config: &BenchConfig) -> Result<Vec<Series>> {
    let mut bench = Benchmark::seeded(config.seed);
    run_suite_with(&mut bench, config)
}

/// Like [`run_suite`], on a caller-supplied harness.
pub fn run_suite_with<C: Clock, R: Rng>(
    bench: &mut Benchmark<C, R>,
    config: &BenchConfig,
) -> Result<Vec<Series>> {
    config.validate()?;
    debug!(
        lengths = ?config.input_lengths,
        trials = config.trial_count,
        "starting sweep"
    );

    let mut series = Vec::with_capacity(config.algorithms.len());
    for algorithm in &config.algorithms {
        let mut points = Vec::with_capacity(config.input_lengths.len());
        for &input_len in &config.input_lengths {
            let m = bench.measure(algorithm, input_len, config.trial_count)?;
            info!(
                algorithm = %m.label,
                input_len,
                trials = m.trials,
                mean_secs = m.mean_secs,
                "measured"
            );
            points.push(Point {
                input_len,
                mean_secs: m.mean_secs,
            });
        }
        series.push(Series {
            label: algorithm.label().to_string(),
            points,
        });
    }
    Ok(series)
}
