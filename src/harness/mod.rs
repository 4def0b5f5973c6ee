//! A small sampling benchmark runner.
//!
//! Each benchmark is calibrated so that one sample lasts at least
//! [`min_sample_time`](HarnessConfig::min_sample_time), then sampled until both
//! [`min_samples`](HarnessConfig::min_samples) and [`max_time`](HarnessConfig::max_time) are
//! reached. Benchmarks run one after another on the calling thread.

mod report;
mod stats;

use core::fmt;
use std::time::{Duration, Instant};

pub use report::{ConsoleReporter, Reporter};
pub use stats::Stats;

use crate::{Error, Result, Strategy};

/// Default number of dogs built per op.
pub const DEFAULT_ITERATIONS: usize = 1000;

/// Sampling knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Dogs built and announced per op.
    pub iterations: usize,
    /// Samples taken per benchmark, at least.
    pub min_samples: usize,
    /// Shortest duration of a single sample.
    pub min_sample_time: Duration,
    /// Sampling time per benchmark, at least.
    pub max_time: Duration,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            min_samples: 5,
            min_sample_time: Duration::from_millis(50),
            max_time: Duration::from_secs(5),
        }
    }
}

impl HarnessConfig {
    /// Checks every field is usable.
    pub fn validate(&self) -> Result<()> {
        let invalid = |field, reason| Err(Error::InvalidConfig { field, reason });
        if self.iterations == 0 {
            return invalid("iterations", "must be at least 1");
        }
        if self.min_samples == 0 {
            return invalid("min_samples", "must be at least 1");
        }
        if self.min_sample_time.is_zero() {
            return invalid("min_sample_time", "must be non-zero");
        }
        Ok(())
    }
}

/// Outcome of one benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchResult {
    /// Label the benchmark was added with.
    pub label: String,
    /// Ops timed per sample after calibration.
    pub count: u64,
    /// Seconds per op, one entry per sample.
    pub periods: Vec<f64>,
    /// Summary of `periods`.
    pub stats: Stats,
}

impl BenchResult {
    /// Mean ops per second.
    pub fn hz(&self) -> f64 {
        self.stats.hz()
    }

    /// Number of samples taken.
    pub fn samples(&self) -> usize {
        self.periods.len()
    }
}

impl fmt::Display for BenchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let samples = self.samples();
        write!(
            f,
            "{} x {} ops/sec \u{b1}{:.2}% ({} run{} sampled)",
            self.label,
            report::format_hz(self.hz()),
            self.stats.rme,
            samples,
            if samples == 1 { "" } else { "s" },
        )
    }
}

/// Every result of a suite run, in the order benchmarks were added.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteResult {
    /// Per-benchmark results.
    pub results: Vec<BenchResult>,
}

impl SuiteResult {
    /// The benchmark with the highest mean ops/sec; the earliest one wins a tie.
    pub fn fastest(&self) -> Option<&BenchResult> {
        let mut results = self.results.iter();
        let first = results.next()?;
        Some(results.fold(first, |best, r| if r.hz() > best.hz() { r } else { best }))
    }
}

struct Bench<'a> {
    label: String,
    op: Box<dyn FnMut() + 'a>,
}

/// An ordered list of benchmarks sharing one [`HarnessConfig`].
pub struct Suite<'a> {
    config: HarnessConfig,
    benches: Vec<Bench<'a>>,
}

impl fmt::Debug for Suite<'_> {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("config", &self.config)
            .field(
                "benches",
                &self.benches.iter().map(|b| &b.label).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<'a> Suite<'a> {
    /// Builds an empty suite.
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            benches: Vec::new(),
        }
    }

    /// Builds a suite benching every given strategy, in order.
    pub fn with_strategies(
        config: HarnessConfig,
        strategies: impl IntoIterator<Item = Strategy>,
    ) -> Self {
        strategies
            .into_iter()
            .fold(Self::new(config), |suite, s| suite.add_strategy(s))
    }

    /// The suite configuration.
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Adds a benchmark; one call of `op` is one op.
    pub fn add(mut self, label: impl Into<String>, op: impl FnMut() + 'a) -> Self {
        self.benches.push(Bench {
            label: label.into(),
            op: Box::new(op),
        });
        self
    }

    /// Adds `strategy`, building dogs named `0..iterations` on every op.
    pub fn add_strategy(self, strategy: Strategy) -> Self {
        let names = Strategy::names(self.config.iterations);
        self.add(strategy.label(), move || strategy.run_batch(&names))
    }

    /// Runs every benchmark in turn, reporting each as it finishes.
    pub fn run(&mut self, mut reporter: impl Reporter) -> Result<SuiteResult> {
        self.config.validate()?;
        if self.benches.is_empty() {
            return Err(Error::EmptySuite);
        }
        let mut results = Vec::with_capacity(self.benches.len());
        for bench in &mut self.benches {
            tracing::info!(label = %bench.label, "benchmark started");
            let result = sample(&self.config, bench);
            tracing::debug!(
                label = %result.label,
                count = result.count,
                samples = result.samples(),
                hz = result.hz(),
                rme = result.stats.rme,
                "benchmark finished"
            );
            reporter.on_cycle(&result)?;
            results.push(result);
        }
        let results = SuiteResult { results };
        reporter.on_complete(&results)?;
        Ok(results)
    }
}

fn time<F: FnMut() + ?Sized>(op: &mut F, count: u64) -> Duration {
    let start = Instant::now();
    for _ in 0..count {
        op();
    }
    start.elapsed()
}

fn calibrate<F: FnMut() + ?Sized>(config: &HarnessConfig, op: &mut F) -> u64 {
    let min = config.min_sample_time.as_secs_f64();
    let mut count = 1u64;
    loop {
        let elapsed = time(op, count);
        if elapsed >= config.min_sample_time {
            return count;
        }
        let factor = (min / elapsed.as_secs_f64().max(1e-9))
            .ceil()
            .clamp(2.0, 1000.0);
        count = count.saturating_mul(factor as u64);
        tracing::trace!(count, ?elapsed, "calibrating");
    }
}

fn sample(config: &HarnessConfig, bench: &mut Bench<'_>) -> BenchResult {
    let op = &mut *bench.op;
    let count = calibrate(config, op);
    let started = Instant::now();
    let mut periods = Vec::with_capacity(config.min_samples);
    while periods.len() < config.min_samples || started.elapsed() < config.max_time {
        periods.push(time(op, count).as_secs_f64() / count as f64);
    }
    let stats = Stats::from_periods(&periods).unwrap_or_default();
    BenchResult {
        label: bench.label.clone(),
        count,
        periods,
        stats,
    }
}
