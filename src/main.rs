use std::time::Duration;

use anyhow::{Context, Result};
use bark_bench::{
    Strategy,
    harness::{ConsoleReporter, DEFAULT_ITERATIONS, HarnessConfig, Suite},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about = "Times five ways of building a dog and making it bark")]
struct Cli {
    /// Dogs built and announced per op
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,

    /// Samples taken per strategy, at least
    #[arg(long, default_value_t = 5)]
    min_samples: usize,

    /// Shortest duration of a single sample, in milliseconds
    #[arg(long, default_value_t = 50)]
    min_sample_time_ms: u64,

    /// Sampling time per strategy, in milliseconds
    #[arg(long, default_value_t = 5000)]
    max_time_ms: u64,

    /// Only run these strategies (closure, composition, mixed, direct, bound); repeatable
    #[arg(long = "only", value_name = "STRATEGY")]
    only: Vec<Strategy>,
}

impl Cli {
    fn config(&self) -> HarnessConfig {
        HarnessConfig {
            iterations: self.iterations,
            min_samples: self.min_samples,
            min_sample_time: Duration::from_millis(self.min_sample_time_ms),
            max_time: Duration::from_millis(self.max_time_ms),
        }
    }

    fn strategies(&self) -> Vec<Strategy> {
        if self.only.is_empty() {
            Strategy::ALL.to_vec()
        } else {
            self.only.clone()
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config();
    config.validate().context("invalid command line")?;

    let mut suite = Suite::with_strategies(config, cli.strategies());
    tracing::debug!(config = ?suite.config(), "starting benchmark");
    suite
        .run(ConsoleReporter::stdout())
        .context("benchmark run failed")?;
    Ok(())
}
