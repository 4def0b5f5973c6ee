use std::io::{self, Write};

use crate::harness::{BenchResult, SuiteResult};

/// Receives events while a [`Suite`](super::Suite) runs.
///
/// Any error aborts the run.
pub trait Reporter {
    /// Called once per benchmark, right after it finished sampling.
    fn on_cycle(&mut self, result: &BenchResult) -> io::Result<()>;

    /// Called once after every benchmark ran.
    fn on_complete(&mut self, results: &SuiteResult) -> io::Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn on_cycle(&mut self, result: &BenchResult) -> io::Result<()> {
        (**self).on_cycle(result)
    }

    fn on_complete(&mut self, results: &SuiteResult) -> io::Result<()> {
        (**self).on_complete(results)
    }
}

/// Prints one line per benchmark, then the fastest one.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Reports to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reports to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn on_cycle(&mut self, result: &BenchResult) -> io::Result<()> {
        writeln!(self.out, "{result}")
    }

    fn on_complete(&mut self, results: &SuiteResult) -> io::Result<()> {
        if let Some(fastest) = results.fastest() {
            writeln!(self.out, "Fastest is {}", fastest.label)?;
        }
        self.out.flush()
    }
}

/// Formats ops/sec with thousands separators, keeping two decimals below 100.
pub(crate) fn format_hz(hz: f64) -> String {
    if !hz.is_finite() {
        return "∞".to_owned();
    }
    let fixed = if hz < 100.0 {
        format!("{hz:.2}")
    } else {
        format!("{hz:.0}")
    };
    let (int, frac) = match fixed.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (fixed.as_str(), None),
    };
    let mut grouped = String::with_capacity(fixed.len() + int.len() / 3);
    for (i, digit) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(frac) = frac {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
