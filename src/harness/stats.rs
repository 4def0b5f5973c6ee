/// Two-tailed 95% Student-t critical values, indexed by degrees of freedom minus one.
const T_TABLE: [f64; 30] = [
    12.706, 4.303, 3.182, 2.776, 2.571, 2.447, 2.365, 2.306, 2.262, 2.228, 2.201, 2.179, 2.16,
    2.145, 2.131, 2.12, 2.11, 2.101, 2.093, 2.086, 2.08, 2.074, 2.069, 2.064, 2.06, 2.056, 2.052,
    2.048, 2.045, 2.042,
];

/// Critical value once the table runs out.
const T_INFINITY: f64 = 1.96;

/// Summary of the per-op periods of one benchmark, in seconds.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Stats {
    /// Mean seconds per op.
    pub mean: f64,
    /// Sample variance.
    pub variance: f64,
    /// Standard error of the mean.
    pub sem: f64,
    /// Margin of error at 95% confidence.
    pub moe: f64,
    /// Margin of error relative to the mean, in percent.
    pub rme: f64,
}

impl Stats {
    /// Summarizes `periods`, or returns `None` when there are none.
    pub fn from_periods(periods: &[f64]) -> Option<Self> {
        if periods.is_empty() {
            return None;
        }
        let n = periods.len() as f64;
        let mean = periods.iter().sum::<f64>() / n;
        let variance = if periods.len() > 1 {
            periods.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / (n - 1.0)
        } else {
            0.0
        };
        let sem = (variance / n).sqrt();
        let moe = sem * critical_value(periods.len() - 1);
        let rme = if mean > 0.0 { moe / mean * 100.0 } else { 0.0 };
        Some(Self {
            mean,
            variance,
            sem,
            moe,
            rme,
        })
    }

    /// Ops per second.
    pub fn hz(&self) -> f64 {
        if self.mean > 0.0 {
            1.0 / self.mean
        } else {
            f64::INFINITY
        }
    }
}

fn critical_value(df: usize) -> f64 {
    match df {
        0 => 0.0,
        df => T_TABLE.get(df - 1).copied().unwrap_or(T_INFINITY),
    }
}
