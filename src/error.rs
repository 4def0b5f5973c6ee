use std::io;

/// Errors raised while setting up or running a benchmark suite.
///
/// Dogs themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A [`HarnessConfig`](crate::harness::HarnessConfig) field is out of range.
    #[error("invalid config: `{field}` {reason}")]
    InvalidConfig {
        /// Offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
    /// No strategy goes by this key.
    #[error("unknown strategy `{0}`, expected one of closure, composition, mixed, direct, bound")]
    UnknownStrategy(String),
    /// [`Suite::run`](crate::harness::Suite::run) was called with nothing to run.
    #[error("benchmark suite is empty")]
    EmptySuite,
    /// Writing the report failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Crate-wide result.
pub type Result<T, E = Error> = core::result::Result<T, E>;
