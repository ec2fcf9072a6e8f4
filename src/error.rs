use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can surface before the first frame runs.
///
/// The engine itself never fails at runtime: interaction misses are `None`
/// results, not errors. Everything here is configuration-time.
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected settings or constructor parameters.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Settings file could not be read.
    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `Settings`.
    #[error("could not parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}
