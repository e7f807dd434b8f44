use thiserror::Error;

/// Recoverable failures from the derived-metric computations.
///
/// Every variant is local to one dashboard card; callers render a
/// placeholder for the failed card and keep going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetricsError {
    #[error("invalid date {0:?}")]
    InvalidDate(String),

    #[error("hour {0} not present in the hourly series")]
    HourNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
