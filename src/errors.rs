use thiserror::Error;

/// Error type that captures common snapshot-store failures.
///
/// The accrual engine itself never errors; dangling links and missing
/// contract data degrade to skipped tenants and zero totals.
#[derive(Debug, Error)]
pub enum RentalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
