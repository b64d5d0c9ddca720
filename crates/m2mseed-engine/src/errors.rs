use m2mseed_core::StoreError;
use thiserror::Error;

/// Errors emitted by the seeding engine.
#[derive(Debug, Error)]
pub enum SeedingError {
    #[error("not a relatable entity kind: '{0}'")]
    InvalidType(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("sampling error: requested {requested} targets but only {available} available")]
    Sampling { requested: usize, available: usize },
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
