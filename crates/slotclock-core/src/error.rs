use slotclock_rpc::RpcError;
use slotclock_types::ValidationError;
use thiserror::Error;

/// Estimator result type.
pub type Result<T> = std::result::Result<T, EstimateError>;

/// Broad classes of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad user input, reported before any network activity
    Validation,
    /// The ledger answered but lacked the data needed
    DataUnavailable,
    /// The ledger could not be reached or answered with an error
    Transport,
}

/// Errors that end an estimation run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EstimateError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not get the current timestamp.")]
    MissingCurrentTimestamp,

    #[error("no performance samples available to estimate slot time.")]
    NoPerformanceSamples,

    #[error("error: {0}")]
    Transport(#[from] RpcError),
}

impl EstimateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EstimateError::Validation(_) => ErrorKind::Validation,
            EstimateError::MissingCurrentTimestamp | EstimateError::NoPerformanceSamples => {
                ErrorKind::DataUnavailable
            }
            EstimateError::Transport(_) => ErrorKind::Transport,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
