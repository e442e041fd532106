use thiserror::Error;

/// Errors raised while validating user input.
///
/// Both variants are produced before any network activity takes place.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid slot number.")]
    InvalidSlot(String),

    #[error("invalid network. please specify \"mainnet\" or \"testnet\".")]
    InvalidNetwork(String),
}
