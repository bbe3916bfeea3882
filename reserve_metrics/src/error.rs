use thiserror::Error;

/// Errors surfaced by the metrics reader.
#[derive(Debug, Error)]
pub enum MetricsError {
    /// The supplied string is not a 20-byte hex address. Raised locally,
    /// before any request is sent.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// The underlying eth_call failed: transport error, reverted call or a
    /// return payload that does not decode against the declared ABI.
    #[error("contract call failed: {0}")]
    RemoteCallFailure(#[from] alloy::contract::Error),
}

pub type Result<T> = std::result::Result<T, MetricsError>;
