use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Truncated input: needed {needed} more byte(s) at offset {offset}")]
    TruncatedInput { needed: usize, offset: usize },

    #[error("Trailing data: {remaining} byte(s) after the last declared record")]
    TrailingData { remaining: usize },

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("Invalid compression pointer at offset {offset}: {reason}")]
    InvalidPointer { offset: usize, reason: &'static str },

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Transport error with {server}: {message}")]
    TransportIo { server: String, message: String },

    #[error("Response ID mismatch from {server}: sent {expected:#06x}, received {received:#06x}")]
    ResponseIdMismatch {
        server: String,
        expected: u16,
        received: u16,
    },

    #[error("Query timeout waiting for {server}")]
    QueryTimeout { server: String },

    #[error("Domain not found (NXDOMAIN): {0}")]
    NxDomain(String),

    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("Resolution depth exceeded (limit {limit})")]
    ResolutionDepthExceeded { limit: usize },

    #[error("Iteration limit exceeded (limit {limit})")]
    IterationLimitExceeded { limit: usize },

    #[error("Query budget exhausted after {limit} queries")]
    QueryBudgetExhausted { limit: usize },
}

impl DomainError {
    /// True for failures raised while decoding or encoding wire data.
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self,
            DomainError::TruncatedInput { .. }
                | DomainError::TrailingData { .. }
                | DomainError::InvalidName(_)
                | DomainError::InvalidPointer { .. }
                | DomainError::InvalidRecordData(_)
        )
    }
}
