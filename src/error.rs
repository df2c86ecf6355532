//! Error types for the SMS response relay.

/// Top-level error type for the relay.
///
/// Both classes propagate unhandled to the Lambda runtime, which reports
/// the invocation as faulted. There is no local recovery or retry.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Envelope error: {0}")]
    Envelope(#[from] EnvelopeError),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),
}

/// Malformed-input faults: the inbound envelope or its nested JSON does
/// not match the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Envelope contains no records")]
    NoRecords,

    #[error("Invalid notification message: {0}")]
    InvalidMessage(#[from] serde_json::Error),
}

/// Downstream-publish faults: the event bus call failed or rejected the entry.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Event bus request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Event bus rejected entry ({code}): {message}")]
    EntryRejected { code: String, message: String },

    #[error("Failed to encode event detail: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for the relay.
pub type Result<T> = std::result::Result<T, Error>;
