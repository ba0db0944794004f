pub use anyhow::Result;

/// Custom error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("message of {0} bytes has a bit length that does not fit in 64 bits")]
    LengthOverflow(usize),
    #[error("invalid hex digest: {0}")]
    InvalidHex(String),
    #[error("known answer {name} mismatch: expected {expected}, got {actual}")]
    KnownAnswerMismatch {
        name: &'static str,
        expected: &'static str,
        actual: String,
    },
}
