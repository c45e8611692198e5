use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum VssError {
    #[error("participant index {0} is out of range")]
    InvalidIndex(usize),
    #[error("too many participants: {0}")]
    TooManyParticipants(usize),
    #[error("polynomial has no coefficients")]
    EmptyPolynomial,
    #[error("too many polynomial coefficients: {0}")]
    DegreeTooLarge(usize),
    #[error("invalid threshold {threshold} for {nodes} nodes")]
    InvalidThreshold { threshold: usize, nodes: usize },
    #[error("vector length mismatch: expected {expected}, found {actual}")]
    VectorLengthMismatch { expected: usize, actual: usize },
    #[error("buffer too short: expected at least {expected} bytes, found {actual}")]
    BufferTooShort { expected: usize, actual: usize },
    #[error("buffer length mismatch: expected {expected} bytes, found {actual}")]
    BufferLengthMismatch { expected: usize, actual: usize },
    #[error("invalid point encoding at position {0}")]
    InvalidPointEncoding(usize),
    #[error("invalid scalar encoding")]
    InvalidScalarEncoding,
}
