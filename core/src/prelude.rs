/// Common error type for domain validation and wire decoding.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("out of range: {0}")]
    OutOfRange(String),
    #[error("malformed value: {0}")]
    Malformed(String),
    #[error("backend error: {0}")]
    Backend(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
