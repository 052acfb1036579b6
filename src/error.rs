use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContainerError>;

/// Failures of the index based container operations. Each one is reported
/// before the container is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: isize, len: usize },
    #[error("value not found in array")]
    NotFound,
    #[error("pop from empty array")]
    EmptyContainer,
    #[error("capacity must be at least 1")]
    ZeroCapacity,
}
