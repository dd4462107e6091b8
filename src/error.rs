//! Error types shared across the crate.
//!
//! Precondition violations (vertices out of range, running an undirected-only metric on a
//! directed graph, ...) are contract violations and panic. Only resource exhaustion and
//! malformed input are modelled as recoverable errors.

use std::collections::TryReserveError;

use thiserror::Error;

/// Canonical error type of the crate.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Growing a table failed because the allocator could not provide the memory.
    #[error("out of memory: {0}")]
    OutOfMemory(#[from] TryReserveError),
    /// Reading or writing a graph failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand used by all fallible operations of the crate.
pub type Result<T> = std::result::Result<T, GraphError>;

impl From<GraphError> for std::io::Error {
    fn from(value: GraphError) -> Self {
        match value {
            GraphError::Io(inner) => inner,
            GraphError::OutOfMemory(inner) => {
                std::io::Error::new(std::io::ErrorKind::OutOfMemory, inner)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_memory_maps_to_io_kind() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        let io: std::io::Error = GraphError::from(err).into();
        assert_eq!(io.kind(), std::io::ErrorKind::OutOfMemory);
    }

    #[test]
    fn io_error_passes_through() {
        let err = GraphError::from(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            "bad header",
        ));
        assert!(err.to_string().contains("bad header"));
        let io: std::io::Error = err.into();
        assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
    }
}
