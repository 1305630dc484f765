use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChunkError {
    #[error("Invalid chunk count: {0} (must be between 1 and 2^32)")]
    InvalidChunkCount(usize),

    #[error("Cannot split {length} bytes into {count} non-empty chunks")]
    TooManyChunks { length: u64, count: usize },

    #[error("Chunk {index} spans {start}..{end}, past buffer length {length}")]
    OutOfBounds {
        index: u32,
        start: u64,
        end: u64,
        length: u64,
    },

    #[error("Gap in chunk coverage: bytes {offset}..{next_start} are not covered")]
    Gap { offset: u64, next_start: u64 },

    #[error("Chunk {index} at offset {start} overlaps bytes already covered up to {covered}")]
    Overlap { index: u32, start: u64, covered: u64 },

    #[error("Buffer length {0} does not fit in memory on this platform")]
    LengthOverflow(u64),

    #[error("Worker for chunk {0} never reported a result")]
    WorkerLost(usize),

    #[error("Worker pool error: {0}")]
    WorkerPool(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ChunkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ChunkError::InvalidChunkCount(0);
        assert_eq!(
            err.to_string(),
            "Invalid chunk count: 0 (must be between 1 and 2^32)"
        );

        let err = ChunkError::Gap { offset: 4, next_start: 9 };
        assert_eq!(
            err.to_string(),
            "Gap in chunk coverage: bytes 4..9 are not covered"
        );

        let err = ChunkError::Overlap { index: 2, start: 3, covered: 5 };
        assert!(err.to_string().contains("overlaps"));
    }
}
