use serde::{Serialize, de::DeserializeOwned};
use crate::chunking::Chunk;
use crate::error::ChunkError;

pub fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, ChunkError> {
    bincode::serialize(value)
        .map_err(|e| ChunkError::Serialization(e.to_string()))
}

pub fn deserialize<T: DeserializeOwned>(data: &[u8]) -> Result<T, ChunkError> {
    bincode::deserialize(data)
        .map_err(|e| ChunkError::Serialization(e.to_string()))
}

/// Encode one chunk as a standalone record.
pub fn encode_chunk(chunk: &Chunk) -> Result<Vec<u8>, ChunkError> {
    serialize(chunk)
}

/// Decode a chunk record, rejecting one whose end offset does not fit in `u64`.
pub fn decode_chunk(record: &[u8]) -> Result<Chunk, ChunkError> {
    let chunk: Chunk = deserialize(record)?;
    if chunk.end().is_none() {
        return Err(ChunkError::Serialization(format!(
            "chunk {} at offset {} with {} bytes ends past u64::MAX",
            chunk.index(),
            chunk.start(),
            chunk.len()
        )));
    }
    Ok(chunk)
}
