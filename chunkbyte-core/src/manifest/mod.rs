//! Chunk-set records for callers that store or transmit a split (bincode-serialized).

pub mod chunk_set;
pub mod serialization;

pub use chunk_set::{ChunkSet, ChunkSummary};
pub use serialization::{decode_chunk, encode_chunk};
