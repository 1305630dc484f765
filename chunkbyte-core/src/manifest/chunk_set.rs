use serde::{Deserialize, Serialize};

use crate::chunking::{merge_with_config, split_with_config, Chunk};
use crate::config::ChunkConfig;
use crate::error::Result;

/// Metadata for a single chunk, without its payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkSummary {
    pub index: u32,
    pub start: u64,
    pub len: u64,
}

impl From<&Chunk> for ChunkSummary {
    fn from(chunk: &Chunk) -> Self {
        Self {
            index: chunk.index(),
            start: chunk.start(),
            len: chunk.len() as u64,
        }
    }
}

/// Everything needed to rebuild a buffer: its length and all of its chunks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkSet {
    pub length: u64,
    pub chunks: Vec<Chunk>,
}

impl ChunkSet {
    /// Split `content` into `count` chunks and keep the original length alongside.
    pub fn from_split(content: &[u8], count: usize, config: &ChunkConfig) -> Result<Self> {
        let (chunks, length) = split_with_config(content, count, config)?;
        Ok(Self { length, chunks })
    }

    /// Rebuild the original buffer.
    pub fn merge(&self, config: &ChunkConfig) -> Result<Vec<u8>> {
        merge_with_config(&self.chunks, self.length, config)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Per-chunk metadata in the current sequence order.
    pub fn summaries(&self) -> Vec<ChunkSummary> {
        self.chunks.iter().map(ChunkSummary::from).collect()
    }
}
