use serde::{Deserialize, Serialize};

/// One contiguous slice of a partitioned buffer.
///
/// The payload is an owned copy and never borrows from the buffer it was cut
/// from. Reassembly reads only `start` and the payload; `index` identifies the
/// chunk within the split that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    bytes: Vec<u8>,
    index: u32,
    start: u64,
}

impl Chunk {
    /// Rebuild a chunk from its transmitted fields.
    pub fn new(index: u32, start: u64, bytes: Vec<u8>) -> Self {
        Self { bytes, index, start }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    /// Offset of the first payload byte in the original buffer.
    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Exclusive end offset, `start + len`. `None` if it would overflow `u64`.
    pub fn end(&self) -> Option<u64> {
        self.start.checked_add(self.bytes.len() as u64)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
