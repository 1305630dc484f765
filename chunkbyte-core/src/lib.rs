//! Concurrent split and merge of in-memory byte buffers.
//!
//! A buffer is partitioned into a fixed number of contiguous chunks, each
//! copied by its own task, and later rebuilt by scattering every chunk back to
//! its start offset. Chunk payloads are owned copies, so chunks can be hashed,
//! stored or sent anywhere between the two calls.

pub mod error;
pub mod constants;
pub mod config;
pub mod chunking;
pub mod manifest;

#[cfg(test)]
mod proptests;

pub use chunking::{merge, merge_with_config, split, split_with_config, Chunk};
pub use config::ChunkConfig;
pub use error::{ChunkError, Result};
