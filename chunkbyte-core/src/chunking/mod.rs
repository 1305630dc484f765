//! Buffer partitioning and reassembly: chunk type, splitter, assembler, worker pool.

pub mod chunk;
pub mod pool;
pub mod splitter;
pub mod assembler;

pub use chunk::Chunk;
pub use splitter::{chunk_ranges, split, split_with_config};
pub use assembler::{merge, merge_with_config, validate_coverage};
