use std::ops::Range;
use std::sync::mpsc;

use tracing::{debug, trace};

use crate::chunking::chunk::Chunk;
use crate::chunking::pool::WorkerPool;
use crate::config::ChunkConfig;
use crate::error::{ChunkError, Result};

/// Compute the byte range of every chunk for a buffer of `length` bytes.
///
/// Each chunk gets `length / count` bytes and the first `length % count`
/// chunks get one more. Ranges are contiguous and cover `0..length`.
pub fn chunk_ranges(length: usize, count: usize) -> Result<Vec<Range<usize>>> {
    if count == 0 || u32::try_from(count - 1).is_err() {
        return Err(ChunkError::InvalidChunkCount(count));
    }

    let base = length / count;
    let remainder = length % count;

    let mut ranges = Vec::with_capacity(count);
    let mut start = 0;
    for i in 0..count {
        let end = start + base + usize::from(i < remainder);
        ranges.push(start..end);
        start = end;
    }
    Ok(ranges)
}

/// Split `content` into exactly `count` chunks using the default configuration.
///
/// Returns the chunks in index order together with the original length.
pub fn split(content: &[u8], count: usize) -> Result<(Vec<Chunk>, u64)> {
    split_with_config(content, count, &ChunkConfig::default())
}

/// Split `content` into exactly `count` chunks.
///
/// Boundaries are computed up front; the copies run concurrently, one task per
/// chunk, and report back over a channel. Results are slotted by index so
/// completion order does not matter.
pub fn split_with_config(
    content: &[u8],
    count: usize,
    config: &ChunkConfig,
) -> Result<(Vec<Chunk>, u64)> {
    let length = content.len();
    if count > length && !config.allow_empty_chunks {
        return Err(ChunkError::TooManyChunks {
            length: length as u64,
            count,
        });
    }

    let ranges = chunk_ranges(length, count)?;
    let pool = WorkerPool::new(config.max_workers, count)?;
    debug!(length, count, workers = pool.workers(), "Splitting buffer");

    // chunk_ranges bounds count to 2^32, so every index fits in u32.
    let jobs: Vec<(u32, Range<usize>)> = ranges
        .into_iter()
        .enumerate()
        .map(|(i, range)| (i as u32, range))
        .collect();

    let (tx, rx) = mpsc::channel();
    pool.for_each(jobs, |(index, range)| {
        let chunk = Chunk::new(index, range.start as u64, content[range].to_vec());
        trace!(index, start = chunk.start(), len = chunk.len(), "Copied chunk");
        // The receiver is held below until every task has returned.
        let _ = tx.send(chunk);
    });
    drop(tx);

    let mut slots: Vec<Option<Chunk>> = vec![None; count];
    for chunk in rx {
        let slot = chunk.index() as usize;
        slots[slot] = Some(chunk);
    }

    let chunks = slots
        .into_iter()
        .enumerate()
        .map(|(i, slot)| slot.ok_or(ChunkError::WorkerLost(i)))
        .collect::<Result<Vec<_>>>()?;

    Ok((chunks, length as u64))
}
