use tracing::{debug, trace, warn};

use crate::chunking::chunk::Chunk;
use crate::chunking::pool::WorkerPool;
use crate::config::ChunkConfig;
use crate::error::{ChunkError, Result};

/// Reassemble a buffer of `length` bytes using the default configuration.
pub fn merge(chunks: &[Chunk], length: u64) -> Result<Vec<u8>> {
    merge_with_config(chunks, length, &ChunkConfig::default())
}

/// Reassemble a buffer of `length` bytes from chunks given in any order.
///
/// Coverage is checked before anything is written. The destination is then
/// carved into one disjoint window per chunk and every window is filled by its
/// own pool task.
pub fn merge_with_config(chunks: &[Chunk], length: u64, config: &ChunkConfig) -> Result<Vec<u8>> {
    let size = usize::try_from(length).map_err(|_| ChunkError::LengthOverflow(length))?;

    let ordered = ordered_by_start(chunks);
    if let Err(err) = check_coverage(&ordered, length) {
        warn!(%err, chunks = chunks.len(), length, "Rejecting chunk set");
        return Err(err);
    }

    let mut content = vec![0u8; size];
    let mut jobs: Vec<(&mut [u8], &Chunk)> = Vec::with_capacity(ordered.len());
    let mut rest: &mut [u8] = &mut content;
    for chunk in ordered.into_iter().filter(|c| !c.is_empty()) {
        let (window, tail) = std::mem::take(&mut rest).split_at_mut(chunk.len());
        jobs.push((window, chunk));
        rest = tail;
    }

    let pool = WorkerPool::new(config.max_workers, jobs.len())?;
    debug!(length, chunks = jobs.len(), workers = pool.workers(), "Merging chunks");

    pool.for_each(jobs, |(window, chunk)| {
        window.copy_from_slice(chunk.bytes());
        trace!(index = chunk.index(), start = chunk.start(), len = chunk.len(), "Wrote chunk");
    });

    Ok(content)
}

/// Check that `chunks` tile `0..length` with no gaps and no overlaps.
///
/// Empty chunks cover nothing and are accepted at any offset up to `length`.
pub fn validate_coverage(chunks: &[Chunk], length: u64) -> Result<()> {
    check_coverage(&ordered_by_start(chunks), length)
}

fn ordered_by_start(chunks: &[Chunk]) -> Vec<&Chunk> {
    let mut sorted: Vec<&Chunk> = chunks.iter().collect();
    sorted.sort_by_key(|c| (c.start(), c.len()));
    sorted
}

fn check_coverage(sorted: &[&Chunk], length: u64) -> Result<()> {
    let mut covered = 0u64;
    for chunk in sorted {
        let end = chunk.end().filter(|end| *end <= length).ok_or(ChunkError::OutOfBounds {
            index: chunk.index(),
            start: chunk.start(),
            end: chunk.start().saturating_add(chunk.len() as u64),
            length,
        })?;

        if chunk.is_empty() {
            continue;
        }
        if chunk.start() > covered {
            return Err(ChunkError::Gap {
                offset: covered,
                next_start: chunk.start(),
            });
        }
        if chunk.start() < covered {
            return Err(ChunkError::Overlap {
                index: chunk.index(),
                start: chunk.start(),
                covered,
            });
        }
        covered = end;
    }

    if covered < length {
        return Err(ChunkError::Gap {
            offset: covered,
            next_start: length,
        });
    }
    Ok(())
}
