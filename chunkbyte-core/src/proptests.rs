//! Property-based tests for split and merge.
//!
//! - Any buffer survives a split followed by a merge
//! - Chunks tile the buffer with no gaps or overlaps
//! - Remainder bytes go to the leading chunks
//! - Merge does not depend on sequence order
//! - Splitting is deterministic

use proptest::prelude::*;

use crate::chunking::{chunk_ranges, merge, merge_with_config, split, split_with_config};
use crate::config::ChunkConfig;

fn buffer_and_count() -> impl Strategy<Value = (Vec<u8>, usize)> {
    prop::collection::vec(any::<u8>(), 1..2048)
        .prop_flat_map(|buf| {
            let len = buf.len();
            (Just(buf), 1..=len)
        })
}

/// A buffer, a chunk count, and a random permutation of the chunk indices.
fn buffer_count_and_order() -> impl Strategy<Value = (Vec<u8>, usize, Vec<usize>)> {
    buffer_and_count().prop_flat_map(|(buf, count)| {
        let order = Just((0..count).collect::<Vec<usize>>()).prop_shuffle();
        (Just(buf), Just(count), order)
    })
}

proptest! {
    /// Merging the output of a split returns the original bytes.
    #[test]
    fn split_merge_roundtrip((buf, count) in buffer_and_count()) {
        let (chunks, length) = split(&buf, count).unwrap();
        prop_assert_eq!(chunks.len(), count);
        prop_assert_eq!(length, buf.len() as u64);
        prop_assert_eq!(merge(&chunks, length).unwrap(), buf);
    }

    /// Chunk payloads sum to the buffer length and start where the previous one ended.
    #[test]
    fn chunks_tile_buffer((buf, count) in buffer_and_count()) {
        let (chunks, length) = split(&buf, count).unwrap();
        let total: u64 = chunks.iter().map(|c| c.len() as u64).sum();
        prop_assert_eq!(total, length);

        let mut expected_start = 0u64;
        for (i, chunk) in chunks.iter().enumerate() {
            prop_assert_eq!(chunk.index() as usize, i);
            prop_assert_eq!(chunk.start(), expected_start);
            prop_assert!(!chunk.is_empty());
            expected_start += chunk.len() as u64;
        }
    }

    /// The first `len % count` chunks are one byte longer than the rest.
    #[test]
    fn remainder_goes_to_leading_chunks(len in 0usize..10_000, count in 1usize..500) {
        let ranges = chunk_ranges(len, count).unwrap();
        let base = len / count;
        let remainder = len % count;
        for (i, range) in ranges.iter().enumerate() {
            let expected = if i < remainder { base + 1 } else { base };
            prop_assert_eq!(range.len(), expected);
        }
        prop_assert_eq!(ranges.last().map(|r| r.end), Some(len));
    }

    /// Shuffled or reversed chunk sequences merge to the same bytes.
    #[test]
    fn merge_is_order_independent((buf, count, order) in buffer_count_and_order()) {
        let (chunks, length) = split(&buf, count).unwrap();
        let mut shuffled: Vec<_> = order.iter().map(|&i| chunks[i].clone()).collect();
        prop_assert_eq!(merge(&shuffled, length).unwrap(), buf.clone());

        shuffled.reverse();
        prop_assert_eq!(merge(&shuffled, length).unwrap(), buf);
    }

    /// Repeated splits of the same input produce identical chunks.
    #[test]
    fn split_is_deterministic((buf, count) in buffer_and_count(), workers in 1usize..8) {
        let config = ChunkConfig::default().with_max_workers(workers);
        let first = split_with_config(&buf, count, &config).unwrap();
        let second = split(&buf, count).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Dropping any non-empty chunk makes merge fail instead of returning stale bytes.
    #[test]
    fn missing_chunk_is_rejected((buf, count) in buffer_and_count(), pick in any::<prop::sample::Index>()) {
        let (mut chunks, length) = split(&buf, count).unwrap();
        chunks.remove(pick.index(chunks.len()));
        prop_assert!(merge_with_config(&chunks, length, &ChunkConfig::default()).is_err());
    }
}
