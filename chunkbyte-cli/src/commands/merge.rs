use std::path::Path;

use tracing::info;

use chunkbyte_core::manifest::decode_chunk;
use chunkbyte_core::manifest::ChunkSummary;
use chunkbyte_core::{merge_with_config, Chunk, ChunkConfig};

use crate::commands::{chunk_progress, format_size};
use crate::layout;

/// Merge a chunk directory back into a single file.
///
/// Loads every record listed in the manifest, checks each one against its
/// manifest entry, reassembles on the worker pool, and writes the output file.
pub async fn run_merge(
    dir: &str,
    output: &str,
    config: ChunkConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir_path = Path::new(dir);
    let manifest = layout::read_manifest(dir_path).await?;

    info!(
        "Manifest: {} chunks, {} bytes original",
        manifest.count, manifest.length,
    );

    let pb = chunk_progress(manifest.chunks.len() as u64)?;
    let mut chunks: Vec<Chunk> = Vec::with_capacity(manifest.chunks.len());
    for entry in &manifest.chunks {
        let record = tokio::fs::read(layout::chunk_path(dir_path, entry.index))
            .await
            .map_err(|e| format!("failed to read chunk {}: {e}", entry.index))?;
        let chunk = decode_chunk(&record)?;

        if ChunkSummary::from(&chunk) != *entry {
            return Err(format!("chunk {} does not match its manifest entry", entry.index).into());
        }

        chunks.push(chunk);
        pb.inc(1);
    }
    pb.finish_with_message("All chunks loaded");

    let length = manifest.length;
    let file_data = tokio::task::spawn_blocking(move || merge_with_config(&chunks, length, &config))
        .await
        .map_err(|e| format!("merge task failed: {e}"))??;

    tokio::fs::write(output, &file_data)
        .await
        .map_err(|e| format!("failed to write output file: {e}"))?;

    info!("Merge complete!");
    println!();
    println!("Merge complete:");
    println!("  Chunks:   {}", manifest.count);
    println!("  Size:     {}", format_size(file_data.len() as u64));
    println!("  Output:   {output}");

    Ok(())
}
