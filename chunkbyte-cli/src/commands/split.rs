use std::path::Path;

use tracing::info;

use chunkbyte_core::manifest::encode_chunk;
use chunkbyte_core::manifest::ChunkSet;
use chunkbyte_core::ChunkConfig;

use crate::commands::{chunk_progress, format_size};
use crate::layout::{self, DirManifest};

/// Split a file into `count` chunk records.
///
/// Reads the whole file, splits it on the worker pool, then writes one bincode
/// record per chunk and a JSON manifest into `out_dir`.
pub async fn run_split(
    file_path: &str,
    count: usize,
    out_dir: &str,
    config: ChunkConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Err(format!("file not found: {file_path}").into());
    }

    info!("Reading file: {file_path}");
    let file_data = tokio::fs::read(path)
        .await
        .map_err(|e| format!("failed to read file: {e}"))?;
    let file_size = file_data.len() as u64;

    let workers = config.max_workers;
    let set = tokio::task::spawn_blocking(move || ChunkSet::from_split(&file_data, count, &config))
        .await
        .map_err(|e| format!("split task failed: {e}"))??;
    info!("Split {file_size} bytes into {} chunks ({workers} workers max)", set.len());

    let out = Path::new(out_dir);
    tokio::fs::create_dir_all(out)
        .await
        .map_err(|e| format!("failed to create {out_dir}: {e}"))?;

    let pb = chunk_progress(set.len() as u64)?;
    for chunk in &set.chunks {
        let record = encode_chunk(chunk)?;
        tokio::fs::write(layout::chunk_path(out, chunk.index()), &record)
            .await
            .map_err(|e| format!("failed to write chunk {}: {e}", chunk.index()))?;
        pb.inc(1);
    }
    pb.finish_with_message("All chunks written");

    layout::write_manifest(out, &DirManifest::new(set.length, set.summaries())).await?;

    info!("Split complete!");
    println!();
    println!("Split complete:");
    println!("  File:     {file_path}");
    println!("  Size:     {}", format_size(file_size));
    println!("  Chunks:   {}", set.len());
    println!("  Output:   {out_dir}");

    Ok(())
}
