//! On-disk layout of a chunk directory: one bincode record per chunk plus a JSON manifest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use chunkbyte_core::manifest::ChunkSummary;

pub const MANIFEST_FILE: &str = "manifest.json";

/// Bumped whenever the directory layout changes.
pub const LAYOUT_VERSION: u32 = 1;

/// Human-readable description of a chunk directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirManifest {
    pub version: u32,
    pub length: u64,
    pub count: usize,
    pub chunks: Vec<ChunkSummary>,
}

impl DirManifest {
    pub fn new(length: u64, chunks: Vec<ChunkSummary>) -> Self {
        Self {
            version: LAYOUT_VERSION,
            length,
            count: chunks.len(),
            chunks,
        }
    }
}

pub fn chunk_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("chunk-{index:06}.bin"))
}

pub fn manifest_path(dir: &Path) -> PathBuf {
    dir.join(MANIFEST_FILE)
}

pub async fn write_manifest(
    dir: &Path,
    manifest: &DirManifest,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_vec_pretty(manifest)
        .map_err(|e| format!("failed to encode manifest: {e}"))?;
    tokio::fs::write(manifest_path(dir), json)
        .await
        .map_err(|e| format!("failed to write manifest: {e}"))?;
    Ok(())
}

pub async fn read_manifest(dir: &Path) -> Result<DirManifest, Box<dyn std::error::Error>> {
    let path = manifest_path(dir);
    let json = tokio::fs::read(&path)
        .await
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    let manifest: DirManifest = serde_json::from_slice(&json)
        .map_err(|e| format!("invalid manifest: {e}"))?;

    if manifest.version != LAYOUT_VERSION {
        return Err(format!(
            "unsupported chunk directory version {} (expected {LAYOUT_VERSION})",
            manifest.version
        )
        .into());
    }
    if manifest.count != manifest.chunks.len() {
        return Err(format!(
            "manifest lists {} chunks but declares {}",
            manifest.chunks.len(),
            manifest.count
        )
        .into());
    }
    Ok(manifest)
}
