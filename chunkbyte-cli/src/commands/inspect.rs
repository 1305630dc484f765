use std::path::Path;

use crate::commands::format_size;
use crate::layout;

/// Print the manifest of a chunk directory.
pub async fn run_inspect(dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = layout::read_manifest(Path::new(dir)).await?;

    println!("Chunk directory {dir}:");
    println!("  Length:   {} ({} bytes)", format_size(manifest.length), manifest.length);
    println!("  Chunks:   {}", manifest.count);
    println!();
    println!("{:>8} {:>14} {:>14} {:>12}", "INDEX", "START", "END", "SIZE");
    println!("{}", "-".repeat(51));

    for entry in &manifest.chunks {
        println!(
            "{:>8} {:>14} {:>14} {:>12}",
            entry.index,
            entry.start,
            entry.start.saturating_add(entry.len),
            format_size(entry.len),
        );
    }

    Ok(())
}
