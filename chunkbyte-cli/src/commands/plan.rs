use chunkbyte_core::chunking::chunk_ranges;

/// Print the byte ranges `split` would produce for a buffer of `length` bytes.
pub fn run_plan(length: usize, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let ranges = chunk_ranges(length, count)?;
    let empty = ranges.iter().filter(|r| r.is_empty()).count();

    println!("{length} bytes into {count} chunks:");
    println!("{:>8} {:>14} {:>14} {:>12}", "INDEX", "START", "END", "SIZE");
    println!("{}", "-".repeat(51));
    for (i, range) in ranges.iter().enumerate() {
        println!("{:>8} {:>14} {:>14} {:>12}", i, range.start, range.end, range.len());
    }

    if empty > 0 {
        println!();
        println!("Note: {empty} chunk(s) are empty; use `split --strict` to reject this.");
    }

    Ok(())
}
