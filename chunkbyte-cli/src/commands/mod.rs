//! CLI command implementations (split, merge, inspect, plan).

pub mod split;
pub mod merge;
pub mod inspect;
pub mod plan;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar counting chunk records.
pub(crate) fn chunk_progress(len: u64) -> Result<ProgressBar, Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({eta})")
            .map_err(|e| format!("progress bar template error: {e}"))?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

pub(crate) fn format_size(bytes: u64) -> String {
    if bytes >= 1_073_741_824 {
        format!("{:.1} GB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.1} MB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(12), "12 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1_048_576), "3.0 MB");
        assert_eq!(format_size(1_073_741_824), "1.0 GB");
    }
}
