use std::env;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::constants::{ENV_ALLOW_EMPTY_CHUNKS, ENV_MAX_WORKERS, MAX_WORKERS_LIMIT};

/// Tuning knobs shared by split and merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkConfig {
    /// Maximum number of pool threads working on chunks at once.
    pub max_workers: usize,
    /// When false, splitting into more chunks than bytes is rejected.
    pub allow_empty_chunks: bool,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            max_workers: default_workers(),
            allow_empty_chunks: true,
        }
    }
}

impl ChunkConfig {
    /// Load configuration from environment variables.
    ///
    /// - `CHUNKBYTE_MAX_WORKERS` (optional, default: available parallelism)
    /// - `CHUNKBYTE_ALLOW_EMPTY_CHUNKS` (optional, default `true`)
    ///
    /// Unparsable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ChunkConfig::from_env`] with a caller-provided variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_workers = lookup(ENV_MAX_WORKERS)
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or(defaults.max_workers);

        let allow_empty_chunks = lookup(ENV_ALLOW_EMPTY_CHUNKS)
            .and_then(|s| parse_flag(&s))
            .unwrap_or(defaults.allow_empty_chunks);

        defaults
            .with_max_workers(max_workers)
            .with_allow_empty_chunks(allow_empty_chunks)
    }

    /// Set the worker cap, clamped to `1..=MAX_WORKERS_LIMIT`.
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers.clamp(1, MAX_WORKERS_LIMIT);
        self
    }

    pub fn with_allow_empty_chunks(mut self, allow: bool) -> Self {
        self.allow_empty_chunks = allow;
        self
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
        .min(MAX_WORKERS_LIMIT)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ChunkConfig::default();
        assert!(config.max_workers >= 1);
        assert!(config.max_workers <= MAX_WORKERS_LIMIT);
        assert!(config.allow_empty_chunks);
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ChunkConfig::from_lookup(lookup_from(&[
            (ENV_MAX_WORKERS, "3"),
            (ENV_ALLOW_EMPTY_CHUNKS, "false"),
        ]));
        assert_eq!(config.max_workers, 3);
        assert!(!config.allow_empty_chunks);
    }

    #[test]
    fn test_from_lookup_invalid_values_fall_back() {
        let config = ChunkConfig::from_lookup(lookup_from(&[
            (ENV_MAX_WORKERS, "many"),
            (ENV_ALLOW_EMPTY_CHUNKS, "maybe"),
        ]));
        assert_eq!(config, ChunkConfig::default());
    }

    #[test]
    fn test_worker_count_is_clamped() {
        assert_eq!(ChunkConfig::default().with_max_workers(0).max_workers, 1);
        assert_eq!(
            ChunkConfig::default().with_max_workers(100_000).max_workers,
            MAX_WORKERS_LIMIT
        );
    }

    #[test]
    fn test_partial_deserialize_uses_defaults() {
        let config: ChunkConfig = serde_json::from_str(r#"{"allow_empty_chunks": false}"#).unwrap();
        assert_eq!(config.max_workers, ChunkConfig::default().max_workers);
        assert!(!config.allow_empty_chunks);
    }
}
