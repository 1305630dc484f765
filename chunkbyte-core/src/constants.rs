/// Upper bound on pool threads regardless of configuration.
pub const MAX_WORKERS_LIMIT: usize = 256;

/// Environment variable: worker thread cap for split and merge.
pub const ENV_MAX_WORKERS: &str = "CHUNKBYTE_MAX_WORKERS";

/// Environment variable: whether `count > length` yields empty chunks or an error.
pub const ENV_ALLOW_EMPTY_CHUNKS: &str = "CHUNKBYTE_ALLOW_EMPTY_CHUNKS";

/// Name prefix for pool threads.
pub const WORKER_THREAD_PREFIX: &str = "chunkbyte-worker";
