mod commands;
mod layout;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use chunkbyte_core::ChunkConfig;

#[derive(Parser)]
#[command(name = "chunkbyte", about = "Split files into ordered chunks and merge them back")]
struct Cli {
    /// Maximum worker threads. Overrides CHUNKBYTE_MAX_WORKERS.
    #[arg(long, global = true)]
    workers: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split a file into chunk records inside a directory
    Split {
        /// Path to the file to split
        file: String,

        /// Number of chunks to produce
        #[arg(long, short)]
        count: usize,

        /// Output directory for the chunk records and manifest
        #[arg(long, short)]
        out: String,

        /// Fail instead of producing empty chunks when count exceeds the file size
        #[arg(long)]
        strict: bool,
    },

    /// Merge a chunk directory back into a file
    Merge {
        /// Directory written by `chunkbyte split`
        dir: String,

        /// Output file path
        output: String,
    },

    /// Show the manifest of a chunk directory
    Inspect {
        /// Directory written by `chunkbyte split`
        dir: String,
    },

    /// Print the chunk boundaries for a buffer length without reading data
    Plan {
        /// Buffer length in bytes
        length: usize,

        /// Number of chunks
        #[arg(long, short)]
        count: usize,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing (controlled by RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = ChunkConfig::from_env();
    if let Some(workers) = cli.workers {
        config = config.with_max_workers(workers);
    }

    let result = match cli.command {
        Commands::Split { file, count, out, strict } => {
            if strict {
                config = config.with_allow_empty_chunks(false);
            }
            commands::split::run_split(&file, count, &out, config).await
        }
        Commands::Merge { dir, output } => commands::merge::run_merge(&dir, &output, config).await,
        Commands::Inspect { dir } => commands::inspect::run_inspect(&dir).await,
        Commands::Plan { length, count } => commands::plan::run_plan(length, count),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
