// NOTE: Command layout
//
// Everyday actions (timeline, chirp, show, edit, delete) are top-level verbs.
// Settings live under the `config` namespace.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "chipchip")]
#[command(about = "Read and post chirps on ChipChip", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Data directory for config and logs [default: $CHIPCHIP_PATH or the XDG data dir]"
    )]
    pub data_dir: Option<String>,

    #[arg(
        long,
        global = true,
        help = "API base URL, e.g. http://localhost:8000/api/v1 (overrides config and $CHIPCHIP_API_URL)"
    )]
    pub api_url: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Use a built-in in-memory backend with sample chirps"
    )]
    pub demo: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
