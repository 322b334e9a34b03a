use super::common::ViewModeArgs;
use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Show the dashboard (default when no command is given)")]
    Dashboard,

    #[command(about = "Show the timeline")]
    Timeline {
        #[arg(long, help = "Only chirps written by you")]
        mine: bool,

        #[arg(long, default_value = "0")]
        skip: usize,

        #[arg(long, help = "Maximum chirps to fetch [default: page_limit from config]")]
        limit: Option<usize>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Post a chirp (max 280 characters) and show the updated timeline")]
    Chirp {
        content: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show a single chirp")]
    Show {
        id: Uuid,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Replace the text of one of your chirps (max 280 characters)")]
    Edit {
        id: Uuid,

        content: String,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Delete one of your chirps")]
    Delete {
        id: Uuid,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show the signed-in user")]
    Whoami,

    #[command(about = "Open the interactive terminal UI")]
    Tui,

    #[command(about = "Inspect or change configuration")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Update values in config.toml")]
    Set {
        #[arg(long)]
        api_url: Option<String>,

        #[arg(long, help = "Bearer token for API requests")]
        token: Option<String>,

        #[arg(long, conflicts_with = "token", help = "Remove the stored token")]
        clear_token: bool,

        #[arg(long, help = "Request timeout in seconds")]
        timeout: Option<u64>,

        #[arg(long, help = "Default number of chirps per fetch")]
        page_limit: Option<usize>,
    },
}
