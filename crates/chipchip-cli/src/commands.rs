use anyhow::Result;
use chipchip_runtime::resolve_workspace_path;
use is_terminal::IsTerminal;

use super::args::{Cli, Commands, ConfigCommand, OutputFormat, ViewModeArgs};
use super::context::ExecutionContext;
use super::handlers::{self, HandlerContext};
use super::logging::{self, LogTarget};
use crate::presentation::views::style;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    let command = cli.command.unwrap_or(Commands::Dashboard);

    let log_target = match command {
        Commands::Tui => LogTarget::file_in(&data_dir),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.log_level, log_target)?;

    style::set_color_enabled(
        cli.format == OutputFormat::Plain
            && std::io::stdout().is_terminal()
            && std::env::var_os("NO_COLOR").is_none(),
    );

    tracing::debug!(data_dir = %data_dir.display(), demo = cli.demo, "starting");
    let ctx = ExecutionContext::new(data_dir, cli.api_url, cli.demo);
    let plain = ViewModeArgs::default();

    match command {
        Commands::Dashboard => {
            handlers::dashboard::handle(&ctx, &HandlerContext::new(cli.format, &plain))
        }

        Commands::Timeline {
            mine,
            skip,
            limit,
            view_mode,
        } => handlers::timeline::handle(
            &ctx,
            &HandlerContext::new(cli.format, &view_mode),
            mine,
            skip,
            limit,
        ),

        Commands::Chirp { content, view_mode } => handlers::chirp::handle(
            &ctx,
            &HandlerContext::new(cli.format, &view_mode),
            &content,
        ),

        Commands::Show { id, view_mode } => {
            handlers::show::handle(&ctx, &HandlerContext::new(cli.format, &view_mode), id)
        }

        Commands::Edit {
            id,
            content,
            view_mode,
        } => handlers::edit::handle(
            &ctx,
            &HandlerContext::new(cli.format, &view_mode),
            id,
            &content,
        ),

        Commands::Delete { id, view_mode } => {
            handlers::delete::handle(&ctx, &HandlerContext::new(cli.format, &view_mode), id)
        }

        Commands::Whoami => handlers::whoami::handle(&ctx, &HandlerContext::new(cli.format, &plain)),

        Commands::Tui => handlers::tui::handle(&ctx),

        Commands::Config { command } => {
            let handler = HandlerContext::new(cli.format, &plain);
            match command {
                ConfigCommand::Show => handlers::config::handle_show(&ctx, &handler),
                ConfigCommand::Set {
                    api_url,
                    token,
                    clear_token,
                    timeout,
                    page_limit,
                } => handlers::config::handle_set(
                    &ctx,
                    &handler,
                    handlers::config::ConfigChanges {
                        api_url,
                        token,
                        clear_token,
                        timeout,
                        page_limit,
                    },
                ),
            }
        }
    }
}
