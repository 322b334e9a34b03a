use anyhow::Result;
use is_terminal::IsTerminal;

use crate::context::ExecutionContext;
use crate::presentation::renderers::TuiRenderer;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!("The TUI needs an interactive terminal. Use `chipchip timeline` instead.");
    }

    let page_limit = ctx.config()?.page_limit;
    let client = ctx.client()?;
    tracing::info!(backend = client.api().id(), "starting tui");

    TuiRenderer::new(client, page_limit).run()
}
