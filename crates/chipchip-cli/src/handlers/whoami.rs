use anyhow::Result;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, handler: &HandlerContext) -> Result<()> {
    let config = ctx.config()?;
    let api = ctx.api()?;
    let user = api.current_user()?;

    handler.render(presenters::present_user(
        user.as_ref(),
        api.id(),
        &config.api_url,
    ))
}
