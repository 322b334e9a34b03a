use anyhow::Result;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, handler: &HandlerContext) -> Result<()> {
    let client = ctx.client()?;
    let user = client.current_user()?;

    handler.render(presenters::present_dashboard(user))
}
