use anyhow::Result;
use uuid::Uuid;

use super::{HandlerContext, not_found_as_chirp};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, handler: &HandlerContext, id: Uuid) -> Result<()> {
    let client = ctx.client()?;
    let post = client.get_chirp(id).map_err(not_found_as_chirp(id))?;
    let me = client.current_user()?;

    handler.render(presenters::present_post(&post, me))
}
