use anyhow::Result;
use chipchip_runtime::{Feed, FeedKind};
use chipchip_types::ListParams;
use uuid::Uuid;

use super::{HandlerContext, not_found_as_chirp, with_retry_hint};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(ctx: &ExecutionContext, handler: &HandlerContext, id: Uuid) -> Result<()> {
    let page_limit = ctx.config()?.page_limit;
    let mut client = ctx.client()?;
    client.current_user()?;

    client.delete_chirp(id).map_err(not_found_as_chirp(id))?;

    let feed = Feed::new(FeedKind::Timeline, ListParams::new(0, page_limit));
    client.load_feed(&feed).map_err(with_retry_hint)?;

    handler.render(presenters::present_chirp_deleted(&client, &feed, id))
}
