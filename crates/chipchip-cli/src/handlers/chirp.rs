use anyhow::Result;
use chipchip_runtime::{Feed, FeedKind};
use chipchip_types::ListParams;

use super::{HandlerContext, with_retry_hint};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

/// Post `content`, then print the refreshed timeline with the new chirp.
pub fn handle(ctx: &ExecutionContext, handler: &HandlerContext, content: &str) -> Result<()> {
    let page_limit = ctx.config()?.page_limit;
    let mut client = ctx.client()?;
    client.current_user()?;

    let post = client.submit_chirp(content).map_err(with_retry_hint)?;
    tracing::info!(id = %post.id, "chirp posted");

    let feed = Feed::new(FeedKind::Timeline, ListParams::new(0, page_limit));
    client.load_feed(&feed).map_err(with_retry_hint)?;

    handler.render(presenters::present_chirp_posted(&client, &feed, &post))
}
