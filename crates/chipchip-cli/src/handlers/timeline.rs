use anyhow::Result;
use chipchip_runtime::{Feed, FeedKind};
use chipchip_types::ListParams;

use super::{HandlerContext, with_retry_hint};
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle(
    ctx: &ExecutionContext,
    handler: &HandlerContext,
    mine: bool,
    skip: usize,
    limit: Option<usize>,
) -> Result<()> {
    let limit = match limit {
        Some(limit) => limit,
        None => ctx.config()?.page_limit,
    };
    if limit == 0 {
        anyhow::bail!("--limit must be at least 1");
    }

    let kind = if mine { FeedKind::Mine } else { FeedKind::Timeline };
    let feed = Feed::new(kind, ListParams::new(skip, limit));

    let mut client = ctx.client()?;
    client.current_user()?;
    client.load_feed(&feed).map_err(with_retry_hint)?;
    tracing::debug!(key = %feed.key(), "feed loaded");

    handler.render(presenters::present_timeline(&client, &feed))
}
