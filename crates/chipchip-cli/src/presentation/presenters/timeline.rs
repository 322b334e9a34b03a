use chipchip_runtime::{ChipChip, Composer, Feed, FeedState};
use chipchip_types::{CurrentUser, MAX_CHIRP_CHARS, Post, char_len};
use chrono::Utc;
use uuid::Uuid;

use super::present_navbar;
use crate::args::hints::{cmd, fmt};
use crate::presentation::formatters::text::short_id;
use crate::presentation::view_models::{
    CommandResultViewModel, ComposerViewModel, FeedViewModel, Guidance, PostCardViewModel,
    StatusBadge, TimelineViewModel,
};

/// Shown on the optimistic card and the composer when no user is loaded yet.
const FALLBACK_AUTHOR: &str = "You";

pub fn present_card(post: &Post, me: Option<&CurrentUser>) -> PostCardViewModel {
    let own = match (me.and_then(|u| u.id), post.author_id) {
        (Some(me), Some(author)) => me == author,
        _ => false,
    };

    PostCardViewModel {
        id: Some(post.id),
        author_name: post.author_name().to_string(),
        author_email: post.author.as_ref().and_then(|a| a.email.clone()),
        created_at: post.created_at,
        content: post.content.clone(),
        likes_count: post.likes_count,
        pending: false,
        own,
    }
}

/// Card for a chirp that is still being sent. Never stored in the cache.
pub fn present_pending_card(content: &str, me: Option<&CurrentUser>) -> PostCardViewModel {
    PostCardViewModel {
        id: None,
        author_name: me
            .and_then(|u| u.display_name())
            .unwrap_or(FALLBACK_AUTHOR)
            .to_string(),
        author_email: me.and_then(|u| u.email.clone()),
        created_at: Utc::now(),
        content: content.to_string(),
        likes_count: 0,
        pending: true,
        own: true,
    }
}

pub fn present_feed(state: &FeedState, me: Option<&CurrentUser>) -> FeedViewModel {
    match state {
        FeedState::Loading { updating } => FeedViewModel::Loading {
            updating: *updating,
            placeholders: state.placeholder_count(),
        },
        FeedState::Empty => FeedViewModel::Empty,
        FeedState::Populated { posts, total } => FeedViewModel::Populated {
            cards: posts.iter().map(|p| present_card(p, me)).collect(),
            total: *total,
        },
        FeedState::Failed { message } => FeedViewModel::Failed {
            message: message.clone(),
        },
    }
}

pub fn present_composer(composer: &Composer, me: Option<&CurrentUser>) -> ComposerViewModel {
    ComposerViewModel {
        author_name: me
            .and_then(|u| u.display_name())
            .unwrap_or(FALLBACK_AUTHOR)
            .to_string(),
        content: composer.content().to_string(),
        char_count: char_len(composer.content()),
        remaining: composer.remaining(),
        max_chars: MAX_CHIRP_CHARS,
        can_submit: composer.can_submit(),
        submitting: composer.is_submitting(),
        error: composer.error().map(str::to_string),
    }
}

/// Full timeline page. `with_composer` is set by the interactive UI.
pub fn build_timeline(app: &ChipChip, feed: &Feed, with_composer: bool) -> TimelineViewModel {
    let me = app.known_user();
    let composer = app.composer();

    TimelineViewModel {
        title: feed.kind().title().to_string(),
        kind: feed.kind(),
        navbar: present_navbar(me),
        composer: with_composer.then(|| present_composer(composer, me)),
        pending: composer
            .pending_content()
            .map(|content| present_pending_card(content, me)),
        feed: present_feed(&app.feed_state(feed), me),
    }
}

fn with_paging_tips(
    result: CommandResultViewModel<TimelineViewModel>,
    feed: &Feed,
) -> CommandResultViewModel<TimelineViewModel> {
    let FeedViewModel::Populated { cards, total } = &result.content.feed else {
        return result;
    };
    let (shown, total) = (cards.len(), *total);

    let params = feed.params();
    let next_skip = params.skip + shown;
    if next_skip >= total {
        return result;
    }
    result.with_suggestion(
        Guidance::new(format!("{} more chirp(s)", total - next_skip))
            .with_command(fmt::timeline_page(next_skip, params.limit)),
    )
}

pub fn present_timeline(app: &ChipChip, feed: &Feed) -> CommandResultViewModel<TimelineViewModel> {
    let content = build_timeline(app, feed, false);

    let (badge, suggestions) = match &content.feed {
        FeedViewModel::Empty => (
            Some(StatusBadge::info("No chirps yet")),
            vec![Guidance::new("Be the first to chirp something!").with_command(cmd::CHIRP)],
        ),
        FeedViewModel::Populated { cards, total } => {
            let label = if cards.len() < *total {
                format!("{} of {} chirp(s)", cards.len(), total)
            } else {
                format!("{} chirp(s)", total)
            };
            let suggestions = cards
                .first()
                .and_then(|c| c.id)
                .map(|id| Guidance::new("Open a chirp").with_command(fmt::show(&id.to_string())))
                .into_iter()
                .collect();
            (Some(StatusBadge::success(label)), suggestions)
        }
        FeedViewModel::Failed { message } => (
            Some(StatusBadge::error(message.clone())),
            vec![Guidance::new("Retry").with_command(cmd::TIMELINE)],
        ),
        FeedViewModel::Loading { .. } => (None, Vec::new()),
    };

    let mut result = CommandResultViewModel::new(content).with_suggestions(suggestions);
    if let Some(badge) = badge {
        result = result.with_badge(badge);
    }
    with_paging_tips(result, feed)
}

pub fn present_chirp_posted(
    app: &ChipChip,
    feed: &Feed,
    post: &Post,
) -> CommandResultViewModel<TimelineViewModel> {
    CommandResultViewModel::new(build_timeline(app, feed, false))
        .with_badge(StatusBadge::success(format!(
            "Chirp posted ({})",
            short_id(&post.id)
        )))
        .with_suggestion(Guidance::new("Open it").with_command(fmt::show(&post.id.to_string())))
        .with_suggestion(Guidance::new("See only your chirps").with_command(cmd::TIMELINE_MINE))
}

pub fn present_chirp_deleted(
    app: &ChipChip,
    feed: &Feed,
    id: Uuid,
) -> CommandResultViewModel<TimelineViewModel> {
    CommandResultViewModel::new(build_timeline(app, feed, false)).with_badge(StatusBadge::success(
        format!("Chirp deleted ({})", short_id(&id)),
    ))
}

pub fn present_chirp_edited(
    app: &ChipChip,
    feed: &Feed,
    post: &Post,
) -> CommandResultViewModel<TimelineViewModel> {
    CommandResultViewModel::new(build_timeline(app, feed, false))
        .with_badge(StatusBadge::success(format!(
            "Chirp edited ({})",
            short_id(&post.id)
        )))
        .with_suggestion(Guidance::new("Open it").with_command(fmt::show(&post.id.to_string())))
}

pub fn present_post(
    post: &Post,
    me: Option<&CurrentUser>,
) -> CommandResultViewModel<PostCardViewModel> {
    let card = present_card(post, me);
    let mut result = CommandResultViewModel::new(card);
    if result.content.own {
        let id = post.id.to_string();
        result = result
            .with_suggestion(Guidance::new("Edit it").with_command(fmt::edit(&id)))
            .with_suggestion(Guidance::new("Delete it").with_command(fmt::delete(&id)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipchip_testing::fixtures;

    #[test]
    fn test_cards_keep_server_order() {
        let posts = fixtures::posts(4);
        let state = FeedState::Populated {
            posts: posts.clone(),
            total: 4,
        };

        let feed = present_feed(&state, None);
        let contents: Vec<&str> = feed.cards().iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["chirp 4", "chirp 3", "chirp 2", "chirp 1"]);
    }

    #[test]
    fn test_loading_has_three_placeholders() {
        let feed = present_feed(&FeedState::Loading { updating: false }, None);
        assert_eq!(
            feed,
            FeedViewModel::Loading {
                updating: false,
                placeholders: 3
            }
        );
        assert!(feed.cards().is_empty());
    }

    #[test]
    fn test_card_marks_own_chirps() {
        let me = fixtures::alice();
        let mine = fixtures::post_by("mine", &me);
        let other = fixtures::post_by("theirs", &fixtures::user(None, Some("x@y.z")));

        assert!(present_card(&mine, Some(&me)).own);
        assert!(!present_card(&other, Some(&me)).own);
        assert!(!present_card(&mine, None).own);
    }

    #[test]
    fn test_card_author_fallbacks() {
        let anonymous = fixtures::post("hi");
        assert_eq!(present_card(&anonymous, None).author_name, "Unknown User");

        let email_only = fixtures::post_by("hi", &fixtures::user(None, Some("wren@chipchip.dev")));
        assert_eq!(present_card(&email_only, None).author_name, "wren@chipchip.dev");
    }

    #[test]
    fn test_pending_card_uses_current_user() {
        let me = fixtures::alice();
        let card = present_pending_card("sending", Some(&me));
        assert!(card.pending);
        assert!(card.id.is_none());
        assert_eq!(card.author_name, "Alice Lark");

        assert_eq!(present_pending_card("x", None).author_name, "You");
    }

    #[test]
    fn test_composer_counter() {
        let mut composer = Composer::new();
        composer.set_content("hello");
        let vm = present_composer(&composer, None);
        assert_eq!(vm.char_count, 5);
        assert_eq!(vm.remaining, 275);
        assert!(vm.can_submit);

        composer.set_content(&"x".repeat(300));
        let vm = present_composer(&composer, None);
        assert_eq!(vm.char_count, 280);
        assert_eq!(vm.remaining, 0);
    }

    #[test]
    fn test_partial_page_suggests_next_page() -> anyhow::Result<()> {
        use chipchip_client::MemoryApi;
        use chipchip_runtime::FeedKind;
        use chipchip_types::ListParams;
        use std::sync::Arc;

        let api = MemoryApi::new()
            .with_user(fixtures::alice())
            .with_posts(fixtures::posts(5));
        let mut app = ChipChip::new(Arc::new(api));
        let feed = Feed::new(FeedKind::Timeline, ListParams::new(0, 2));
        app.load_feed(&feed)?;

        let result = present_timeline(&app, &feed);
        assert_eq!(
            result.badge.as_ref().map(|b| b.label.as_str()),
            Some("2 of 5 chirp(s)")
        );
        let paging = result
            .suggestions
            .iter()
            .find(|g| g.description == "3 more chirp(s)")
            .and_then(|g| g.command.as_deref());
        assert_eq!(paging, Some("chipchip timeline --skip 2 --limit 2"));
        Ok(())
    }

    #[test]
    fn test_full_page_has_no_paging_tip() -> anyhow::Result<()> {
        use chipchip_client::MemoryApi;
        use std::sync::Arc;

        let mut app = ChipChip::new(Arc::new(MemoryApi::seeded()));
        let feed = Feed::timeline();
        app.load_feed(&feed)?;

        let result = present_timeline(&app, &feed);
        assert!(
            result
                .suggestions
                .iter()
                .all(|g| !g.description.ends_with("more chirp(s)"))
        );
        Ok(())
    }

    #[test]
    fn test_own_post_offers_edit_and_delete() {
        let me = fixtures::alice();
        let mine = fixtures::post_by("mine", &me);
        let id = mine.id.to_string();

        let commands: Vec<String> = present_post(&mine, Some(&me))
            .suggestions
            .into_iter()
            .filter_map(|s| s.command)
            .collect();
        assert_eq!(commands, vec![fmt::edit(&id), fmt::delete(&id)]);

        assert!(present_post(&mine, None).suggestions.is_empty());
    }

    #[test]
    fn test_whitespace_cannot_submit() {
        let mut composer = Composer::new();
        composer.set_content("   \n ");
        assert!(!present_composer(&composer, None).can_submit);
    }
}
