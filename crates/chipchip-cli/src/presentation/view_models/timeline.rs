use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use chipchip_runtime::FeedKind;

use super::NavbarViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct TimelineViewModel {
    pub title: String,
    pub kind: FeedKind,
    pub navbar: NavbarViewModel,
    /// Absent for one-shot listings, which have no input box
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composer: Option<ComposerViewModel>,
    /// Chirp being sent, shown above the list until the request settles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending: Option<PostCardViewModel>,
    pub feed: FeedViewModel,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeedViewModel {
    Loading { updating: bool, placeholders: usize },
    Empty,
    Populated {
        cards: Vec<PostCardViewModel>,
        total: usize,
    },
    Failed { message: String },
}

impl FeedViewModel {
    pub fn cards(&self) -> &[PostCardViewModel] {
        match self {
            FeedViewModel::Populated { cards, .. } => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PostCardViewModel {
    /// `None` for the optimistic card
    pub id: Option<Uuid>,
    pub author_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub content: String,
    pub likes_count: u64,
    pub pending: bool,
    /// Written by the signed-in user
    pub own: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ComposerViewModel {
    pub author_name: String,
    pub content: String,
    pub char_count: usize,
    pub remaining: usize,
    pub max_chars: usize,
    pub can_submit: bool,
    pub submitting: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
