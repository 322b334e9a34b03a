use chipchip_client::ChirpApi;
use chipchip_types::{ListParams, Post, PostPage};
use serde::Serialize;

use crate::query::{QueryCache, QueryKey};

/// Skeleton cards shown while a feed loads.
pub const PLACEHOLDER_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedKind {
    /// Everyone's chirps
    Timeline,
    /// Chirps by the signed-in user
    Mine,
}

impl FeedKind {
    pub fn base_key(self) -> QueryKey {
        match self {
            FeedKind::Timeline => QueryKey::tweets(),
            FeedKind::Mine => QueryKey::my_tweets(),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FeedKind::Timeline => "Timeline",
            FeedKind::Mine => "My Chirps",
        }
    }
}

/// What a feed shows right now.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FeedState {
    /// `updating` is set when a previous result exists and is being refreshed
    Loading { updating: bool },
    Empty,
    /// Server order; `total` is the server-side count
    Populated { posts: Vec<Post>, total: usize },
    Failed { message: String },
}

impl FeedState {
    pub fn placeholder_count(&self) -> usize {
        match self {
            FeedState::Loading { .. } => PLACEHOLDER_COUNT,
            _ => 0,
        }
    }

    pub fn posts(&self) -> &[Post] {
        match self {
            FeedState::Populated { posts, .. } => posts,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FeedState::Loading { .. })
    }
}

/// A chirp list bound to one cache key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    kind: FeedKind,
    params: ListParams,
    key: QueryKey,
}

impl Feed {
    pub fn new(kind: FeedKind, params: ListParams) -> Self {
        let mut segments = kind.base_key().segments().to_vec();
        if params != ListParams::default() {
            segments.push(format!("{}+{}", params.skip, params.limit));
        }
        Self {
            kind,
            params,
            key: QueryKey::new(segments),
        }
    }

    pub fn timeline() -> Self {
        Self::new(FeedKind::Timeline, ListParams::default())
    }

    pub fn mine() -> Self {
        Self::new(FeedKind::Mine, ListParams::default())
    }

    pub fn kind(&self) -> FeedKind {
        self.kind
    }

    pub fn params(&self) -> ListParams {
        self.params
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Derive the feed state from its cache entry.
    pub fn state(&self, cache: &QueryCache<PostPage>) -> FeedState {
        let snapshot = cache.query(&self.key);

        if snapshot.is_loading() {
            return FeedState::Loading {
                updating: snapshot.data.is_some(),
            };
        }
        if let Some(message) = snapshot.error {
            return FeedState::Failed {
                message: message.to_string(),
            };
        }
        match snapshot.data {
            Some(page) if page.is_empty() => FeedState::Empty,
            Some(page) => FeedState::Populated {
                posts: page.data.clone(),
                total: page.count,
            },
            None => FeedState::Loading { updating: false },
        }
    }

    /// Remote call backing this feed. Blocks until the request settles.
    pub fn fetch(&self, api: &dyn ChirpApi) -> chipchip_client::Result<PostPage> {
        match self.kind {
            FeedKind::Timeline => api.list_posts(self.params),
            FeedKind::Mine => api.list_my_posts(self.params),
        }
    }

    /// Mark the feed stale so the next turn refetches it.
    pub fn retry(&self, cache: &mut QueryCache<PostPage>) {
        cache.invalidate(&self.key);
    }
}
