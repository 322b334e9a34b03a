//! In-process backend.
//!
//! Behaves like the remote API (newest-first ordering, server-side length
//! check, ownership check on delete) without any network. Backs `--demo` and
//! the test suites.

use std::sync::Mutex;

use chipchip_types::{CurrentUser, ListParams, MAX_CHIRP_CHARS, Post, PostPage, UserProfile, char_len};
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::traits::ChirpApi;
use crate::{Error, Result};

#[derive(Default)]
struct MemoryState {
    /// Newest first
    posts: Vec<Post>,
    current_user: Option<CurrentUser>,
}

#[derive(Default)]
pub struct MemoryApi {
    state: Mutex<MemoryState>,
}

impl MemoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in as `user`. A user without an id gets a fresh one.
    pub fn with_user(self, mut user: CurrentUser) -> Self {
        user.id.get_or_insert_with(Uuid::new_v4);
        self.lock().current_user = Some(user);
        self
    }

    /// Replace the stored chirps. They are kept in the given order.
    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.lock().posts = posts;
        self
    }

    /// A signed-in user and a handful of chirps from other people.
    pub fn seeded() -> Self {
        let me = UserProfile::new(Some("Demo User"), Some("demo@chipchip.dev"));
        let now = Utc::now();

        let others = [
            (
                Some("Robin Finch"),
                "robin@chipchip.dev",
                "Morning! The coffee machine on floor 3 is finally fixed ☕",
                4,
                12,
            ),
            (
                None,
                "wren@chipchip.dev",
                "Shipping the new timeline today. Chirp responsibly.",
                37,
                5,
            ),
            (
                Some("Jay Sparrow"),
                "jay@chipchip.dev",
                "Hello, ChipChip 🐦",
                180,
                42,
            ),
        ];

        let posts = others
            .into_iter()
            .map(|(name, email, content, minutes_ago, likes)| {
                let mut author = UserProfile::new(name, Some(email));
                author.id = Some(Uuid::new_v4());
                Post {
                    id: Uuid::new_v4(),
                    content: content.to_string(),
                    author_id: author.id,
                    author: Some(author),
                    created_at: now - Duration::minutes(minutes_ago),
                    likes_count: likes,
                }
            })
            .collect();

        Self::new().with_user(me).with_posts(posts)
    }

    pub fn post_count(&self) -> usize {
        self.lock().posts.len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A panic while holding the lock leaves the Vec intact, so keep going
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn require_user(state: &MemoryState) -> Result<CurrentUser> {
        state
            .current_user
            .clone()
            .ok_or_else(|| Error::Unauthorized("Not authenticated".to_string()))
    }

    /// Position of chirp `id`, provided the signed-in user wrote it.
    fn owned_index(state: &MemoryState, id: Uuid) -> Result<usize> {
        let me = Self::require_user(state)?;
        let index = state
            .posts
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| Error::NotFound("Tweet not found".to_string()))?;

        if state.posts[index].author_id != me.id {
            return Err(Error::Unauthorized("Not enough permissions".to_string()));
        }
        Ok(index)
    }
}

fn check_length(content: &str) -> Result<()> {
    let len = char_len(content);
    if len == 0 || len > MAX_CHIRP_CHARS {
        return Err(Error::Validation(format!(
            "String should have between 1 and {} characters",
            MAX_CHIRP_CHARS
        )));
    }
    Ok(())
}

fn paginate(posts: Vec<Post>, params: ListParams) -> PostPage {
    let count = posts.len();
    let data = posts
        .into_iter()
        .skip(params.skip)
        .take(params.limit)
        .collect();
    PostPage { data, count }
}

impl ChirpApi for MemoryApi {
    fn id(&self) -> &'static str {
        "memory"
    }

    fn current_user(&self) -> Result<Option<CurrentUser>> {
        Ok(self.lock().current_user.clone())
    }

    fn list_posts(&self, params: ListParams) -> Result<PostPage> {
        let state = self.lock();
        Self::require_user(&state)?;
        Ok(paginate(state.posts.clone(), params))
    }

    fn list_my_posts(&self, params: ListParams) -> Result<PostPage> {
        let state = self.lock();
        let me = Self::require_user(&state)?;
        let mine = state
            .posts
            .iter()
            .filter(|p| p.author_id.is_some() && p.author_id == me.id)
            .cloned()
            .collect();
        Ok(paginate(mine, params))
    }

    fn get_post(&self, id: Uuid) -> Result<Post> {
        let state = self.lock();
        Self::require_user(&state)?;
        state
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound("Tweet not found".to_string()))
    }

    fn create_post(&self, content: &str) -> Result<Post> {
        let mut state = self.lock();
        let me = Self::require_user(&state)?;

        check_length(content)?;

        let post = Post {
            id: Uuid::new_v4(),
            content: content.to_string(),
            author_id: me.id,
            author: Some(me),
            created_at: Utc::now(),
            likes_count: 0,
        };
        state.posts.insert(0, post.clone());
        tracing::debug!(id = %post.id, "memory backend stored chirp");
        Ok(post)
    }

    fn update_post(&self, id: Uuid, content: &str) -> Result<Post> {
        let mut state = self.lock();
        let index = Self::owned_index(&state, id)?;
        check_length(content)?;

        let post = &mut state.posts[index];
        post.content = content.to_string();
        tracing::debug!(id = %post.id, "memory backend updated chirp");
        Ok(post.clone())
    }

    fn delete_post(&self, id: Uuid) -> Result<()> {
        let mut state = self.lock();
        let index = Self::owned_index(&state, id)?;
        state.posts.remove(index);
        Ok(())
    }
}
