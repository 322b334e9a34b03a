use chipchip_types::{CurrentUser, ListParams, Post, PostPage};
use uuid::Uuid;

use crate::Result;

/// Remote operations the client consumes.
///
/// Calls block the calling thread until the request settles. Interactive
/// front ends run them on a worker thread and hand the result back to the
/// UI thread (see `chipchip-runtime`).
pub trait ChirpApi: Send + Sync {
    /// Short backend label for logs and status lines (e.g. "http", "memory")
    fn id(&self) -> &'static str;

    /// Signed-in user, or `None` when no credentials are configured
    fn current_user(&self) -> Result<Option<CurrentUser>>;

    /// Public timeline, newest first
    fn list_posts(&self, params: ListParams) -> Result<PostPage>;

    /// Chirps written by the signed-in user, newest first
    fn list_my_posts(&self, params: ListParams) -> Result<PostPage>;

    fn get_post(&self, id: Uuid) -> Result<Post>;

    fn create_post(&self, content: &str) -> Result<Post>;

    /// Replace the content of one of the signed-in user's chirps
    fn update_post(&self, id: Uuid, content: &str) -> Result<Post>;

    fn delete_post(&self, id: Uuid) -> Result<()>;
}
