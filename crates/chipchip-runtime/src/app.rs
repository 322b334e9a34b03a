use std::sync::Arc;

use chipchip_client::ChirpApi;
use chipchip_types::{CurrentUser, PostPage};
use once_cell::sync::OnceCell;
use uuid::Uuid;

use crate::query::{QueryCache, QueryKey, Settled};
use crate::timeline::{Composer, Feed, FeedState, SubmitOutcome};
use crate::worker::{ApiRequest, ApiResponse};
use crate::Result;

/// Client context: the API, the query cache, the composer and the signed-in
/// user. All mutation happens through `&mut self` on one thread.
pub struct ChipChip {
    api: Arc<dyn ChirpApi>,
    cache: QueryCache<PostPage>,
    composer: Composer,
    current_user: OnceCell<Option<CurrentUser>>,
}

/// What changed after applying an [`ApiResponse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    UserLoaded,
    UserFailed { message: String },
    FeedSettled { key: QueryKey, settled: Settled },
    Submit(SubmitOutcome),
    Deleted { id: Uuid },
    DeleteFailed { id: Uuid, message: String },
}

impl ChipChip {
    pub fn new(api: Arc<dyn ChirpApi>) -> Self {
        Self {
            api,
            cache: QueryCache::new(),
            composer: Composer::new(),
            current_user: OnceCell::new(),
        }
    }

    pub fn api(&self) -> &Arc<dyn ChirpApi> {
        &self.api
    }

    pub fn cache(&self) -> &QueryCache<PostPage> {
        &self.cache
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn composer_mut(&mut self) -> &mut Composer {
        &mut self.composer
    }

    /// Signed-in user, fetched on first use.
    pub fn current_user(&self) -> Result<Option<&CurrentUser>> {
        let user = self
            .current_user
            .get_or_try_init(|| self.api.current_user())?;
        Ok(user.as_ref())
    }

    /// Signed-in user if it has already been loaded. Never blocks.
    pub fn known_user(&self) -> Option<&CurrentUser> {
        self.current_user.get().and_then(|u| u.as_ref())
    }

    pub fn feed_state(&self, feed: &Feed) -> FeedState {
        feed.state(&self.cache)
    }

    pub fn retry(&mut self, feed: &Feed) {
        feed.retry(&mut self.cache);
    }

    pub fn user_request(&self) -> Option<ApiRequest> {
        self.current_user.get().is_none().then_some(ApiRequest::CurrentUser)
    }

    /// Request for `feed` if it is missing or stale and not already in flight.
    pub fn fetch_request(&mut self, feed: &Feed) -> Option<ApiRequest> {
        if !self.cache.needs_fetch(feed.key()) {
            return None;
        }
        let ticket = self.cache.begin_fetch(feed.key())?;
        Some(ApiRequest::Fetch {
            ticket,
            feed: feed.clone(),
        })
    }

    /// Start submitting the composer content.
    pub fn submit_request(&mut self) -> Result<ApiRequest> {
        let ticket = self.composer.begin_submit()?;
        Ok(ApiRequest::Submit { ticket })
    }

    /// Mark every chirp list stale after a write.
    pub(crate) fn invalidate_chirps(&mut self) -> Vec<QueryKey> {
        self.cache.invalidate(&QueryKey::tweets())
    }

    pub fn delete_request(&self, id: Uuid) -> ApiRequest {
        ApiRequest::Delete { id }
    }

    /// Fold a settled request back into the state.
    pub fn apply(&mut self, response: ApiResponse) -> Update {
        match response {
            ApiResponse::CurrentUser(Ok(user)) => {
                // A concurrent blocking load may have won; both saw the same server
                let _ = self.current_user.set(user);
                Update::UserLoaded
            }
            ApiResponse::CurrentUser(Err(message)) => Update::UserFailed { message },
            ApiResponse::Fetched { ticket, result } => {
                let key = ticket.key().clone();
                let settled = self.cache.settle(ticket, result);
                Update::FeedSettled { key, settled }
            }
            ApiResponse::Submitted { ticket, result } => {
                Update::Submit(self.composer.settle(ticket, result, &mut self.cache))
            }
            ApiResponse::Deleted { id, result: Ok(()) } => {
                self.invalidate_chirps();
                tracing::info!(%id, "chirp deleted");
                Update::Deleted { id }
            }
            ApiResponse::Deleted {
                id,
                result: Err(message),
            } => Update::DeleteFailed { id, message },
        }
    }
}
