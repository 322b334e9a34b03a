//! Blocking drivers for one-shot commands.
//!
//! They run the same transitions as the interactive front end but call the
//! API inline and keep the typed error for the caller.

use chipchip_types::{Post, validate_content};
use uuid::Uuid;

use crate::app::{ChipChip, Update};
use crate::timeline::{Feed, FeedState, SubmitOutcome};
use crate::worker::{ApiRequest, ApiResponse};
use crate::{Error, Result};

impl ChipChip {
    /// Fetch `feed` if it is missing or stale, then return its state.
    pub fn load_feed(&mut self, feed: &Feed) -> Result<FeedState> {
        if let Some(ApiRequest::Fetch { ticket, feed: target }) = self.fetch_request(feed) {
            let api = self.api().clone();
            match target.fetch(api.as_ref()) {
                Ok(page) => {
                    self.apply(ApiResponse::Fetched {
                        ticket,
                        result: Ok(page),
                    });
                }
                Err(err) => {
                    self.apply(ApiResponse::Fetched {
                        ticket,
                        result: Err(err.to_string()),
                    });
                    return Err(err.into());
                }
            }
        }
        Ok(self.feed_state(feed))
    }

    /// Put `content` in the composer and submit it.
    ///
    /// Over-length content is rejected instead of truncated.
    pub fn submit_chirp(&mut self, content: &str) -> Result<Post> {
        validate_content(content)?;
        self.composer_mut().set_content(content);
        let ticket = self.composer_mut().begin_submit()?;

        let api = self.api().clone();
        match api.create_post(ticket.content()) {
            Ok(post) => {
                let update = self.apply(ApiResponse::Submitted {
                    ticket,
                    result: Ok(post.clone()),
                });
                if let Update::Submit(SubmitOutcome::Posted { invalidated, .. }) = &update {
                    tracing::debug!(keys = invalidated.len(), "timeline marked stale");
                }
                Ok(post)
            }
            Err(err) => {
                self.apply(ApiResponse::Submitted {
                    ticket,
                    result: Err(err.to_string()),
                });
                Err(err.into())
            }
        }
    }

    /// Replace the content of one of your chirps.
    ///
    /// Content follows the same rules as a new chirp. On success every chirp
    /// list is marked stale; a failed edit leaves the cache untouched.
    pub fn edit_chirp(&mut self, id: Uuid, content: &str) -> Result<Post> {
        validate_content(content)?;
        let api = self.api().clone();
        let post = api.update_post(id, content)?;
        let invalidated = self.invalidate_chirps();
        tracing::info!(%id, keys = invalidated.len(), "chirp edited");
        Ok(post)
    }

    pub fn delete_chirp(&mut self, id: Uuid) -> Result<()> {
        let api = self.api().clone();
        let result = api.delete_post(id);
        let message = result.as_ref().err().map(|e| e.to_string());
        self.apply(ApiResponse::Deleted {
            id,
            result: match message {
                Some(message) => Err(message),
                None => Ok(()),
            },
        });
        result.map_err(Error::from)
    }

    pub fn get_chirp(&self, id: Uuid) -> Result<Post> {
        Ok(self.api().get_post(id)?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chipchip_client::{ChirpApi, MemoryApi};
    use chipchip_types::UserProfile;

    use super::*;
    use crate::ComposerStatus;

    fn empty_app() -> ChipChip {
        let api = MemoryApi::new().with_user(UserProfile::new(Some("Ada"), None));
        ChipChip::new(Arc::new(api))
    }

    #[test]
    fn test_submit_then_reload_shows_new_chirp() -> Result<()> {
        let mut app = empty_app();
        let feed = Feed::timeline();
        assert_eq!(app.load_feed(&feed)?, FeedState::Empty);

        app.submit_chirp("Hello world")?;
        assert_eq!(app.composer().content(), "");
        assert_eq!(app.feed_state(&feed), FeedState::Loading { updating: true });

        let state = app.load_feed(&feed)?;
        assert_eq!(state.posts().len(), 1);
        assert_eq!(state.posts()[0].content, "Hello world");
        Ok(())
    }

    #[test]
    fn test_over_length_is_rejected_before_sending() {
        let mut app = empty_app();
        let err = app.submit_chirp(&"x".repeat(281)).unwrap_err();
        assert!(matches!(
            err,
            Error::Content(chipchip_types::Error::ContentTooLong { len: 281, max: 280 })
        ));
        assert_eq!(app.composer().content(), "");
    }

    #[test]
    fn test_remote_failure_keeps_content() {
        let mut app = ChipChip::new(Arc::new(MemoryApi::new()));
        let err = app.submit_chirp("hello").unwrap_err();
        assert!(matches!(err, Error::Api(chipchip_client::Error::Unauthorized(_))));
        assert_eq!(app.composer().content(), "hello");
        assert!(matches!(app.composer().status(), ComposerStatus::Failed { .. }));
    }

    #[test]
    fn test_delete_requires_ownership() -> Result<()> {
        let api = Arc::new(MemoryApi::seeded());
        let mut app = ChipChip::new(api);
        let state = app.load_feed(&Feed::timeline())?;
        let foreign = state.posts()[0].id;

        assert!(app.delete_chirp(foreign).is_err());
        assert!(!app.feed_state(&Feed::timeline()).is_loading());
        Ok(())
    }

    #[test]
    fn test_edit_invalidates_timeline() -> Result<()> {
        let api = Arc::new(MemoryApi::seeded());
        let mine = api.create_post("helo")?;
        let mut app = ChipChip::new(api);
        let feed = Feed::timeline();
        app.load_feed(&feed)?;

        let edited = app.edit_chirp(mine.id, "hello")?;
        assert_eq!(edited.content, "hello");
        assert_eq!(app.feed_state(&feed), FeedState::Loading { updating: true });

        let state = app.load_feed(&feed)?;
        assert_eq!(state.posts()[0].content, "hello");
        Ok(())
    }

    #[test]
    fn test_edit_rejects_blank_and_over_length_locally() -> Result<()> {
        let api = Arc::new(MemoryApi::seeded());
        let mine = api.create_post("keep")?;
        let mut app = ChipChip::new(api.clone());
        let feed = Feed::timeline();
        app.load_feed(&feed)?;

        assert!(matches!(
            app.edit_chirp(mine.id, "   "),
            Err(Error::Content(chipchip_types::Error::EmptyContent))
        ));
        assert!(matches!(
            app.edit_chirp(mine.id, &"x".repeat(281)),
            Err(Error::Content(chipchip_types::Error::ContentTooLong { .. }))
        ));
        assert!(!app.feed_state(&feed).is_loading());
        assert_eq!(api.get_post(mine.id)?.content, "keep");
        Ok(())
    }

    #[test]
    fn test_edit_foreign_chirp_is_refused() -> Result<()> {
        let mut app = ChipChip::new(Arc::new(MemoryApi::seeded()));
        let feed = Feed::timeline();
        let foreign = app.load_feed(&feed)?.posts()[0].id;

        let err = app.edit_chirp(foreign, "mine now").unwrap_err();
        assert!(matches!(err, Error::Api(chipchip_client::Error::Unauthorized(_))));
        assert!(!app.feed_state(&feed).is_loading());
        Ok(())
    }

    #[test]
    fn test_get_chirp_not_found() {
        let app = ChipChip::new(Arc::new(MemoryApi::seeded()));
        let err = app.get_chirp(Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, Error::Api(chipchip_client::Error::NotFound(_))));
    }
}
