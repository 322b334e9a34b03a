use chipchip_types::{
    MAX_CHIRP_CHARS, Post, char_len, is_submittable, remaining_chars, truncate_to_limit,
};
use serde::Serialize;

use crate::query::{QueryCache, QueryKey};
use crate::{Error, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ComposerStatus {
    #[default]
    Idle,
    Submitting { content: String },
    Failed { message: String },
}

/// Proof that a submission was started. Hand it back to [`Composer::settle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    id: u64,
    content: String,
}

impl SubmitTicket {
    /// Content to send, exactly as typed
    pub fn content(&self) -> &str {
        &self.content
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Created; the listed cache keys were invalidated
    Posted { post: Post, invalidated: Vec<QueryKey> },
    /// Rejected or failed in transit; the content was kept
    Failed { message: String },
    /// Ticket did not belong to the current submission
    Stale,
}

/// Bounded text input that turns into a new chirp.
#[derive(Debug, Default)]
pub struct Composer {
    content: String,
    status: ComposerStatus,
    next_ticket: u64,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn status(&self) -> &ComposerStatus {
        &self.status
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.status, ComposerStatus::Submitting { .. })
    }

    /// Content currently in flight, if any.
    pub fn pending_content(&self) -> Option<&str> {
        match &self.status {
            ComposerStatus::Submitting { content } => Some(content),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ComposerStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Replace the content. Anything past the limit is dropped.
    pub fn set_content(&mut self, text: &str) {
        self.content = truncate_to_limit(text);
        self.clear_error();
    }

    /// Append one character. Returns false when the limit is reached.
    pub fn insert_char(&mut self, c: char) -> bool {
        if char_len(&self.content) >= MAX_CHIRP_CHARS {
            return false;
        }
        self.content.push(c);
        self.clear_error();
        true
    }

    pub fn backspace(&mut self) {
        self.content.pop();
        self.clear_error();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.clear_error();
    }

    pub fn remaining(&self) -> usize {
        remaining_chars(&self.content)
    }

    pub fn can_submit(&self) -> bool {
        is_submittable(&self.content) && !self.is_submitting()
    }

    pub fn begin_submit(&mut self) -> Result<SubmitTicket> {
        if self.is_submitting() {
            return Err(Error::InvalidOperation(
                "a chirp is already being sent".to_string(),
            ));
        }
        if !is_submittable(&self.content) {
            return Err(Error::Content(chipchip_types::Error::EmptyContent));
        }

        self.next_ticket += 1;
        let ticket = SubmitTicket {
            id: self.next_ticket,
            content: self.content.clone(),
        };
        self.status = ComposerStatus::Submitting {
            content: ticket.content.clone(),
        };
        tracing::debug!(ticket = ticket.id, chars = char_len(&ticket.content), "submitting chirp");
        Ok(ticket)
    }

    /// Apply the result of the submission started by `ticket`.
    ///
    /// On success the field is cleared and `["tweets"]` is invalidated so
    /// every timeline refetches.
    pub fn settle<T>(
        &mut self,
        ticket: SubmitTicket,
        result: std::result::Result<Post, String>,
        cache: &mut QueryCache<T>,
    ) -> SubmitOutcome {
        let current = self.is_submitting() && ticket.id == self.next_ticket;

        match result {
            Ok(post) => {
                // The server state changed either way
                let invalidated = cache.invalidate(&QueryKey::tweets());
                if !current {
                    return SubmitOutcome::Stale;
                }
                self.content.clear();
                self.status = ComposerStatus::Idle;
                tracing::info!(id = %post.id, "chirp posted");
                SubmitOutcome::Posted { post, invalidated }
            }
            Err(_) if !current => SubmitOutcome::Stale,
            Err(message) => {
                tracing::warn!("chirp failed: {}", message);
                self.status = ComposerStatus::Failed {
                    message: message.clone(),
                };
                SubmitOutcome::Failed { message }
            }
        }
    }

    fn clear_error(&mut self) {
        if matches!(self.status, ComposerStatus::Failed { .. }) {
            self.status = ComposerStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(content: &str) -> Post {
        Post {
            id: Uuid::new_v4(),
            content: content.to_string(),
            author_id: None,
            author: None,
            created_at: Utc::now(),
            likes_count: 0,
        }
    }

    #[test]
    fn test_can_submit_requires_non_blank_content() {
        let mut composer = Composer::new();
        assert!(!composer.can_submit());

        for blank in ["", " ", "\n\t  "] {
            composer.set_content(blank);
            assert!(!composer.can_submit(), "{:?} should not be submittable", blank);
        }

        composer.set_content("  hi ");
        assert!(composer.can_submit());
    }

    #[test]
    fn test_counter_clamps_at_zero() {
        let mut composer = Composer::new();
        assert_eq!(composer.remaining(), 280);

        composer.set_content("hello");
        assert_eq!(composer.remaining(), 275);

        composer.set_content(&"a".repeat(280));
        assert_eq!(composer.remaining(), 0);

        composer.set_content(&"a".repeat(300));
        assert_eq!(composer.content().chars().count(), 280);
        assert_eq!(composer.remaining(), 0);
        assert!(!composer.insert_char('b'));
    }

    #[test]
    fn test_counter_counts_chars_not_bytes() {
        let mut composer = Composer::new();
        composer.set_content("🐦🐦");
        assert_eq!(composer.remaining(), 278);
        composer.backspace();
        assert_eq!(composer.content(), "🐦");
    }

    #[test]
    fn test_begin_submit_rejects_blank_and_double_submit() {
        let mut composer = Composer::new();
        assert!(matches!(
            composer.begin_submit(),
            Err(Error::Content(chipchip_types::Error::EmptyContent))
        ));

        composer.set_content(" hello ");
        let ticket = composer.begin_submit().unwrap();
        assert_eq!(ticket.content(), " hello ");
        assert!(!composer.can_submit());
        assert!(matches!(
            composer.begin_submit(),
            Err(Error::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_success_clears_and_invalidates() {
        let mut cache: QueryCache<u8> = QueryCache::new();
        let seed = cache.begin_fetch(&QueryKey::tweets()).unwrap();
        cache.settle(seed, Ok(0));

        let mut composer = Composer::new();
        composer.set_content("hello");
        let ticket = composer.begin_submit().unwrap();
        let outcome = composer.settle(ticket, Ok(post("hello")), &mut cache);

        assert!(matches!(
            outcome,
            SubmitOutcome::Posted { ref invalidated, .. } if invalidated == &vec![QueryKey::tweets()]
        ));
        assert_eq!(composer.content(), "");
        assert_eq!(composer.status(), &ComposerStatus::Idle);
        assert!(cache.needs_fetch(&QueryKey::tweets()));
    }

    #[test]
    fn test_failure_keeps_content() {
        let mut cache: QueryCache<u8> = QueryCache::new();
        let mut composer = Composer::new();
        composer.set_content("keep me");
        let ticket = composer.begin_submit().unwrap();

        let outcome = composer.settle(ticket, Err("HTTP 500: boom".to_string()), &mut cache);
        assert_eq!(
            outcome,
            SubmitOutcome::Failed {
                message: "HTTP 500: boom".to_string()
            }
        );
        assert_eq!(composer.content(), "keep me");
        assert_eq!(composer.error(), Some("HTTP 500: boom"));
        assert!(composer.can_submit());

        // Editing dismisses the error
        composer.insert_char('!');
        assert_eq!(composer.status(), &ComposerStatus::Idle);
    }

    #[test]
    fn test_foreign_ticket_is_stale() {
        let mut cache: QueryCache<u8> = QueryCache::new();
        let mut a = Composer::new();
        a.set_content("a");
        let ticket_a = a.begin_submit().unwrap();

        let mut other = Composer::new();
        assert_eq!(
            other.settle(ticket_a, Err("x".to_string()), &mut cache),
            SubmitOutcome::Stale
        );
        assert_eq!(other.status(), &ComposerStatus::Idle);
    }
}
