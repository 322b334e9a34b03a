//! Chirp composition and timeline synchronization.
//!
//! [`Composer`] and [`Feed`] never reference each other. They meet in the
//! [`QueryCache`](crate::QueryCache): a successful submission invalidates the
//! `["tweets"]` prefix and every feed under it refetches.

mod composer;
mod feed;

pub use composer::{Composer, ComposerStatus, SubmitOutcome, SubmitTicket};
pub use feed::{Feed, FeedKind, FeedState, PLACEHOLDER_COUNT};
