pub mod composer;
pub mod dashboard;
pub mod feed;

pub use composer::{ComposerAction, ComposerComponent};
pub use dashboard::{DashboardAction, DashboardComponent};
pub use feed::{FeedAction, FeedComponent};
