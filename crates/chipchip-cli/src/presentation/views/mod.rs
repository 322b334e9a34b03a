mod config;
pub mod dashboard;
mod navbar;
pub mod style;
mod timeline;
pub mod tui;
mod user;

pub use config::ConfigView;
pub use dashboard::DashboardView;
pub use navbar::NavbarView;
pub use timeline::{ComposerView, FeedView, PostCardView, TimelineView};
pub use user::UserView;
