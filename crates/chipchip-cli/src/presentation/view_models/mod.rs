pub mod common;
mod config;
mod dashboard;
pub mod navbar;
mod result;
mod timeline;
mod tui;
mod user;

use std::fmt;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use config::ConfigViewModel;
pub use dashboard::DashboardViewModel;
pub use navbar::NavbarViewModel;
pub use result::CommandResultViewModel;
pub use timeline::{ComposerViewModel, FeedViewModel, PostCardViewModel, TimelineViewModel};
pub use tui::{StatusBarViewModel, TuiPage};
pub use user::UserViewModel;

/// Build the text view of a view model for the given density.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
