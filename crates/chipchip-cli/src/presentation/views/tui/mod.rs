//! Ratatui widgets and the stateful components that drive them.
//!
//! Widgets borrow a view model and draw it; they hold no state and make no
//! decisions. Components own selection and focus, turn key presses into
//! actions, and clamp their indices against the data before drawing.

pub mod components;
pub mod composer;
pub mod dashboard;
pub mod feed;
pub mod navbar;
pub mod status_bar;

pub use components::{ComposerComponent, DashboardComponent, FeedComponent};
pub use composer::ComposerView;
pub use dashboard::DashboardView;
pub use feed::FeedView;
pub use navbar::NavbarView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::common::StatusLevel;
use ratatui::style::Color;

pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
