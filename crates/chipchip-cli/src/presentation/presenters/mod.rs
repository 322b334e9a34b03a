pub mod config;
pub mod dashboard;
pub mod navbar;
pub mod timeline;
pub mod user;

pub use config::{present_config, present_config_saved};
pub use dashboard::{build_dashboard, present_dashboard};
pub use navbar::present_navbar;
pub use timeline::{
    build_timeline, present_card, present_chirp_deleted, present_chirp_edited, present_chirp_posted, present_composer,
    present_feed, present_pending_card, present_post, present_timeline,
};
pub use user::present_user;
