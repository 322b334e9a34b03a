pub mod app;
pub mod backend;
pub mod config;
pub mod error;
mod ops;
pub mod query;
pub mod timeline;
pub mod worker;

pub use app::{ChipChip, Update};
pub use backend::connect;
pub use config::{Config, resolve_workspace_path};
pub use error::{Error, Result};
pub use query::{FetchTicket, QueryCache, QueryKey, QuerySnapshot, Settled};
pub use timeline::{
    Composer, ComposerStatus, Feed, FeedKind, FeedState, SubmitOutcome, SubmitTicket,
};
pub use worker::{ApiRequest, ApiResponse, ApiWorker, execute_request};
