//! Client-side query cache.
//!
//! Entries are addressed by a [`QueryKey`] (a list of path-like segments) and
//! invalidated by key prefix. Each entry carries a generation counter; a fetch
//! records the generation it started at and its result is only applied if no
//! invalidation happened in between.

mod cache;
mod key;

pub use cache::{FetchTicket, QueryCache, QuerySnapshot, Settled};
pub use key::QueryKey;
