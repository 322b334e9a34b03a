//! Testing infrastructure for chipchip tests.
//!
//! - `TestWorld`: isolated data directory and CLI runner
//! - `fixtures`: sample users, chirps and wire payloads
//! - `flaky`: a `ChirpApi` wrapper that fails on demand
//! - `assertions`: checks against `--format json` output

pub mod assertions;
pub mod fixtures;
pub mod flaky;
pub mod world;

pub use flaky::{FlakyApi, Operation};
pub use world::TestWorld;
