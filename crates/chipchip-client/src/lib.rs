// Error types
pub mod error;

// Port implemented by every backend
pub mod traits;

// Backends
pub mod http;
pub mod memory;

pub use error::{Error, Result};
pub use http::{HttpApi, HttpApiOptions};
pub use memory::MemoryApi;
pub use traits::ChirpApi;
