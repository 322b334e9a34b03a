use std::sync::Arc;

use chipchip_client::{ChirpApi, HttpApi, HttpApiOptions, MemoryApi};

use crate::{Config, Result};

/// Build the backend described by `config`.
///
/// `demo` swaps the HTTP client for a seeded in-memory backend.
pub fn connect(config: &Config, demo: bool) -> Result<Arc<dyn ChirpApi>> {
    if demo {
        tracing::info!("using in-memory demo backend");
        return Ok(Arc::new(MemoryApi::seeded()));
    }

    config.validate()?;
    let options = HttpApiOptions::new(config.api_url.clone())
        .with_token(config.token.clone())
        .with_timeout(config.request_timeout());
    let api = HttpApi::new(options)?;
    tracing::info!(url = api.base_url(), signed_in = config.token.is_some(), "connected");
    Ok(Arc::new(api))
}
