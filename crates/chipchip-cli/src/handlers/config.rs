use anyhow::Result;
use chipchip_runtime::Config;

use super::HandlerContext;
use crate::context::ExecutionContext;
use crate::presentation::presenters;

pub fn handle_show(ctx: &ExecutionContext, handler: &HandlerContext) -> Result<()> {
    let config = ctx.config()?;
    handler.render(presenters::present_config(&ctx.config_path(), config))
}

/// Values to write into `config.toml`. `None` leaves a field alone.
#[derive(Debug, Default)]
pub struct ConfigChanges {
    pub api_url: Option<String>,
    pub token: Option<String>,
    pub clear_token: bool,
    pub timeout: Option<u64>,
    pub page_limit: Option<usize>,
}

impl ConfigChanges {
    fn is_empty(&self) -> bool {
        self.api_url.is_none()
            && self.token.is_none()
            && !self.clear_token
            && self.timeout.is_none()
            && self.page_limit.is_none()
    }

    fn apply(self, mut config: Config) -> Config {
        if let Some(url) = self.api_url {
            config.api_url = url;
        }
        if let Some(token) = self.token {
            config.token = Some(token);
        }
        if self.clear_token {
            config.token = None;
        }
        if let Some(timeout) = self.timeout {
            config.request_timeout_secs = timeout;
        }
        if let Some(limit) = self.page_limit {
            config.page_limit = limit;
        }
        config
    }
}

pub fn handle_set(
    ctx: &ExecutionContext,
    handler: &HandlerContext,
    changes: ConfigChanges,
) -> Result<()> {
    if changes.is_empty() {
        anyhow::bail!(
            "Nothing to change. Pass at least one of --api-url, --token, --clear-token, --timeout, --page-limit"
        );
    }

    // The file is edited as stored; environment overrides are not written back
    let path = ctx.config_path();
    let config = changes.apply(Config::load_from(&path)?);
    config.validate()?;
    config.save_to(&path)?;
    tracing::info!(path = %path.display(), "config saved");

    handler.render(presenters::present_config_saved(&path, &config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_changes_apply_only_given_fields() {
        let changes = ConfigChanges {
            timeout: Some(5),
            ..ConfigChanges::default()
        };
        let config = changes.apply(Config {
            token: Some("keep".to_string()),
            ..Config::default()
        });

        assert_eq!(config.request_timeout_secs, 5);
        assert_eq!(config.token.as_deref(), Some("keep"));
        assert_eq!(config.page_limit, 100);
    }

    #[test]
    fn test_clear_token() {
        let changes = ConfigChanges {
            clear_token: true,
            ..ConfigChanges::default()
        };
        assert!(!changes.is_empty());

        let config = changes.apply(Config {
            token: Some("old".to_string()),
            ..Config::default()
        });
        assert!(config.token.is_none());
    }
}
