use std::path::Path;

use chipchip_runtime::Config;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, StatusBadge,
};

fn build_config(path: &Path, config: &Config) -> ConfigViewModel {
    ConfigViewModel {
        path: path.display().to_string(),
        api_url: config.api_url.clone(),
        token: config.masked_token(),
        request_timeout_secs: config.request_timeout_secs,
        page_limit: config.page_limit,
    }
}

pub fn present_config(path: &Path, config: &Config) -> CommandResultViewModel<ConfigViewModel> {
    let content = build_config(path, config);
    let mut result = CommandResultViewModel::new(content);

    if result.content.token.is_none() {
        result = result
            .with_badge(StatusBadge::warning("No API token configured"))
            .with_suggestion(
                Guidance::new("Store an API token").with_command(cmd::CONFIG_SET_TOKEN),
            );
    }
    if result.content.api_url == Config::default().api_url {
        result = result.with_suggestion(
            Guidance::new("Point at another server").with_command(cmd::CONFIG_SET_API_URL),
        );
    }
    result
}

pub fn present_config_saved(
    path: &Path,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    CommandResultViewModel::new(build_config(path, config))
        .with_badge(StatusBadge::success("Configuration saved"))
        .with_suggestion(Guidance::new("Check who you are").with_command(cmd::WHOAMI))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_masked() {
        let config = Config {
            token: Some("secret-token-1234".to_string()),
            ..Config::default()
        };
        let result = present_config(Path::new("/tmp/config.toml"), &config);
        assert_eq!(result.content.token.as_deref(), Some("****1234"));
        assert!(result.badge.is_none());
    }

    #[test]
    fn test_default_server_suggests_api_url() {
        let config = Config {
            token: Some("secret-token-1234".to_string()),
            ..Config::default()
        };
        let result = present_config(Path::new("/tmp/config.toml"), &config);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some(cmd::CONFIG_SET_API_URL)
        );

        let custom = Config {
            api_url: "http://localhost:9000".to_string(),
            ..config
        };
        let result = present_config(Path::new("/tmp/config.toml"), &custom);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_missing_token_warns() {
        let result = present_config(Path::new("/tmp/config.toml"), &Config::default());
        assert!(result.content.token.is_none());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some(cmd::CONFIG_SET_TOKEN)
        );
    }
}
