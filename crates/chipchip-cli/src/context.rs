use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use chipchip_client::ChirpApi;
use chipchip_runtime::{ChipChip, Config, connect};
use once_cell::sync::OnceCell;

/// Lazily built pieces shared by the handlers of one invocation.
pub struct ExecutionContext {
    data_dir: PathBuf,
    api_url_override: Option<String>,
    demo: bool,
    config: OnceCell<Config>,
    api: OnceCell<Arc<dyn ChirpApi>>,
}

impl ExecutionContext {
    pub fn new(data_dir: PathBuf, api_url_override: Option<String>, demo: bool) -> Self {
        Self {
            data_dir,
            api_url_override,
            demo,
            config: OnceCell::new(),
            api: OnceCell::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn config_path(&self) -> PathBuf {
        Config::path_in(&self.data_dir)
    }

    /// Config file, then `CHIPCHIP_*` variables, then `--api-url`.
    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| {
            let mut config = Config::load_from(&self.config_path())?.apply_env();
            if let Some(url) = &self.api_url_override {
                config.api_url = url.clone();
            }
            Ok(config)
        })
    }

    pub fn api(&self) -> Result<&Arc<dyn ChirpApi>> {
        self.api.get_or_try_init(|| {
            let config = self.config()?;
            Ok(connect(config, self.demo)?)
        })
    }

    /// Fresh client context over the shared API.
    pub fn client(&self) -> Result<ChipChip> {
        Ok(ChipChip::new(self.api()?.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_config_uses_defaults() -> Result<()> {
        let dir = TempDir::new()?;
        let ctx = ExecutionContext::new(dir.path().to_path_buf(), None, false);
        assert_eq!(ctx.config()?.page_limit, 100);
        assert_eq!(ctx.config_path(), dir.path().join("config.toml"));
        Ok(())
    }

    #[test]
    fn test_api_url_flag_overrides_file() -> Result<()> {
        let dir = TempDir::new()?;
        std::fs::write(
            dir.path().join("config.toml"),
            "api_url = \"http://file:8000/api/v1\"\n",
        )?;

        let ctx = ExecutionContext::new(
            dir.path().to_path_buf(),
            Some("https://flag.example/api/v1".to_string()),
            false,
        );
        assert_eq!(ctx.config()?.api_url, "https://flag.example/api/v1");
        Ok(())
    }

    #[test]
    fn test_demo_uses_memory_backend() -> Result<()> {
        let dir = TempDir::new()?;
        let ctx = ExecutionContext::new(dir.path().to_path_buf(), None, true);
        assert_eq!(ctx.api()?.id(), "memory");
        Ok(())
    }
}
