//! Isolated CLI environment.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::Path;
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use chipchip_testing::TestWorld;
///
/// let world = TestWorld::new();
/// let result = world.run(&["--demo", "timeline"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        std::fs::create_dir_all(temp_dir.path().join(".chipchip"))
            .expect("Failed to create data dir");

        Self {
            temp_dir,
            env_vars: HashMap::new(),
        }
    }

    /// Data directory passed as `--data-dir`.
    pub fn data_dir(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".chipchip")
    }

    pub fn config_path(&self) -> std::path::PathBuf {
        self.data_dir().join("config.toml")
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write `config.toml` into the data directory.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
        self
    }

    /// Point a command at this environment.
    ///
    /// Credentials and paths from the caller's environment are cleared so
    /// tests never reach a real server by accident.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--data-dir").arg(self.data_dir());
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("CHIPCHIP_PATH")
            .env_remove("CHIPCHIP_API_URL")
            .env_remove("CHIPCHIP_TOKEN")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("chipchip")
            .map_err(|e| anyhow::anyhow!("Failed to find chipchip binary: {}", e))?;
        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    /// Run with `--format json` and parse stdout.
    pub fn run_json(&self, args: &[&str]) -> Result<(CliResult, serde_json::Value)> {
        let mut full = vec!["--format", "json"];
        full.extend_from_slice(args);
        let result = self.run(&full)?;
        let json = result.json()?;
        Ok((result, json))
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
