mod common;

use anyhow::Result;
use chipchip_testing::TestWorld;

#[test]
fn test_config_set_then_show() -> Result<()> {
    let world = TestWorld::new();

    let result = world.run(&["config", "set", "--token", "abcdefgh1234", "--timeout", "5"])?;
    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(result.stdout().contains("Configuration saved"));

    let stored = std::fs::read_to_string(world.config_path())?;
    assert!(stored.contains("token = \"abcdefgh1234\""));
    assert!(stored.contains("request_timeout_secs = 5"));

    let (result, json) = world.run_json(&["config", "show"])?;
    assert!(result.success());
    assert_eq!(json["content"]["token"], "****1234");
    assert_eq!(json["content"]["request_timeout_secs"], 5);
    assert_eq!(json["content"]["page_limit"], 100);
    assert!(!result.stdout().contains("abcdefgh1234"));
    Ok(())
}

#[test]
fn test_clear_token() -> Result<()> {
    let world = TestWorld::new().with_config("token = \"secret\"\n");

    let result = world.run(&["config", "set", "--clear-token"])?;
    assert!(result.success());

    let (_, json) = world.run_json(&["config", "show"])?;
    assert!(json["content"].get("token").is_none());
    assert_eq!(json["badge"]["label"], "No API token configured");
    Ok(())
}

#[test]
fn test_config_set_requires_a_change() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["config", "set"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("Nothing to change"));
    Ok(())
}

#[test]
fn test_invalid_api_url_is_not_saved() -> Result<()> {
    let world = TestWorld::new();
    let result = world.run(&["config", "set", "--api-url", "ftp://example.com"])?;

    assert!(!result.success());
    assert!(result.stderr().contains("api_url must start with http:// or https://"));
    assert!(!world.config_path().exists());
    Ok(())
}

#[test]
fn test_environment_overrides_file() -> Result<()> {
    let world = TestWorld::new()
        .with_config("api_url = \"http://file.example/api/v1\"\n")
        .with_env("CHIPCHIP_API_URL", "https://env.example/api/v1");

    let (_, json) = world.run_json(&["config", "show"])?;
    assert_eq!(json["content"]["api_url"], "https://env.example/api/v1");

    let (_, json) = world.run_json(&["--api-url", "https://flag.example/api/v1", "config", "show"])?;
    assert_eq!(json["content"]["api_url"], "https://flag.example/api/v1");
    Ok(())
}

#[test]
fn test_malformed_config_is_reported() -> Result<()> {
    let world = TestWorld::new().with_config("page_limit = \"lots\"\n");
    let result = world.run(&["config", "show"])?;

    assert!(!result.success());
    assert!(result.stderr().starts_with("Error:"));
    Ok(())
}
