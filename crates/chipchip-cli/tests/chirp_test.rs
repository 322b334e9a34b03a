mod common;

use anyhow::Result;
use chipchip_testing::{TestWorld, assertions};
use common::{demo_cmd, long_chirp};
use predicates::prelude::*;

#[test]
fn test_chirp_shows_new_chirp_first() -> Result<()> {
    let world = TestWorld::new();
    let (result, json) = world.run_json(&["--demo", "chirp", "Hello world"])?;

    assert!(result.success(), "stderr: {}", result.stderr());
    assertions::assert_feed_state(&json, "populated")?;
    assertions::assert_card_count(&json, 4)?;
    assertions::assert_leading_contents(&json, &["Hello world"])?;

    let first = &json["content"]["feed"]["cards"][0];
    assert_eq!(first["author_name"], "Demo User");
    assert_eq!(first["likes_count"], 0);
    assert_eq!(first["own"], true);
    assert!(json["content"].get("pending").is_none());
    assert!(
        json["badge"]["label"]
            .as_str()
            .unwrap()
            .starts_with("Chirp posted")
    );
    Ok(())
}

#[test]
fn test_chirp_keeps_surrounding_whitespace() -> Result<()> {
    let world = TestWorld::new();
    let (_, json) = world.run_json(&["--demo", "chirp", "  spaced  "])?;

    assertions::assert_leading_contents(&json, &["  spaced  "])?;
    Ok(())
}

#[test]
fn test_empty_chirp_is_rejected() {
    let world = TestWorld::new();
    demo_cmd(&world)
        .args(["chirp", "   "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Nothing to chirp"));
}

#[test]
fn test_chirp_at_limit_is_accepted() -> Result<()> {
    let world = TestWorld::new();
    let content = long_chirp(280);
    let (result, json) = world.run_json(&["--demo", "chirp", &content])?;

    assert!(result.success());
    assertions::assert_leading_contents(&json, &[content.as_str()])?;
    Ok(())
}

#[test]
fn test_over_length_chirp_is_rejected() {
    let world = TestWorld::new();
    demo_cmd(&world)
        .arg("chirp")
        .arg(long_chirp(281))
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Chirp is too long: 281 characters (max 280)",
        ));
}

#[test]
fn test_show_unknown_chirp() {
    let world = TestWorld::new();
    let id = uuid::Uuid::new_v4();
    demo_cmd(&world)
        .arg("show")
        .arg(id.to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("Chirp not found: {}", id)));
}

#[test]
fn test_delete_unknown_chirp() {
    let world = TestWorld::new();
    demo_cmd(&world)
        .arg("delete")
        .arg(uuid::Uuid::new_v4().to_string())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chirp not found"));
}

#[test]
fn test_show_rejects_malformed_id() {
    let world = TestWorld::new();
    demo_cmd(&world)
        .args(["show", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_edit_unknown_chirp() {
    let world = TestWorld::new();
    let id = uuid::Uuid::new_v4();
    demo_cmd(&world)
        .args(["edit", &id.to_string(), "fixed typo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("Chirp not found: {}", id)));
}

#[test]
fn test_empty_edit_is_rejected_before_lookup() {
    let world = TestWorld::new();
    demo_cmd(&world)
        .args(["edit", &uuid::Uuid::new_v4().to_string(), "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to chirp"));
}

#[test]
fn test_over_length_edit_is_rejected() {
    let world = TestWorld::new();
    demo_cmd(&world)
        .arg("edit")
        .arg(uuid::Uuid::new_v4().to_string())
        .arg(long_chirp(281))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Chirp is too long"));
}
