//! Assertions over `--format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

fn cards(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["feed"]["cards"]
        .as_array()
        .context("Expected 'content.feed.cards' array in JSON")
}

/// Assert the feed state tag (`loading`, `empty`, `populated`, `failed`).
pub fn assert_feed_state(json: &Value, expected: &str) -> Result<()> {
    let state = json["content"]["feed"]["state"]
        .as_str()
        .context("Expected 'content.feed.state' in JSON")?;

    if state != expected {
        anyhow::bail!("Expected feed state {}, got {}", expected, state);
    }
    Ok(())
}

pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = cards(json)?;
    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }
    Ok(())
}

/// Assert that the first cards carry `expected` contents, in order.
pub fn assert_leading_contents(json: &Value, expected: &[&str]) -> Result<()> {
    let contents: Vec<&str> = cards(json)?
        .iter()
        .filter_map(|c| c["content"].as_str())
        .collect();

    if contents.len() < expected.len() || &contents[..expected.len()] != expected {
        anyhow::bail!("Expected cards to start with {:?}, got {:?}", expected, contents);
    }
    Ok(())
}
