//! Rules for chirp text.
//!
//! Lengths are counted in `char`s, not bytes.

use crate::{Error, Result};

/// Maximum length of a chirp.
pub const MAX_CHIRP_CHARS: usize = 280;

pub fn char_len(content: &str) -> usize {
    content.chars().count()
}

/// True when the content has something other than whitespace.
pub fn is_submittable(content: &str) -> bool {
    !content.trim().is_empty()
}

/// Characters left before the limit. Never negative.
pub fn remaining_chars(content: &str) -> usize {
    MAX_CHIRP_CHARS.saturating_sub(char_len(content))
}

/// Cut input down to the limit, the way a bounded text field accepts it.
pub fn truncate_to_limit(content: &str) -> String {
    content.chars().take(MAX_CHIRP_CHARS).collect()
}

/// Validate content before it is sent. The content itself is not altered.
pub fn validate_content(content: &str) -> Result<()> {
    if !is_submittable(content) {
        return Err(Error::EmptyContent);
    }

    let len = char_len(content);
    if len > MAX_CHIRP_CHARS {
        return Err(Error::ContentTooLong {
            len,
            max: MAX_CHIRP_CHARS,
        });
    }

    Ok(())
}
