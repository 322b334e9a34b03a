use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Author;

/// Label rendered when a chirp has no usable author name.
pub const UNKNOWN_AUTHOR: &str = "Unknown User";

/// A single chirp as returned by the remote API (`TweetPublic` on the wire).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,

    pub content: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<Uuid>,

    #[serde(default)]
    pub author: Option<Author>,

    #[serde(deserialize_with = "crate::util::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,

    /// Display-only; the client never mutates it.
    #[serde(default, deserialize_with = "crate::util::deserialize_null_default")]
    pub likes_count: u64,
}

impl Post {
    /// `full_name` -> `email` -> "Unknown User"
    pub fn author_name(&self) -> &str {
        self.author
            .as_ref()
            .and_then(|a| a.display_name())
            .unwrap_or(UNKNOWN_AUTHOR)
    }
}

/// One page of chirps (`TweetsPublic` on the wire).
///
/// `count` is the server-side total, which may exceed `data.len()` when the
/// request was limited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub data: Vec<Post>,
    #[serde(default)]
    pub count: usize,
}

impl PostPage {
    pub fn new(data: Vec<Post>) -> Self {
        let count = data.len();
        Self { data, count }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

/// Request body for creating a chirp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub content: String,
}

/// Request body for editing a chirp. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Offset pagination accepted by the list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListParams {
    pub skip: usize,
    pub limit: usize,
}

impl ListParams {
    pub const DEFAULT_LIMIT: usize = 100;

    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: Self::DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UserProfile;

    fn post_with_author(author: Option<Author>) -> Post {
        Post {
            id: Uuid::new_v4(),
            content: "hi".to_string(),
            author_id: None,
            author,
            created_at: Utc::now(),
            likes_count: 0,
        }
    }

    #[test]
    fn test_author_name_fallback_chain() {
        let named = post_with_author(Some(UserProfile::new(Some("Grace"), Some("g@x.io"))));
        assert_eq!(named.author_name(), "Grace");

        let email_only = post_with_author(Some(UserProfile::new(None, Some("g@x.io"))));
        assert_eq!(email_only.author_name(), "g@x.io");

        let anonymous = post_with_author(Some(UserProfile::new(Some(""), Some(""))));
        assert_eq!(anonymous.author_name(), UNKNOWN_AUTHOR);

        let missing = post_with_author(None);
        assert_eq!(missing.author_name(), UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_decode_wire_page() {
        let body = r#"{
            "data": [
                {
                    "id": "5f0c6b1e-8d59-4b55-9a59-7b0b6b0b2f11",
                    "content": "first!",
                    "author_id": "0a4b1c2d-3e4f-4a5b-8c6d-7e8f9a0b1c2d",
                    "author": {"email": "a@b.c", "full_name": null, "is_active": true},
                    "created_at": "2025-03-01T10:15:30.123456",
                    "likes_count": null
                }
            ],
            "count": 7
        }"#;

        let page: PostPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page.count, 7);
        assert_eq!(page.data[0].likes_count, 0);
        assert_eq!(page.data[0].author_name(), "a@b.c");
    }

    #[test]
    fn test_default_list_params_match_server() {
        let params = ListParams::default();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 100);
    }

    #[test]
    fn test_post_update_omits_unset_fields() {
        let empty = serde_json::to_string(&PostUpdate::default()).unwrap();
        assert_eq!(empty, "{}");

        let edit = PostUpdate {
            content: Some("fixed".to_string()),
        };
        assert_eq!(serde_json::to_string(&edit).unwrap(), r#"{"content":"fixed"}"#);
    }
}
