//! Sample data.

use chipchip_types::{Author, Post, UserProfile};
use chrono::{Duration, TimeZone, Utc};
use uuid::Uuid;

/// A user with a fresh id.
pub fn user(full_name: Option<&str>, email: Option<&str>) -> UserProfile {
    let mut user = UserProfile::new(full_name, email);
    user.id = Some(Uuid::new_v4());
    user
}

pub fn alice() -> UserProfile {
    user(Some("Alice Lark"), Some("alice@chipchip.dev"))
}

/// Chirp without an author, created at a fixed instant.
pub fn post(content: &str) -> Post {
    Post {
        id: Uuid::new_v4(),
        content: content.to_string(),
        author_id: None,
        author: None,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        likes_count: 0,
    }
}

pub fn post_by(content: &str, author: &Author) -> Post {
    Post {
        author_id: author.id,
        author: Some(author.clone()),
        ..post(content)
    }
}

/// `n` chirps, newest first, one minute apart.
pub fn posts(n: usize) -> Vec<Post> {
    let base = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    (0..n)
        .map(|i| Post {
            created_at: base - Duration::minutes(i as i64),
            likes_count: i as u64,
            ..post(&format!("chirp {}", n - i))
        })
        .collect()
}

/// List response as the server sends it: naive timestamp, null likes,
/// an author without a name.
pub const SAMPLE_PAGE_JSON: &str = r#"{
  "data": [
    {
      "id": "6f1c0e59-8a3e-4a55-9b43-2f1f1d3c0a11",
      "content": "Hello, ChipChip",
      "author_id": "0b7e0d4a-3f7a-4c1e-8a59-1c2b3d4e5f60",
      "author": {
        "id": "0b7e0d4a-3f7a-4c1e-8a59-1c2b3d4e5f60",
        "email": "wren@chipchip.dev",
        "full_name": null,
        "is_active": true,
        "is_superuser": false
      },
      "created_at": "2024-05-01T12:30:00.123456",
      "likes_count": null
    }
  ],
  "count": 1
}"#;
