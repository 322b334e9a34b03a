use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Public projection of a ChipChip account.
///
/// Used both for chirp authors and for the signed-in user returned by
/// `GET /users/me`. Only `full_name` and `email` are ever displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub full_name: Option<String>,

    #[serde(default)]
    pub is_active: bool,

    #[serde(default)]
    pub is_superuser: bool,
}

/// The author attached to a chirp.
pub type Author = UserProfile;

/// The signed-in user, as reported by the auth collaborator.
pub type CurrentUser = UserProfile;

impl UserProfile {
    pub fn new(full_name: Option<&str>, email: Option<&str>) -> Self {
        Self {
            id: None,
            email: email.map(str::to_string),
            full_name: full_name.map(str::to_string),
            is_active: true,
            is_superuser: false,
        }
    }

    /// `full_name`, then `email`. Empty strings count as missing.
    pub fn display_name(&self) -> Option<&str> {
        non_empty(self.full_name.as_deref()).or_else(|| non_empty(self.email.as_deref()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_prefers_full_name() {
        let user = UserProfile::new(Some("Ada Lovelace"), Some("ada@example.com"));
        assert_eq!(user.display_name(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserProfile::new(None, Some("ada@example.com"));
        assert_eq!(user.display_name(), Some("ada@example.com"));

        let blank = UserProfile::new(Some(""), Some("ada@example.com"));
        assert_eq!(blank.display_name(), Some("ada@example.com"));
    }

    #[test]
    fn test_display_name_none_when_both_missing() {
        let user = UserProfile::new(Some(""), None);
        assert_eq!(user.display_name(), None);
    }

    #[test]
    fn test_deserialize_partial_profile() {
        let user: UserProfile = serde_json::from_str(r#"{"email":"x@y.z"}"#).unwrap();
        assert_eq!(user.email.as_deref(), Some("x@y.z"));
        assert!(user.full_name.is_none());
        assert!(!user.is_superuser);
    }
}
