use serde::Serialize;

pub const BRAND: &str = "ChipChip 🐦";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavbarViewModel {
    pub brand: String,
    /// Display name of the signed-in user, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}
