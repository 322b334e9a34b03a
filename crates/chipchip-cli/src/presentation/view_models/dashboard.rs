use serde::Serialize;

use super::NavbarViewModel;

#[derive(Debug, Clone, Serialize)]
pub struct DashboardViewModel {
    pub navbar: NavbarViewModel,
    pub signed_in: bool,
    /// Greeting name; falls back to the email when there is no full name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}
