use serde::Serialize;

use super::StatusLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TuiPage {
    Dashboard,
    Timeline,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    pub page: TuiPage,
    pub backend: String,
    pub key_hints: Vec<(String, String)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub level: StatusLevel,
}
