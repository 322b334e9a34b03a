use std::fmt;

use super::{NavbarView, style};
use crate::presentation::view_models::{CreateView, DashboardViewModel, ViewMode};

impl CreateView for DashboardViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(DashboardView::new(self, mode))
    }
}

pub struct DashboardView<'a> {
    data: &'a DashboardViewModel,
    mode: ViewMode,
}

impl<'a> DashboardView<'a> {
    pub fn new(data: &'a DashboardViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    pub fn greeting(data: &DashboardViewModel) -> String {
        match data.user_name.as_deref() {
            Some(name) => format!("Hi, {} 👋🏼", name),
            None => "Hi 👋🏼".to_string(),
        }
    }
}

pub const WELCOME: &str = "Welcome to ChipChip! Your simple social platform.";
pub const CALL_TO_ACTION: &str = "Ready to start chirping?";

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", Self::greeting(self.data));
        }

        write!(f, "{}", NavbarView::new(&self.data.navbar))?;
        writeln!(f)?;
        writeln!(f, "{}", style::bold(&Self::greeting(self.data)))?;
        writeln!(f, "{}", WELCOME)?;
        writeln!(f)?;
        writeln!(f, "{}", CALL_TO_ACTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::build_dashboard;
    use chipchip_testing::fixtures;

    #[test]
    fn test_dashboard_text() {
        let vm = build_dashboard(Some(&fixtures::alice()));
        let text = DashboardView::new(&vm, ViewMode::Standard).to_string();

        insta::assert_snapshot!(text, @r"
        ChipChip 🐦  Alice Lark
        ────────────────────────────────────────

        Hi, Alice Lark 👋🏼
        Welcome to ChipChip! Your simple social platform.

        Ready to start chirping?
        ");
    }

    #[test]
    fn test_greeting_without_name() {
        let vm = build_dashboard(None);
        assert_eq!(DashboardView::greeting(&vm), "Hi 👋🏼");
    }
}
