use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::DashboardViewModel;
use crate::presentation::views::tui::DashboardView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardAction {
    OpenTimeline,
}

#[derive(Default)]
pub struct DashboardComponent;

impl DashboardComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DashboardAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::Char('t') => Some(DashboardAction::OpenTimeline),
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &DashboardViewModel) {
        f.render_widget(DashboardView::new(data), area);
    }
}
