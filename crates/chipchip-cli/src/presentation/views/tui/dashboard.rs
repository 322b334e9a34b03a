use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::presentation::view_models::DashboardViewModel;
use crate::presentation::views::dashboard::{CALL_TO_ACTION, DashboardView as TextDashboard, WELCOME};

pub struct DashboardView<'a> {
    model: &'a DashboardViewModel,
}

impl<'a> DashboardView<'a> {
    pub fn new(model: &'a DashboardViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for DashboardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                TextDashboard::greeting(self.model),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(WELCOME),
            Line::from(""),
            Line::from(CALL_TO_ACTION),
            Line::from(""),
            Line::from(vec![
                Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
                Span::raw(" Go to Timeline"),
            ]),
        ];

        if !self.model.signed_in {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "No API token configured. Run `chipchip config set --token <TOKEN>`.",
                Style::default().fg(Color::Yellow),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
