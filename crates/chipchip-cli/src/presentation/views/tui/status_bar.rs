use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::StatusBarViewModel;

use super::status_level_to_color;

pub struct StatusBarView<'a> {
    model: &'a StatusBarViewModel,
}

impl<'a> StatusBarView<'a> {
    pub fn new(model: &'a StatusBarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).split(inner);

        let color = status_level_to_color(self.model.level);
        let status = Line::from(vec![
            Span::styled(
                format!("[{}] ", self.model.backend),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(
                self.model.message.as_deref().unwrap_or(""),
                Style::default().fg(color),
            ),
        ]);
        Paragraph::new(status).render(chunks[0], buf);

        let mut hints = Vec::new();
        for (key, label) in &self.model.key_hints {
            hints.push(Span::styled(
                format!("[{}]", key),
                Style::default().fg(Color::Yellow),
            ));
            hints.push(Span::raw(format!("{} ", label)));
        }
        Paragraph::new(Line::from(hints))
            .alignment(ratatui::layout::Alignment::Right)
            .render(chunks[1], buf);
    }
}
