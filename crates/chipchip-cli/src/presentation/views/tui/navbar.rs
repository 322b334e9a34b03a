use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::view_models::NavbarViewModel;

/// Terminals narrower than this get no navbar.
pub const MIN_NAVBAR_WIDTH: u16 = 60;

pub struct NavbarView<'a> {
    model: &'a NavbarViewModel,
}

impl<'a> NavbarView<'a> {
    pub fn new(model: &'a NavbarViewModel) -> Self {
        Self { model }
    }
}

impl<'a> Widget for NavbarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(area);
        block.render(area, buf);

        let brand = Line::from(Span::styled(
            self.model.brand.as_str(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ));
        Paragraph::new(brand).render(inner, buf);

        let user = match &self.model.user_name {
            Some(name) => Span::styled(format!("👤 {}", name), Style::default().fg(Color::Cyan)),
            None => Span::styled("not signed in", Style::default().fg(Color::DarkGray)),
        };
        Paragraph::new(Line::from(user))
            .alignment(Alignment::Right)
            .render(inner, buf);
    }
}
