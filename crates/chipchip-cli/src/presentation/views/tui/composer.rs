use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::ComposerViewModel;
use crate::presentation::views::timeline::COMPOSER_PROMPT;

pub struct ComposerView<'a> {
    model: &'a ComposerViewModel,
    focused: bool,
}

impl<'a> ComposerView<'a> {
    pub fn new(model: &'a ComposerViewModel, focused: bool) -> Self {
        Self { model, focused }
    }

    fn counter(&self) -> Span<'a> {
        if self.model.submitting {
            return Span::styled("Chirping…", Style::default().fg(Color::Yellow));
        }
        let color = if self.model.remaining == 0 {
            Color::Red
        } else if self.model.remaining <= 20 {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        Span::styled(
            format!("{} characters remaining", self.model.remaining),
            Style::default().fg(color),
        )
    }
}

impl<'a> Widget for ComposerView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Line::from(vec![
                Span::styled(
                    format!(" {} ", self.model.author_name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("· {} ", COMPOSER_PROMPT)),
            ]));

        let mut text = if self.model.content.is_empty() && !self.focused {
            vec![Line::from(Span::styled(
                "Press [i] to write a chirp",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            let mut lines: Vec<Line> = self
                .model
                .content
                .split('\n')
                .map(|l| Line::from(l.to_string()))
                .collect();
            if self.focused {
                if let Some(last) = lines.last_mut() {
                    last.push_span(Span::styled("▏", Style::default().fg(Color::Cyan)));
                }
            }
            lines
        };

        let mut status = vec![self.counter()];
        if self.focused && !self.model.submitting {
            status.push(Span::raw("  "));
            let submit_style = if self.model.can_submit {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            status.push(Span::styled("[Enter] chirp", submit_style));
            status.push(Span::styled("  [Esc] done", Style::default().fg(Color::DarkGray)));
        }
        text.push(Line::from(status));

        if let Some(error) = &self.model.error {
            text.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        }

        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
