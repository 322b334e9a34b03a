//! Composer input. Text edits are forwarded to the runtime composer as
//! actions; this component only tracks focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Frame, layout::Rect};

use crate::presentation::view_models::ComposerViewModel;
use crate::presentation::views::tui::ComposerView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerAction {
    Insert(char),
    Backspace,
    Clear,
    Submit,
    Blur,
}

#[derive(Default)]
pub struct ComposerComponent {
    focused: bool,
}

impl ComposerComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ComposerAction> {
        if !self.focused {
            return None;
        }

        match key.code {
            KeyCode::Esc => {
                self.focused = false;
                Some(ComposerAction::Blur)
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                Some(ComposerAction::Insert('\n'))
            }
            KeyCode::Enter => Some(ComposerAction::Submit),
            KeyCode::Backspace => Some(ComposerAction::Backspace),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(ComposerAction::Clear)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(ComposerAction::Insert(c))
            }
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &ComposerViewModel) {
        f.render_widget(ComposerView::new(data, self.focused), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_unfocused_composer_ignores_keys() {
        let mut composer = ComposerComponent::new();
        assert_eq!(composer.handle_input(key(KeyCode::Char('a'))), None);
    }

    #[test]
    fn test_focused_composer_maps_keys() {
        let mut composer = ComposerComponent::new();
        composer.focus();

        assert_eq!(
            composer.handle_input(key(KeyCode::Char('a'))),
            Some(ComposerAction::Insert('a'))
        );
        assert_eq!(
            composer.handle_input(key(KeyCode::Enter)),
            Some(ComposerAction::Submit)
        );
        assert_eq!(
            composer.handle_input(key(KeyCode::Esc)),
            Some(ComposerAction::Blur)
        );
        assert!(!composer.is_focused());
    }
}
