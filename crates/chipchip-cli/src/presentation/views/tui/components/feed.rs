use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};
use uuid::Uuid;

use crate::presentation::view_models::TimelineViewModel;
use crate::presentation::views::tui::FeedView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedAction {
    /// Mark the feed stale and fetch again (also used as retry)
    Refresh,
    /// Switch between the public timeline and the user's own chirps
    ToggleKind,
    Compose,
    Delete(Uuid),
}

/// Chirp list with its own selection.
#[derive(Default)]
pub struct FeedComponent {
    state: ListState,
}

impl FeedComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn reset(&mut self) {
        self.state = ListState::default();
    }

    pub fn handle_input(&mut self, key: KeyEvent, data: &TimelineViewModel) -> Option<FeedAction> {
        let view = FeedView::new(&data.title, &data.feed, data.pending.as_ref());
        let cards = view.selectable();

        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.next(cards.len());
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                if !cards.is_empty() {
                    self.state.select(Some(0));
                }
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                if !cards.is_empty() {
                    self.state.select(Some(cards.len() - 1));
                }
                None
            }
            KeyCode::Char('r') => Some(FeedAction::Refresh),
            KeyCode::Char('m') => Some(FeedAction::ToggleKind),
            KeyCode::Char('i') | KeyCode::Char('c') => Some(FeedAction::Compose),
            KeyCode::Char('d') => {
                let card = cards.get(self.state.selected()?)?;
                if card.own && !card.pending {
                    card.id.map(FeedAction::Delete)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &TimelineViewModel) {
        let view = FeedView::new(&data.title, &data.feed, data.pending.as_ref());
        let len = view.selectable().len();

        if let Some(selected) = self.state.selected() {
            if len == 0 {
                self.state.select(None);
            } else if selected >= len {
                self.state.select(Some(len - 1));
            }
        }

        match view.build_list() {
            Some(list) => f.render_stateful_widget(list, area, &mut self.state),
            None => f.render_widget(view, area),
        }
    }

    fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.state.select(Some(next));
    }

    fn previous(&mut self) {
        let prev = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(prev));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{FeedViewModel, NavbarViewModel, PostCardViewModel};
    use chipchip_runtime::FeedKind;
    use chrono::Utc;
    use crossterm::event::KeyModifiers;

    fn card(content: &str, own: bool) -> PostCardViewModel {
        PostCardViewModel {
            id: Some(Uuid::new_v4()),
            author_name: "Alice".to_string(),
            author_email: None,
            created_at: Utc::now(),
            content: content.to_string(),
            likes_count: 0,
            pending: false,
            own,
        }
    }

    fn timeline(cards: Vec<PostCardViewModel>) -> TimelineViewModel {
        TimelineViewModel {
            title: "Timeline".to_string(),
            kind: FeedKind::Timeline,
            navbar: NavbarViewModel {
                brand: "ChipChip 🐦".to_string(),
                user_name: None,
            },
            composer: None,
            pending: None,
            feed: FeedViewModel::Populated {
                total: cards.len(),
                cards,
            },
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selection_stops_at_edges() {
        let data = timeline(vec![card("a", false), card("b", false)]);
        let mut feed = FeedComponent::new();

        feed.handle_input(key(KeyCode::Char('j')), &data);
        feed.handle_input(key(KeyCode::Char('j')), &data);
        feed.handle_input(key(KeyCode::Char('j')), &data);
        assert_eq!(feed.selected(), Some(1));

        feed.handle_input(key(KeyCode::Char('k')), &data);
        feed.handle_input(key(KeyCode::Char('k')), &data);
        assert_eq!(feed.selected(), Some(0));
    }

    #[test]
    fn test_delete_only_own_chirps() {
        let mine = card("mine", true);
        let id = mine.id;
        let data = timeline(vec![card("theirs", false), mine]);
        let mut feed = FeedComponent::new();

        assert_eq!(feed.handle_input(key(KeyCode::Char('d')), &data), None);

        feed.handle_input(key(KeyCode::Char('j')), &data);
        assert_eq!(feed.handle_input(key(KeyCode::Char('d')), &data), None);

        feed.handle_input(key(KeyCode::Char('j')), &data);
        assert_eq!(
            feed.handle_input(key(KeyCode::Char('d')), &data),
            id.map(FeedAction::Delete)
        );
    }
}
