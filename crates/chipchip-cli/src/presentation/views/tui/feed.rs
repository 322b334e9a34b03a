use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::time::format_local_time;
use crate::presentation::view_models::{FeedViewModel, PostCardViewModel};
use crate::presentation::views::timeline::{EMPTY_BODY, EMPTY_TITLE};

const PLACEHOLDER: &str = "░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░";
const PLACEHOLDER_SHORT: &str = "░░░░░░░░░░░░░░░";

pub struct FeedView<'a> {
    title: &'a str,
    model: &'a FeedViewModel,
    pending: Option<&'a PostCardViewModel>,
}

impl<'a> FeedView<'a> {
    pub fn new(
        title: &'a str,
        model: &'a FeedViewModel,
        pending: Option<&'a PostCardViewModel>,
    ) -> Self {
        Self {
            title,
            model,
            pending,
        }
    }

    /// Cards the user can select, pending card first.
    pub fn selectable(&self) -> Vec<&'a PostCardViewModel> {
        self.pending
            .into_iter()
            .chain(self.model.cards().iter())
            .collect()
    }

    fn block(&self) -> Block<'a> {
        let mut title = vec![Span::styled(
            format!(" {} ", self.title),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let FeedViewModel::Loading { updating: true, .. } = self.model {
            title.push(Span::styled("updating… ", Style::default().fg(Color::DarkGray)));
        }
        Block::default().borders(Borders::ALL).title(Line::from(title))
    }

    /// List widget when there are rows to draw; `None` for the empty and
    /// failed states, which render as a message instead.
    pub fn build_list(&self) -> Option<List<'a>> {
        let mut items: Vec<ListItem<'a>> = self.pending.iter().map(|c| card_item(c)).collect();

        match self.model {
            FeedViewModel::Loading { placeholders, .. } => {
                items.extend((0..*placeholders).map(|_| placeholder_item()));
            }
            FeedViewModel::Populated { cards, .. } => {
                items.extend(cards.iter().map(card_item));
            }
            FeedViewModel::Empty | FeedViewModel::Failed { .. } => {
                if items.is_empty() {
                    return None;
                }
            }
        }

        Some(
            List::new(items)
                .block(self.block())
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("▌")
                .highlight_spacing(HighlightSpacing::Always),
        )
    }
}

impl<'a> Widget for FeedView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self.model {
            FeedViewModel::Failed { message } => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Could not load chirps",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                Line::from(message.as_str()),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[r]", Style::default().fg(Color::Yellow)),
                    Span::raw(" retry"),
                ]),
            ],
            _ => vec![
                Line::from(""),
                Line::from(Span::styled(
                    EMPTY_TITLE,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(EMPTY_BODY),
            ],
        };

        Paragraph::new(lines)
            .block(self.block())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

fn card_item<'a>(card: &PostCardViewModel) -> ListItem<'a> {
    let mut header = vec![
        Span::styled(
            card.author_name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" · {}", format_local_time(card.created_at)),
            Style::default().fg(Color::DarkGray),
        ),
    ];
    if card.pending {
        header.push(Span::styled(" sending…", Style::default().fg(Color::Yellow)));
    }

    let mut lines = vec![Line::from(header)];
    lines.extend(card.content.lines().map(|l| Line::from(l.to_string())));
    lines.push(Line::from(Span::styled(
        format!("💬  ♡ {}", card.likes_count),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));

    ListItem::new(lines)
}

fn placeholder_item<'a>() -> ListItem<'a> {
    let style = Style::default().fg(Color::DarkGray);
    ListItem::new(vec![
        Line::from(Span::styled(PLACEHOLDER_SHORT, style)),
        Line::from(Span::styled(PLACEHOLDER, style)),
        Line::from(""),
    ])
}
