use std::fmt;

use chrono::Utc;

use super::{NavbarView, style};
use crate::presentation::formatters::text::{one_line, short_id};
use crate::presentation::formatters::time::{format_age, format_local_time};
use crate::presentation::view_models::{
    ComposerViewModel, CreateView, FeedViewModel, PostCardViewModel, TimelineViewModel, ViewMode,
};

pub const EMPTY_TITLE: &str = "No chirps yet";
pub const EMPTY_BODY: &str = "Be the first to chirp something!";
pub const COMPOSER_PROMPT: &str = "What's chirping?";
const PLACEHOLDER_LINE: &str = "░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░";
const PLACEHOLDER_SHORT: &str = "░░░░░░░░░░░░░░░";

impl CreateView for TimelineViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(TimelineView::new(self, mode))
    }
}

impl CreateView for PostCardViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(PostCardView::new(self, mode))
    }
}

// --------------------------------------------------------
// Timeline View
// --------------------------------------------------------

pub struct TimelineView<'a> {
    data: &'a TimelineViewModel,
    mode: ViewMode,
}

impl<'a> TimelineView<'a> {
    pub fn new(data: &'a TimelineViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for card in self.data.feed.cards() {
            if let Some(id) = card.id {
                writeln!(f, "{}", id)?;
            }
        }
        Ok(())
    }

    fn render_full(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", NavbarView::new(&self.data.navbar))?;
        writeln!(f)?;
        writeln!(f, "{}", style::bold(&self.data.title))?;
        writeln!(f)?;

        if let Some(composer) = &self.data.composer {
            write!(f, "{}", ComposerView::new(composer))?;
            writeln!(f)?;
        }

        if let Some(pending) = &self.data.pending {
            write!(f, "{}", PostCardView::new(pending, self.mode))?;
            writeln!(f)?;
        }

        write!(f, "{}", FeedView::new(&self.data.feed, self.mode))
    }
}

impl<'a> fmt::Display for TimelineView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => {
                if let Some(pending) = &self.data.pending {
                    write!(f, "{}", PostCardView::new(pending, ViewMode::Compact))?;
                }
                write!(f, "{}", FeedView::new(&self.data.feed, ViewMode::Compact))
            }
            ViewMode::Standard | ViewMode::Verbose => self.render_full(f),
        }
    }
}

// --------------------------------------------------------
// Feed View
// --------------------------------------------------------

pub struct FeedView<'a> {
    data: &'a FeedViewModel,
    mode: ViewMode,
}

impl<'a> FeedView<'a> {
    pub fn new(data: &'a FeedViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    /// Multi-line cards get a blank line between them
    fn spaced(&self) -> bool {
        matches!(self.mode, ViewMode::Standard | ViewMode::Verbose)
    }
}

impl<'a> fmt::Display for FeedView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data {
            FeedViewModel::Loading {
                updating,
                placeholders,
            } => {
                if *updating {
                    writeln!(f, "{}", style::dimmed("Updating..."))?;
                }
                for _ in 0..*placeholders {
                    writeln!(f, "{}", style::dimmed(PLACEHOLDER_LINE))?;
                    if self.spaced() {
                        writeln!(f, "{}", style::dimmed(PLACEHOLDER_SHORT))?;
                        writeln!(f)?;
                    }
                }
                Ok(())
            }
            FeedViewModel::Empty => {
                writeln!(f, "{}", style::bold(EMPTY_TITLE))?;
                writeln!(f, "{}", EMPTY_BODY)
            }
            FeedViewModel::Populated { cards, .. } => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 && self.spaced() {
                        writeln!(f)?;
                    }
                    write!(f, "{}", PostCardView::new(card, self.mode))?;
                }
                Ok(())
            }
            FeedViewModel::Failed { message } => {
                writeln!(f, "{} {}", style::red("Could not load chirps:"), message)
            }
        }
    }
}

// --------------------------------------------------------
// Post Card View
// --------------------------------------------------------

pub struct PostCardView<'a> {
    data: &'a PostCardViewModel,
    mode: ViewMode,
}

impl<'a> PostCardView<'a> {
    pub fn new(data: &'a PostCardViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }

    fn header(&self) -> String {
        let mut header = format!(
            "{} · {}",
            style::bold(&self.data.author_name),
            style::dimmed(&format_local_time(self.data.created_at))
        );
        if self.data.pending {
            header.push_str(&format!(" {}", style::dimmed("(sending...)")));
        }
        header
    }

    fn footer(&self) -> String {
        format!("💬  ♡ {}", self.data.likes_count)
    }

    fn render_minimal(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data.id {
            Some(id) => writeln!(f, "{}", id),
            None => Ok(()),
        }
    }

    fn render_compact(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = match self.data.id {
            Some(id) => short_id(&id),
            None => "pending".to_string(),
        };
        writeln!(
            f,
            "{}  {:>8}  {:<20}  {}  ♡ {}",
            style::cyan(&id),
            format_age(self.data.created_at, Utc::now()),
            one_line(&self.data.author_name, 20),
            one_line(&self.data.content, 60),
            self.data.likes_count
        )
    }

    fn render_standard(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        writeln!(f, "{}", self.data.content)?;
        writeln!(f, "{}", style::dimmed(&self.footer()))
    }

    fn render_verbose(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.render_standard(f)?;
        if let Some(id) = self.data.id {
            writeln!(f, "{}", style::dimmed(&format!("id: {}", id)))?;
        }
        if let Some(email) = &self.data.author_email {
            writeln!(f, "{}", style::dimmed(&format!("author: {}", email)))?;
        }
        Ok(())
    }
}

impl<'a> fmt::Display for PostCardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.mode {
            ViewMode::Minimal => self.render_minimal(f),
            ViewMode::Compact => self.render_compact(f),
            ViewMode::Standard => self.render_standard(f),
            ViewMode::Verbose => self.render_verbose(f),
        }
    }
}

// --------------------------------------------------------
// Composer View
// --------------------------------------------------------

pub struct ComposerView<'a> {
    data: &'a ComposerViewModel,
}

impl<'a> ComposerView<'a> {
    pub fn new(data: &'a ComposerViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ComposerView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}: {}", style::bold(&self.data.author_name), COMPOSER_PROMPT)?;
        writeln!(f, "> {}", self.data.content)?;
        let status = if self.data.submitting {
            "Chirping...".to_string()
        } else {
            format!("{} characters remaining", self.data.remaining)
        };
        writeln!(f, "{}", style::dimmed(&status))?;
        if let Some(error) = &self.data.error {
            writeln!(f, "{}", style::red(error))?;
        }
        Ok(())
    }
}
