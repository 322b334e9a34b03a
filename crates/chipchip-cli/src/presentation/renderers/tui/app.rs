//! TUI state: the client context plus page, focus and status line.
//!
//! Key presses and API responses come in; the requests they imply go out.
//! Nothing here touches the network or the terminal.

use chipchip_runtime::{
    ApiRequest, ApiResponse, ChipChip, Feed, FeedKind, Settled, SubmitOutcome, Update,
};
use chipchip_types::ListParams;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::presenters::{build_dashboard, build_timeline};
use crate::presentation::view_models::{
    DashboardViewModel, StatusBarViewModel, StatusLevel, TimelineViewModel, TuiPage,
};
use crate::presentation::views::tui::components::{
    ComposerAction, ComposerComponent, DashboardAction, DashboardComponent, FeedAction,
    FeedComponent,
};

pub struct AppState {
    app: ChipChip,
    page_limit: usize,
    pub(super) page: TuiPage,
    feed_kind: FeedKind,
    pub(super) dashboard: DashboardComponent,
    pub(super) feed: FeedComponent,
    pub(super) composer: ComposerComponent,
    status: Option<(String, StatusLevel)>,
    user_requested: bool,
    user_failed: bool,
    should_quit: bool,
}

impl AppState {
    pub fn new(app: ChipChip, page_limit: usize) -> Self {
        Self {
            app,
            page_limit,
            page: TuiPage::Dashboard,
            feed_kind: FeedKind::Timeline,
            dashboard: DashboardComponent::new(),
            feed: FeedComponent::new(),
            composer: ComposerComponent::new(),
            status: None,
            user_requested: false,
            user_failed: false,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn page(&self) -> TuiPage {
        self.page
    }

    pub fn client(&self) -> &ChipChip {
        &self.app
    }

    pub fn current_feed(&self) -> Feed {
        Feed::new(self.feed_kind, ListParams::new(0, self.page_limit))
    }

    fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status = Some((message.into(), level));
    }

    /// Requests implied by the current state: the signed-in user once (again
    /// after a failed load and a refresh), and the visible feed whenever it
    /// is missing or stale.
    pub fn pending_requests(&mut self) -> Vec<ApiRequest> {
        let mut requests = Vec::new();

        if !self.user_requested {
            if let Some(request) = self.app.user_request() {
                self.user_requested = true;
                requests.push(request);
            }
        }

        if self.page == TuiPage::Timeline {
            let feed = self.current_feed();
            requests.extend(self.app.fetch_request(&feed));
        }

        requests
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Vec<ApiRequest> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Vec::new();
        }

        if self.composer.is_focused() {
            return match self.composer.handle_input(key) {
                Some(action) => self.apply_composer_action(action),
                None => Vec::new(),
            };
        }

        if matches!(key.code, KeyCode::Char('q')) {
            self.should_quit = true;
            return Vec::new();
        }

        match self.page {
            TuiPage::Dashboard => {
                if key.code == KeyCode::Esc {
                    self.should_quit = true;
                } else if let Some(DashboardAction::OpenTimeline) = self.dashboard.handle_input(key)
                {
                    self.page = TuiPage::Timeline;
                }
                Vec::new()
            }
            TuiPage::Timeline => {
                if key.code == KeyCode::Esc {
                    self.page = TuiPage::Dashboard;
                    return Vec::new();
                }
                let data = self.timeline_view_model();
                match self.feed.handle_input(key, &data) {
                    Some(action) => self.apply_feed_action(action),
                    None => Vec::new(),
                }
            }
        }
    }

    fn apply_composer_action(&mut self, action: ComposerAction) -> Vec<ApiRequest> {
        let composer = self.app.composer_mut();
        match action {
            ComposerAction::Insert(c) => {
                composer.insert_char(c);
            }
            ComposerAction::Backspace => composer.backspace(),
            ComposerAction::Clear => composer.clear(),
            ComposerAction::Blur => {}
            ComposerAction::Submit => match self.app.submit_request() {
                Ok(request) => {
                    self.set_status("Sending chirp…", StatusLevel::Info);
                    return vec![request];
                }
                Err(err) => self.set_status(err.to_string(), StatusLevel::Warning),
            },
        }
        Vec::new()
    }

    fn apply_feed_action(&mut self, action: FeedAction) -> Vec<ApiRequest> {
        match action {
            FeedAction::Refresh => {
                let feed = self.current_feed();
                self.app.retry(&feed);
                if std::mem::take(&mut self.user_failed) {
                    self.user_requested = false;
                }
                self.status = None;
                Vec::new()
            }
            FeedAction::ToggleKind => {
                self.feed_kind = match self.feed_kind {
                    FeedKind::Timeline => FeedKind::Mine,
                    FeedKind::Mine => FeedKind::Timeline,
                };
                self.feed.reset();
                Vec::new()
            }
            FeedAction::Compose => {
                self.composer.focus();
                Vec::new()
            }
            FeedAction::Delete(id) => {
                self.set_status("Deleting chirp…", StatusLevel::Info);
                vec![self.app.delete_request(id)]
            }
        }
    }

    pub fn handle_response(&mut self, response: ApiResponse) {
        match self.app.apply(response) {
            Update::UserLoaded => {}
            Update::UserFailed { message } => {
                self.user_failed = true;
                self.set_status(
                    format!("Could not load user: {} (r to retry)", message),
                    StatusLevel::Error,
                );
            }
            Update::FeedSettled { key, settled } => {
                if settled == Settled::Superseded {
                    tracing::debug!(%key, "dropped superseded feed result");
                }
            }
            Update::Submit(SubmitOutcome::Posted { .. }) => {
                self.set_status("Chirp posted", StatusLevel::Success);
            }
            Update::Submit(SubmitOutcome::Failed { message }) => {
                if self.page == TuiPage::Timeline {
                    self.composer.focus();
                }
                self.set_status(message, StatusLevel::Error);
            }
            Update::Submit(SubmitOutcome::Stale) => {}
            Update::Deleted { .. } => self.set_status("Chirp deleted", StatusLevel::Success),
            Update::DeleteFailed { message, .. } => self.set_status(message, StatusLevel::Error),
        }
    }

    pub fn dashboard_view_model(&self) -> DashboardViewModel {
        build_dashboard(self.app.known_user())
    }

    pub fn timeline_view_model(&self) -> TimelineViewModel {
        build_timeline(&self.app, &self.current_feed(), true)
    }

    pub fn status_bar_view_model(&self) -> StatusBarViewModel {
        let hints: &[(&str, &str)] = if self.composer.is_focused() {
            &[("Enter", "chirp"), ("Esc", "done")]
        } else {
            match self.page {
                TuiPage::Dashboard => &[("Enter", "timeline"), ("q", "quit")],
                TuiPage::Timeline => &[
                    ("i", "write"),
                    ("j/k", "move"),
                    ("m", "mine/all"),
                    ("r", "refresh"),
                    ("d", "delete"),
                    ("Esc", "back"),
                    ("q", "quit"),
                ],
            }
        };

        let (message, level) = match &self.status {
            Some((message, level)) => (Some(message.clone()), *level),
            None => (None, StatusLevel::Info),
        };

        StatusBarViewModel {
            page: self.page,
            backend: self.app.api().id().to_string(),
            key_hints: hints
                .iter()
                .map(|(k, l)| (k.to_string(), l.to_string()))
                .collect(),
            message,
            level,
        }
    }
}
