use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::app::AppState;
use crate::presentation::presenters::present_navbar;
use crate::presentation::view_models::TuiPage;
use crate::presentation::views::tui::navbar::MIN_NAVBAR_WIDTH;
use crate::presentation::views::tui::{NavbarView, StatusBarView};

const NAVBAR_HEIGHT: u16 = 2;
const STATUS_HEIGHT: u16 = 2;
const COMPOSER_HEIGHT: u16 = 6;

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let area = f.area();
    let show_navbar = area.width >= MIN_NAVBAR_WIDTH;

    let [navbar_area, body_area, status_area] = Layout::vertical([
        Constraint::Length(if show_navbar { NAVBAR_HEIGHT } else { 0 }),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .areas(area);

    if show_navbar {
        let navbar = present_navbar(state.client().known_user());
        f.render_widget(NavbarView::new(&navbar), navbar_area);
    }

    match state.page() {
        TuiPage::Dashboard => draw_dashboard(f, body_area, state),
        TuiPage::Timeline => draw_timeline(f, body_area, state),
    }

    let status = state.status_bar_view_model();
    f.render_widget(StatusBarView::new(&status), status_area);
}

fn draw_dashboard(f: &mut Frame, area: Rect, state: &mut AppState) {
    let data = state.dashboard_view_model();
    state.dashboard.render(f, area, &data);
}

fn draw_timeline(f: &mut Frame, area: Rect, state: &mut AppState) {
    let data = state.timeline_view_model();

    let [composer_area, feed_area] =
        Layout::vertical([Constraint::Length(COMPOSER_HEIGHT), Constraint::Min(0)]).areas(area);

    if let Some(composer) = &data.composer {
        state.composer.render(f, composer_area, composer);
    }
    state.feed.render(f, feed_area, &data);
}
