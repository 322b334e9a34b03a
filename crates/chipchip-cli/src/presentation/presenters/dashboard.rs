use chipchip_types::CurrentUser;

use super::present_navbar;
use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, DashboardViewModel, Guidance, StatusBadge,
};

pub fn build_dashboard(user: Option<&CurrentUser>) -> DashboardViewModel {
    DashboardViewModel {
        navbar: present_navbar(user),
        signed_in: user.is_some(),
        user_name: user.and_then(|u| u.display_name()).map(str::to_string),
    }
}

pub fn present_dashboard(user: Option<&CurrentUser>) -> CommandResultViewModel<DashboardViewModel> {
    let content = build_dashboard(user);

    if content.signed_in {
        CommandResultViewModel::new(content)
            .with_suggestion(Guidance::new("Go to Timeline").with_command(cmd::TIMELINE))
            .with_suggestion(Guidance::new("Chirp something").with_command(cmd::CHIRP))
            .with_suggestion(Guidance::new("Browse interactively").with_command(cmd::TUI))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Not signed in"))
            .with_suggestion(
                Guidance::new("Store an API token").with_command(cmd::CONFIG_SET_TOKEN),
            )
            .with_suggestion(Guidance::new("Try the offline demo").with_command(cmd::DEMO))
    }
}
