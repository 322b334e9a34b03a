use chipchip_types::CurrentUser;

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, StatusBadge, UserViewModel,
};

pub fn present_user(
    user: Option<&CurrentUser>,
    backend: &str,
    api_url: &str,
) -> CommandResultViewModel<UserViewModel> {
    let content = UserViewModel {
        signed_in: user.is_some(),
        id: user.and_then(|u| u.id),
        display_name: user.and_then(|u| u.display_name()).map(str::to_string),
        email: user.and_then(|u| u.email.clone()),
        full_name: user.and_then(|u| u.full_name.clone()),
        backend: backend.to_string(),
        api_url: api_url.to_string(),
    };

    if content.signed_in {
        CommandResultViewModel::new(content).with_badge(StatusBadge::success("Signed in"))
    } else {
        CommandResultViewModel::new(content)
            .with_badge(StatusBadge::warning("Not signed in"))
            .with_suggestion(
                Guidance::new("Store an API token").with_command(cmd::CONFIG_SET_TOKEN),
            )
            .with_suggestion(Guidance::new("Or export CHIPCHIP_TOKEN for this shell"))
            .with_suggestion(
                Guidance::new("Check which server is configured").with_command(cmd::CONFIG_SHOW),
            )
    }
}
