use chipchip_types::CurrentUser;

use crate::presentation::view_models::NavbarViewModel;
use crate::presentation::view_models::navbar::BRAND;

pub fn present_navbar(user: Option<&CurrentUser>) -> NavbarViewModel {
    NavbarViewModel {
        brand: BRAND.to_string(),
        user_name: user.and_then(|u| u.display_name()).map(str::to_string),
    }
}
