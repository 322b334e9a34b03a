use std::fmt;

use super::style;
use crate::presentation::view_models::NavbarViewModel;

pub struct NavbarView<'a> {
    data: &'a NavbarViewModel,
}

impl<'a> NavbarView<'a> {
    pub fn new(data: &'a NavbarViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for NavbarView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let user = self.data.user_name.as_deref().unwrap_or("not signed in");
        writeln!(f, "{}  {}", style::magenta(&self.data.brand), style::dimmed(user))?;
        writeln!(f, "{}", "─".repeat(40))
    }
}
