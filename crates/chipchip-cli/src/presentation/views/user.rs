use std::fmt;

use super::style;
use crate::presentation::view_models::{CreateView, UserViewModel, ViewMode};

impl CreateView for UserViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(UserView::new(self, mode))
    }
}

pub struct UserView<'a> {
    data: &'a UserViewModel,
    mode: ViewMode,
}

impl<'a> UserView<'a> {
    pub fn new(data: &'a UserViewModel, mode: ViewMode) -> Self {
        Self { data, mode }
    }
}

impl<'a> fmt::Display for UserView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return match &self.data.display_name {
                Some(name) => writeln!(f, "{}", name),
                None => Ok(()),
            };
        }

        if let Some(name) = &self.data.display_name {
            writeln!(f, "{}", style::bold(name))?;
        }
        if let Some(email) = &self.data.email {
            writeln!(f, "  email:   {}", email)?;
        }
        if let Some(id) = self.data.id {
            writeln!(f, "  id:      {}", id)?;
        }
        writeln!(f, "  backend: {}", self.data.backend)?;
        if self.data.backend != "memory" {
            writeln!(f, "  api:     {}", self.data.api_url)?;
        }
        Ok(())
    }
}
