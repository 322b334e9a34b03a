use std::fmt;

use crate::presentation::view_models::{ConfigViewModel, CreateView, ViewMode};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView::new(self))
    }
}

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Config: {}", self.data.path)?;
        writeln!(f)?;
        writeln!(f, "{:<22} {}", "api_url", self.data.api_url)?;
        writeln!(
            f,
            "{:<22} {}",
            "token",
            self.data.token.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "{:<22} {}", "request_timeout_secs", self.data.request_timeout_secs)?;
        writeln!(f, "{:<22} {}", "page_limit", self.data.page_limit)
    }
}
