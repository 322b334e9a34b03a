use std::fmt::Write as _;

use anyhow::Result;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, ViewMode,
};
use crate::presentation::views::style;

pub struct ConsoleRenderer {
    format: OutputFormat,
    view_mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, view_mode: ViewMode) -> Self {
        Self { format, view_mode }
    }

    /// Text or JSON for `result`, exactly as `render` would print it.
    pub fn to_output<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.format == OutputFormat::Json {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }

        let mut out = String::new();

        // Scripting output stays bare
        let decorate = self.view_mode != ViewMode::Minimal;

        if decorate {
            if let Some(badge) = &result.badge {
                writeln!(out, "{} {}", badge.icon(), style::bold(&badge.label))?;
                writeln!(out)?;
            }
        }

        write!(out, "{}", result.content.create_view(self.view_mode))?;

        if decorate && !result.suggestions.is_empty() {
            writeln!(out, "\n{}", style::yellow("💡 Tips:"))?;
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    write!(out, ": {}", style::cyan(cmd))?;
                }
                writeln!(out)?;
            }
        }

        Ok(out)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView + Send + Sync,
    {
        print!("{}", self.to_output(&result)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{Guidance, StatusBadge, UserViewModel};

    fn sample() -> CommandResultViewModel<UserViewModel> {
        CommandResultViewModel::new(UserViewModel {
            signed_in: true,
            id: None,
            display_name: Some("Demo User".to_string()),
            email: None,
            full_name: Some("Demo User".to_string()),
            backend: "memory".to_string(),
            api_url: "http://localhost:8000/api/v1".to_string(),
        })
        .with_badge(StatusBadge::success("Signed in"))
        .with_suggestion(Guidance::new("Go to Timeline").with_command("chipchip timeline"))
    }

    #[test]
    fn test_text_output_has_badge_content_and_tips() -> Result<()> {
        let out = ConsoleRenderer::new(OutputFormat::Text, ViewMode::Standard).to_output(&sample())?;

        insta::assert_snapshot!(out, @r"
        ✅ Signed in

        Demo User
          backend: memory

        💡 Tips:
          • Go to Timeline: chipchip timeline
        ");
        Ok(())
    }

    #[test]
    fn test_json_output_wraps_content() -> Result<()> {
        let out = ConsoleRenderer::new(OutputFormat::Json, ViewMode::Minimal).to_output(&sample())?;
        let json: serde_json::Value = serde_json::from_str(&out)?;

        assert_eq!(json["badge"]["level"], "success");
        assert_eq!(json["content"]["display_name"], "Demo User");
        assert_eq!(json["suggestions"][0]["command"], "chipchip timeline");
        Ok(())
    }

    #[test]
    fn test_minimal_mode_skips_decoration() -> Result<()> {
        let out = ConsoleRenderer::new(OutputFormat::Text, ViewMode::Minimal).to_output(&sample())?;
        assert_eq!(out, "Demo User\n");
        Ok(())
    }
}
