pub mod cmd {
    pub const TIMELINE: &str = "chipchip timeline";
    pub const TIMELINE_MINE: &str = "chipchip timeline --mine";
    pub const CHIRP: &str = "chipchip chirp \"<text>\"";
    pub const TUI: &str = "chipchip tui";
    pub const WHOAMI: &str = "chipchip whoami";

    pub const CONFIG_SHOW: &str = "chipchip config show";
    pub const CONFIG_SET_TOKEN: &str = "chipchip config set --token <TOKEN>";
    pub const CONFIG_SET_API_URL: &str = "chipchip config set --api-url <URL>";

    pub const DEMO: &str = "chipchip --demo";
}

pub mod fmt {
    pub fn show(id: &str) -> String {
        format!("chipchip show {}", id)
    }

    pub fn edit(id: &str) -> String {
        format!("chipchip edit {} \"<text>\"", id)
    }

    pub fn delete(id: &str) -> String {
        format!("chipchip delete {}", id)
    }

    pub fn timeline_page(skip: usize, limit: usize) -> String {
        format!("chipchip timeline --skip {} --limit {}", skip, limit)
    }
}
