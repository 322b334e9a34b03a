//! Console styling that switches off when stdout is not a terminal.

use std::sync::atomic::{AtomicBool, Ordering};

use owo_colors::OwoColorize;

static COLOR: AtomicBool = AtomicBool::new(false);

pub fn set_color_enabled(enabled: bool) {
    COLOR.store(enabled, Ordering::Relaxed);
}

pub fn color_enabled() -> bool {
    COLOR.load(Ordering::Relaxed)
}

fn paint(text: &str, styled: impl FnOnce(&str) -> String) -> String {
    if color_enabled() {
        styled(text)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint(text, |t| t.bold().to_string())
}

pub fn dimmed(text: &str) -> String {
    paint(text, |t| t.dimmed().to_string())
}

pub fn cyan(text: &str) -> String {
    paint(text, |t| t.cyan().to_string())
}

pub fn yellow(text: &str) -> String {
    paint(text, |t| t.yellow().bold().to_string())
}

pub fn red(text: &str) -> String {
    paint(text, |t| t.red().to_string())
}

pub fn magenta(text: &str) -> String {
    paint(text, |t| t.magenta().bold().to_string())
}
