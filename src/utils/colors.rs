/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub const STRIKE: &str = "\x1b[9m";

/// Header color for the selected theme: dark terminals get white, light ones blue.
pub fn header_color(theme: crate::models::preferences::Theme) -> &'static str {
    match theme {
        crate::models::preferences::Theme::Light => BLUE,
        crate::models::preferences::Theme::Dark => WHITE,
    }
}

/// Wrap `value` in `color` … RESET.
pub fn paint(value: &str, color: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    format!("{color}{value}{RESET}")
}

/// Grey out empty or `--` placeholders.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
