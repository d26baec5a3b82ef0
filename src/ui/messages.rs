//! User-facing status lines (icon + colored prefix).

use std::fmt;
use std::io::{self, BufRead, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        let (color, icon) = self.style();
        format!("{color}{BOLD}{icon} {RESET}{msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.line(msg));
}

/// Errors go to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.line(msg));
}

/// Section title line.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\x1b[34m{BOLD}── {msg} ──{RESET}\n");
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` means no.
pub fn confirm<T: fmt::Display>(prompt: T) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
