//! `~` expansion for user-supplied paths (`--db`, `--config`, `--file`).

use std::path::PathBuf;

/// Replace a leading `~` or `~/` with the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();

    match (path, home) {
        ("~", Some(h)) => h,
        (p, Some(h)) if p.starts_with("~/") => h.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// True when the path is absolute once `~` is expanded.
pub fn is_absolute(path: &str) -> bool {
    expand_tilde(path).is_absolute()
}
