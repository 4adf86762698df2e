//! Path utilities: expand ~ and make command-line paths absolute.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Absolute form of a user-supplied path, relative to the working directory.
pub fn absolutize(path: &str) -> PathBuf {
    let p = expand_tilde(path);
    std::path::absolute(&p).unwrap_or(p)
}
