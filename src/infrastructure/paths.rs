//! Path helpers for the Zellij sandbox.
//!
//! Inside Zellij the host filesystem is mounted under `/host`, which points at
//! the cwd of the focused terminal (usually the home directory). Native builds
//! (tests, the preview binary) resolve the same locations from `$HOME`.

use std::path::PathBuf;

/// Returns the directory zfolio writes its trace files to.
///
/// In the plugin this is `/host/.local/share/zellij/zfolio`. Native builds use
/// `$HOME/.local/share/zfolio`, or the temp directory when `HOME` is unset.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if cfg!(target_family = "wasm") {
        return PathBuf::from("/host/.local/share/zellij").join("zfolio");
    }

    std::env::var_os("HOME").map_or_else(
        || std::env::temp_dir().join("zfolio"),
        |home| PathBuf::from(home).join(".local/share/zfolio"),
    )
}

/// Expands a leading `~` to the sandbox host directory.
///
/// # Examples
///
/// ```
/// use zfolio::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/portfolio.toml"), "/host/portfolio.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/zfolio.toml"), "/etc/zfolio.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
