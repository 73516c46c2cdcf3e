// Wayback Finder platform support for Linux
// Config: ~/.config/wayback-finder
// Data:   ~/.local/share/wayback-finder
// Browser launch: xdg-open

use std::env;
use std::path::PathBuf;
use std::process::Command;

use crate::types::errors::OpenerError;

/// Returns the configuration directory for Wayback Finder on Linux.
/// Uses `$XDG_CONFIG_HOME/wayback-finder` if set, otherwise `~/.config/wayback-finder`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("wayback-finder")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("wayback-finder")
    }
}

/// Returns the data directory for Wayback Finder on Linux.
/// Uses `$XDG_DATA_HOME/wayback-finder` if set, otherwise `~/.local/share/wayback-finder`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("wayback-finder")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("wayback-finder")
    }
}

/// Opens `url` with the desktop's default handler.
///
/// xdg-open has no notion of background tabs, so `foreground` is ignored.
pub fn open_url(url: &str, _foreground: bool) -> Result<(), OpenerError> {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(url);
    super::spawn_launcher(cmd, "xdg-open")
}
