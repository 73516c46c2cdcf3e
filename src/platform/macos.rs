// Wayback Finder platform support for macOS
// Config: ~/Library/Application Support/WaybackFinder
// Data:   ~/Library/Application Support/WaybackFinder
// Browser launch: open (-g keeps the browser in the background)

use std::env;
use std::path::PathBuf;
use std::process::Command;

use crate::types::errors::OpenerError;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `~/Library/Application Support/WaybackFinder`
pub fn get_config_dir() -> PathBuf {
    home_dir()
        .join("Library")
        .join("Application Support")
        .join("WaybackFinder")
}

/// `~/Library/Application Support/WaybackFinder`
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

/// Opens `url` in the default browser, without activating it unless `foreground`.
pub fn open_url(url: &str, foreground: bool) -> Result<(), OpenerError> {
    let mut cmd = Command::new("open");
    if !foreground {
        cmd.arg("-g");
    }
    cmd.arg(url);
    super::spawn_launcher(cmd, "open")
}
