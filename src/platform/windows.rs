// Wayback Finder platform support for Windows
// Config: %APPDATA%/WaybackFinder
// Data:   %APPDATA%/WaybackFinder
// Browser launch: url.dll FileProtocolHandler (avoids cmd.exe mangling '&' in query strings)

use std::env;
use std::path::PathBuf;
use std::process::Command;

use crate::types::errors::OpenerError;

/// `%APPDATA%/WaybackFinder`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("WaybackFinder")
}

/// `%APPDATA%/WaybackFinder`
pub fn get_data_dir() -> PathBuf {
    get_config_dir()
}

/// Opens `url` in the default browser. Focus is left to the browser.
pub fn open_url(url: &str, _foreground: bool) -> Result<(), OpenerError> {
    let mut cmd = Command::new("rundll32");
    cmd.arg("url.dll,FileProtocolHandler").arg(url);
    super::spawn_launcher(cmd, "rundll32")
}
