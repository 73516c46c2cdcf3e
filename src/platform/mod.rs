// Wayback Finder platform abstraction
// Provides platform-specific paths and the browser launcher for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::thread;

use tracing::{debug, info, warn};

use crate::types::errors::OpenerError;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "WAYBACK_FINDER_DATA_DIR";

/// Returns the platform-specific configuration directory for Wayback Finder.
///
/// - **Linux**: `~/.config/wayback-finder` (or `$XDG_CONFIG_HOME/wayback-finder`)
/// - **macOS**: `~/Library/Application Support/WaybackFinder`
/// - **Windows**: `%APPDATA%/WaybackFinder`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".wayback-finder")
    }
}

/// Returns the platform-specific data directory for Wayback Finder.
///
/// - **Linux**: `~/.local/share/wayback-finder` (or `$XDG_DATA_HOME/wayback-finder`)
/// - **macOS**: `~/Library/Application Support/WaybackFinder`
/// - **Windows**: `%APPDATA%/WaybackFinder`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        PathBuf::from(".wayback-finder")
    }
}

/// Path of the history database: `$WAYBACK_FINDER_DATA_DIR/wayback-finder.db`
/// when the variable is set, otherwise under [`get_data_dir`].
pub fn database_path() -> PathBuf {
    match env::var(DATA_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir).join("wayback-finder.db"),
        _ => get_data_dir().join("wayback-finder.db"),
    }
}

/// Starts `cmd` and returns as soon as the process is running.
///
/// Some launchers (xdg-open without a desktop session, for one) stay alive
/// until the browser exits, so the child is reaped on a helper thread and a
/// non-zero exit is only logged.
pub(crate) fn spawn_launcher(mut cmd: Command, name: &'static str) -> Result<(), OpenerError> {
    let mut child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| OpenerError::LaunchFailed(format!("{}: {}", name, e)))?;
    debug!(launcher = name, pid = child.id(), "launcher started");

    let reaper = thread::Builder::new()
        .name(format!("{}-reaper", name))
        .spawn(move || match child.wait() {
            Ok(status) if !status.success() => {
                warn!(launcher = name, %status, "launcher exited with failure")
            }
            Ok(_) => {}
            Err(e) => warn!(launcher = name, error = %e, "could not wait for launcher"),
        });
    if let Err(e) = reaper {
        warn!(launcher = name, error = %e, "no reaper thread, launcher left unreaped");
    }
    Ok(())
}

/// Opens URLs somewhere the user can see them.
pub trait TabOpener {
    /// Opens `url`. With `foreground = false` the opener should avoid
    /// stealing focus where the platform allows it.
    fn open(&self, url: &str, foreground: bool) -> Result<(), OpenerError>;
}

/// Opener that hands URLs to the operating system's default browser.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl TabOpener for SystemOpener {
    fn open(&self, url: &str, foreground: bool) -> Result<(), OpenerError> {
        info!(url, foreground, "opening in browser");
        #[cfg(target_os = "linux")]
        {
            linux::open_url(url, foreground)
        }
        #[cfg(target_os = "macos")]
        {
            macos::open_url(url, foreground)
        }
        #[cfg(target_os = "windows")]
        {
            windows::open_url(url, foreground)
        }
        #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
        {
            let _ = (url, foreground);
            Err(OpenerError::UnsupportedPlatform)
        }
    }
}
