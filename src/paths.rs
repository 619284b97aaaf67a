// ~/winelocale/src/paths.rs

use std::path::PathBuf;
use crate::{info, warn};

pub fn user_home_dir() -> Option<PathBuf> {
    // Primary (set in every sane Unix session)
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Fallback (passwd lookup via dirs-next)
    match dirs_next::home_dir() {
        Some(home) => {
            info!("Resolved home directory from passwd: {}", home.display());
            Some(home)
        }
        None => {
            warn!("Could not resolve home directory from HOME or passwd");
            None
        }
    }
}

/// Path of the persisted settings file, `~/.winelocalerc`.
pub fn settings_path() -> PathBuf {
    match user_home_dir() {
        Some(home) => home.join(".winelocalerc"),
        None => {
            warn!("No home directory, using .winelocalerc in current directory");
            PathBuf::from(".winelocalerc")
        }
    }
}

/// Path the generated registry patch is written to before each launch.
pub fn patch_path() -> PathBuf {
    std::env::temp_dir().join("winelocale.reg")
}
