/// Centralized path definitions
///
/// ## Path Structure
/// - System app data directory (e.g. ~/.local/share/user-portal) holds `config.json`
/// - Falls back to `data/` next to the executable when no home directory is known
use std::path::PathBuf;
use std::sync::OnceLock;

use crate::debug_print;
use crate::utils::constants::APP_NAME_LOWERCASE;

/// Get the application root directory (where the executable is located)
fn get_app_root() -> &'static PathBuf {
    static APP_ROOT: OnceLock<PathBuf> = OnceLock::new();
    APP_ROOT.get_or_init(|| {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                debug_print!("📂 App root (from exe): {}", exe_dir.display());
                return exe_dir.to_path_buf();
            }
        }

        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        debug_print!("📂 App root (fallback - from cwd): {}", cwd.display());
        cwd
    })
}

/// Get the system app data directory for the portal
/// - Windows: %APPDATA%/user-portal
/// - macOS: ~/Library/Application Support/user-portal
/// - Linux: ~/.local/share/user-portal
fn get_system_app_data_dir() -> PathBuf {
    use directories::BaseDirs;

    match BaseDirs::new() {
        Some(base_dirs) => base_dirs.data_dir().join(APP_NAME_LOWERCASE),
        None => get_app_root().join("data"),
    }
}

/// Application data directory paths
pub mod data {
    use super::get_system_app_data_dir;
    use crate::utils::constants::CONFIG_FILE_NAME;
    use std::path::PathBuf;

    pub fn data_dir() -> PathBuf {
        get_system_app_data_dir()
    }

    /// Application configuration file
    pub fn config_json() -> PathBuf {
        data_dir().join(CONFIG_FILE_NAME)
    }
}
