/// Debug logging utility
use std::sync::OnceLock;

use crate::utils::constants::DEBUG_ENV_VAR;

static DEBUG_ENABLED: OnceLock<bool> = OnceLock::new();

/// Initialize debug logging. The environment variable wins over the config flag.
/// Only the first call has an effect.
pub fn init_debug_logging(config_enabled: bool) {
    let enabled = match std::env::var(DEBUG_ENV_VAR) {
        Ok(value) => matches!(value.trim(), "1" | "true" | "yes" | "on"),
        Err(_) => config_enabled,
    };
    if DEBUG_ENABLED.set(enabled).is_ok() && enabled {
        println!("🐛 Debug logging enabled");
    }
}

/// Check if debug logging is enabled
pub fn is_debug_enabled() -> bool {
    *DEBUG_ENABLED.get().unwrap_or(&false)
}

/// Debug print macro - only prints if debug console is enabled
#[macro_export]
macro_rules! debug_print {
    ($($arg:tt)*) => {
        if $crate::utils::logger::is_debug_enabled() {
            println!($($arg)*);
        }
    };
}

/// Debug error print macro - only prints if debug console is enabled
#[macro_export]
macro_rules! debug_eprint {
    ($($arg:tt)*) => {
        if $crate::utils::logger::is_debug_enabled() {
            eprintln!($($arg)*);
        }
    };
}

/// Always error print macro - for critical errors that should always show
#[macro_export]
macro_rules! always_eprint {
    ($($arg:tt)*) => {
        eprintln!($($arg)*)
    };
}
