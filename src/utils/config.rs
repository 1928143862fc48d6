use crate::{ debug_eprint, debug_print };
use crate::state::config::AppConfig;
use crate::state::paths;
use crate::utils::delay;
use dioxus::prelude::*;

/// Milliseconds between config file polls
const CONFIG_POLL_INTERVAL_MS: u64 = 1000;

/// Hook that keeps the config in sync with the file on disk,
/// so edits to config.json show up without restarting the window
pub fn use_fresh_config() -> Signal<AppConfig> {
    let mut config = use_signal(AppConfig::load);

    use_effect(move || {
        spawn(async move {
            loop {
                delay::Delay::ms(CONFIG_POLL_INTERVAL_MS).await;
                // Keep the last good config while the file is missing or mid-edit
                match AppConfig::try_load_from(&paths::data::config_json()) {
                    Ok(fresh_config) if fresh_config != *config.peek() => {
                        debug_print!("[config_utils] Config changed on disk, reloading");
                        config.set(fresh_config);
                    }
                    Ok(_) => {}
                    Err(e) => debug_eprint!("[config_utils] Ignoring unreadable config: {}", e),
                }
            }
        });
    });

    config
}
