#![windows_subsystem = "windows"]
#![allow(non_snake_case)]

use dioxus::desktop::{ Config, LogicalSize, WindowBuilder };
use dioxus::prelude::*;
use user_portal::libs::ui;
use user_portal::state::config::AppConfig;
use user_portal::state::paths;
use user_portal::utils::constants::APP_NAME;
use user_portal::{ debug_print, utils };

fn main() {
    let config = AppConfig::load();

    // Initialize debug logging first
    utils::logger::init_debug_logging(config.debug_logging);

    env_logger::init();

    debug_print!("🚀 Initializing {}...", APP_NAME);
    debug_print!("📄 Config file: {}", paths::data::config_json().display());

    let window_width = 520;
    let default_height = 420;

    let window_builder = WindowBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size(LogicalSize::new(window_width, default_height))
        .with_min_inner_size(LogicalSize::new(window_width, 320))
        .with_resizable(true);

    let config = Config::new().with_window(window_builder).with_menu(None);

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app_with_stylesheets)
}

fn app_with_stylesheets() -> Element {
    rsx! {
        ui::app {}
    }
}
