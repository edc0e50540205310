#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod content_bounds;
mod desktop_state;
mod launch_options;
mod logging;
mod main_window;
mod media_keys;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod popup_router;
mod release_feed;
mod runtime_paths;
mod update_check;
mod update_platform;
mod window_actions;
mod window_lifecycle;

pub(crate) use app_constants::*;
pub(crate) use app_types::{AtomicFlagGuard, ContentZoom, UpdateCheckState};
pub(crate) use launch_options::LaunchOptions;
pub(crate) use logging::{
    append_desktop_log, append_shutdown_log, append_startup_log, append_update_log,
};
pub(crate) use popup_router::PopupRegistry;
pub(crate) use window_lifecycle::MainWindowState;

fn main() {
    app_runtime::run();
}
