use tauri::{AppHandle, Manager};

use crate::MAIN_WINDOW_LABEL;

/// Restores (if minimized) and focuses the main window. Used when a second
/// launch attempt is redirected to the running instance.
pub(crate) fn focus_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_window(MAIN_WINDOW_LABEL) else {
        log("focus_main_window skipped: main window not found");
        return;
    };

    if let Ok(true) = window.is_minimized() {
        if let Err(error) = window.unminimize() {
            log(&format!("failed to restore minimized main window: {error}"));
        }
    }
    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}
