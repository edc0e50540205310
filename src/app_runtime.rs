use std::env;

use tauri::{webview::PageLoadEvent, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log, append_startup_log, desktop_state, logging,
    main_window, media_keys, menu_handler, menu_setup, popup_router, update_check,
    window_actions, window_lifecycle, ContentZoom, LaunchOptions, MainWindowState, PopupRegistry,
    UpdateCheckState, MAIN_WINDOW_LABEL,
};

pub(crate) fn run() {
    let options = LaunchOptions::from_process_args();
    let auto_update_check_enabled = desktop_state::read_cached_auto_update_check_enabled();
    if auto_update_check_enabled.is_none() {
        // First run: seed the state file with the default.
        if let Err(error) = desktop_state::write_cached_auto_update_check_enabled(true) {
            append_startup_log(&format!("failed to seed desktop state: {error}"));
        }
    }

    append_startup_log("desktop process starting");
    if let Some(log_path) = logging::resolve_desktop_log_path() {
        append_startup_log(&format!("desktop log path: {}", log_path.display()));
    }
    if options.debug {
        append_startup_log("debug mode enabled");
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            append_desktop_log("second launch attempt, focusing existing window");
            window_actions::focus_main_window(app, append_desktop_log);
        }))
        .plugin(tauri_plugin_window_state::Builder::default().build())
        .plugin(tauri_plugin_dialog::init())
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .manage(MainWindowState::default())
        .manage(UpdateCheckState::new(
            auto_update_check_enabled.unwrap_or(true),
        ))
        .manage(PopupRegistry::default())
        .manage(ContentZoom::default())
        .manage(options)
        .on_window_event(|window, event| {
            let app_handle = window.app_handle();
            match event {
                WindowEvent::Resized(size) if window.label() == MAIN_WINDOW_LABEL => {
                    let debug = app_handle.state::<LaunchOptions>().debug;
                    main_window::apply_content_layout(app_handle, *size, debug, append_desktop_log);
                }
                WindowEvent::Destroyed => {
                    if window.label() == MAIN_WINDOW_LABEL {
                        app_handle.state::<MainWindowState>().mark_closed();
                        append_desktop_log("main window destroyed");
                    } else if popup_router::is_popup_label(window.label()) {
                        app_handle.state::<PopupRegistry>().remove(window.label());
                    }
                }
                _ => {}
            }
        })
        .on_page_load(|webview, payload| match payload.event() {
            PageLoadEvent::Finished if popup_router::is_popup_label(webview.label()) => {
                popup_router::handle_popup_page_finished(webview.app_handle(), webview.label());
            }
            _ => {}
        })
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref());
        })
        .setup(move |app| {
            let app_handle = app.handle().clone();

            if let Err(error) = main_window::create_main_window(&app_handle, &options) {
                append_startup_log(&format!("failed to create main window: {error}"));
            }
            if let Err(error) = menu_setup::install_menu(&app_handle) {
                append_startup_log(&format!("failed to install application menu: {error}"));
            }
            if let Err(error) = media_keys::register_media_keys(&app_handle) {
                append_startup_log(&format!("failed to register media keys: {error}"));
            }
            update_check::spawn_startup_update_check(&app_handle);

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { api, code, .. } => {
                if window_lifecycle::should_stay_resident_after_all_windows_closed(
                    code,
                    env::consts::OS,
                ) {
                    append_desktop_log("all windows closed, staying resident for re-activation");
                    api.prevent_exit();
                }
            }
            RunEvent::Reopen { .. } => handle_reopen(app_handle),
            RunEvent::Exit => append_shutdown_log("desktop process exiting"),
            _ => {}
        });
}

/// macOS re-activation: rebuild the main window when none is alive. Each
/// rebuild re-triggers the startup update check, like the initial creation.
fn handle_reopen(app_handle: &tauri::AppHandle) {
    let state = app_handle.state::<MainWindowState>();
    if !state.needs_recreation() {
        return;
    }

    append_desktop_log("re-activation with no main window, recreating");
    let options = *app_handle.state::<LaunchOptions>().inner();
    if let Err(error) = main_window::create_main_window(app_handle, &options) {
        append_desktop_log(&format!("failed to recreate main window: {error}"));
        return;
    }
    update_check::spawn_startup_update_check(app_handle);
}
