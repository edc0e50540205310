use tauri::{
    menu::{Menu, MenuBuilder, MenuItemBuilder, PredefinedMenuItem, SubmenuBuilder},
    AppHandle,
};

use crate::{append_desktop_log, menu_actions, APP_TITLE};

/// Platform capabilities for the menu tree, evaluated once at install time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MenuPlatformSpec {
    /// Application-level submenu (About, Services, Hide, Quit).
    pub(crate) app_submenu: bool,
    /// Speech submenu appended to Edit.
    pub(crate) speech_submenu: bool,
    /// Window submenu with Zoom and Bring All to Front.
    pub(crate) extended_window_submenu: bool,
}

pub(crate) fn menu_platform_spec(os: &str) -> MenuPlatformSpec {
    let is_macos = os == "macos";
    MenuPlatformSpec {
        app_submenu: is_macos,
        speech_submenu: is_macos,
        extended_window_submenu: is_macos,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuInstallDecision {
    Install,
    SkipAlreadyInstalled,
}

pub(crate) fn decide_menu_install(menu_already_installed: bool) -> MenuInstallDecision {
    if menu_already_installed {
        MenuInstallDecision::SkipAlreadyInstalled
    } else {
        MenuInstallDecision::Install
    }
}

pub(crate) fn install_menu(app_handle: &AppHandle) -> Result<(), String> {
    match decide_menu_install(app_handle.menu().is_some()) {
        MenuInstallDecision::SkipAlreadyInstalled => {
            append_desktop_log("application menu already installed, skipping");
            return Ok(());
        }
        MenuInstallDecision::Install => {}
    }

    let spec = menu_platform_spec(std::env::consts::OS);
    let menu = build_menu(app_handle, spec)
        .map_err(|error| format!("Failed to build application menu: {error}"))?;
    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;
    Ok(())
}

fn build_menu(app_handle: &AppHandle, spec: MenuPlatformSpec) -> tauri::Result<Menu<tauri::Wry>> {
    let mut edit_builder = SubmenuBuilder::new(app_handle, "Edit")
        .undo()
        .redo()
        .separator()
        .cut()
        .copy()
        .paste()
        .select_all();
    if spec.speech_submenu {
        let start_speaking =
            MenuItemBuilder::with_id(menu_actions::MENU_START_SPEAKING, "Start Speaking")
                .build(app_handle)?;
        let stop_speaking =
            MenuItemBuilder::with_id(menu_actions::MENU_STOP_SPEAKING, "Stop Speaking")
                .build(app_handle)?;
        let speech_menu = SubmenuBuilder::new(app_handle, "Speech")
            .items(&[&start_speaking, &stop_speaking])
            .build()?;
        edit_builder = edit_builder.separator().item(&speech_menu);
    }
    let edit_menu = edit_builder.build()?;

    let reload = MenuItemBuilder::with_id(menu_actions::MENU_RELOAD, "Reload")
        .accelerator("CmdOrCtrl+R")
        .build(app_handle)?;
    let force_reload = MenuItemBuilder::with_id(menu_actions::MENU_FORCE_RELOAD, "Force Reload")
        .accelerator("CmdOrCtrl+Shift+R")
        .build(app_handle)?;
    let toggle_devtools =
        MenuItemBuilder::with_id(menu_actions::MENU_TOGGLE_DEVTOOLS, "Toggle Developer Tools")
            .accelerator("CmdOrCtrl+Shift+I")
            .build(app_handle)?;
    let reset_zoom = MenuItemBuilder::with_id(menu_actions::MENU_RESET_ZOOM, "Actual Size")
        .accelerator("CmdOrCtrl+0")
        .build(app_handle)?;
    let zoom_in = MenuItemBuilder::with_id(menu_actions::MENU_ZOOM_IN, "Zoom In")
        .accelerator("CmdOrCtrl+Plus")
        .build(app_handle)?;
    let zoom_out = MenuItemBuilder::with_id(menu_actions::MENU_ZOOM_OUT, "Zoom Out")
        .accelerator("CmdOrCtrl+-")
        .build(app_handle)?;
    let view_menu = SubmenuBuilder::new(app_handle, "View")
        .items(&[&reload, &force_reload, &toggle_devtools])
        .separator()
        .items(&[&reset_zoom, &zoom_in, &zoom_out])
        .separator()
        .fullscreen()
        .build()?;

    let window_menu = if spec.extended_window_submenu {
        SubmenuBuilder::new(app_handle, "Window")
            .close_window()
            .minimize()
            .maximize()
            .separator()
            .item(&PredefinedMenuItem::bring_all_to_front(app_handle, None)?)
            .build()?
    } else {
        SubmenuBuilder::new(app_handle, "Window")
            .minimize()
            .close_window()
            .build()?
    };

    let learn_more =
        MenuItemBuilder::with_id(menu_actions::MENU_LEARN_MORE, "Learn More").build(app_handle)?;
    let documentation = MenuItemBuilder::with_id(menu_actions::MENU_DOCUMENTATION, "Documentation")
        .build(app_handle)?;
    let search_issues = MenuItemBuilder::with_id(menu_actions::MENU_SEARCH_ISSUES, "Search Issues")
        .build(app_handle)?;
    let check_for_updates =
        MenuItemBuilder::with_id(menu_actions::MENU_CHECK_FOR_UPDATES, "Check for Updates")
            .build(app_handle)?;
    let help_menu = SubmenuBuilder::new(app_handle, "Help")
        .items(&[&learn_more, &documentation, &search_issues, &check_for_updates])
        .build()?;

    let mut root_builder = MenuBuilder::new(app_handle);
    if spec.app_submenu {
        let app_menu = SubmenuBuilder::new(app_handle, APP_TITLE)
            .about(None)
            .separator()
            .services()
            .separator()
            .hide()
            .hide_others()
            .show_all()
            .separator()
            .quit()
            .build()?;
        root_builder = root_builder.item(&app_menu);
    }
    root_builder
        .items(&[&edit_menu, &view_menu, &window_menu, &help_menu])
        .build()
}
