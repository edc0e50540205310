use std::env;

use tauri::{
    webview::WebviewBuilder, window::WindowBuilder, AppHandle, Manager, PhysicalPosition,
    PhysicalSize, WebviewUrl,
};
use url::Url;

use crate::{
    append_desktop_log, append_startup_log, content_bounds, popup_router, LaunchOptions,
    MainWindowState, APP_TITLE, CONTENT_WEBVIEW_LABEL, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH, LANDING_WEBVIEW_LABEL, MAIN_WINDOW_LABEL, TARGET_URL, TARGET_URL_ENV,
};

pub(crate) fn resolve_target_url() -> Result<Url, String> {
    if let Ok(raw) = env::var(TARGET_URL_ENV) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            match Url::parse(trimmed) {
                Ok(url) => return Ok(url),
                Err(error) => append_startup_log(&format!(
                    "ignoring invalid {TARGET_URL_ENV} value '{trimmed}': {error}"
                )),
            }
        }
    }

    Url::parse(TARGET_URL).map_err(|error| format!("Built-in target url is invalid: {error}"))
}

/// Creates the main frame with its two child webviews: the local landing
/// document as a full-size background layer, and the remote content view on
/// top of it. Saved geometry is reapplied by the window-state plugin.
pub(crate) fn create_main_window(
    app_handle: &AppHandle,
    options: &LaunchOptions,
) -> Result<(), String> {
    let target_url = resolve_target_url()?;

    let window = WindowBuilder::new(app_handle, MAIN_WINDOW_LABEL)
        .title(APP_TITLE)
        .inner_size(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT)
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;

    let frame_size = window
        .inner_size()
        .map_err(|error| format!("Failed to read main window size: {error}"))?;

    let landing = WebviewBuilder::new(LANDING_WEBVIEW_LABEL, WebviewUrl::App("index.html".into()));
    window
        .add_child(
            landing,
            PhysicalPosition::new(0, 0),
            PhysicalSize::new(frame_size.width, frame_size.height),
        )
        .map_err(|error| format!("Failed to attach landing view: {error}"))?;

    let bounds =
        content_bounds::content_view_bounds(frame_size.width, frame_size.height, options.debug);
    let router_handle = app_handle.clone();
    let content_builder = WebviewBuilder::new(CONTENT_WEBVIEW_LABEL, WebviewUrl::External(target_url))
        .on_navigation(move |url| popup_router::route_navigation(&router_handle, url));
    let content = window
        .add_child(
            content_builder,
            PhysicalPosition::new(bounds.x, bounds.y),
            PhysicalSize::new(bounds.width, bounds.height),
        )
        .map_err(|error| format!("Failed to attach content view: {error}"))?;

    if options.debug {
        content.open_devtools();
        if let Err(error) = window.maximize() {
            append_desktop_log(&format!("failed to maximize debug window: {error}"));
        }
    }

    app_handle.state::<MainWindowState>().mark_created();
    append_desktop_log(&format!(
        "main window created, content bounds {}x{}",
        bounds.width, bounds.height
    ));
    Ok(())
}

/// Re-lays-out both child webviews after a frame resize: the landing layer
/// fills the frame, the content view gets the computed bounds.
pub(crate) fn apply_content_layout<F>(
    app_handle: &AppHandle,
    frame_size: PhysicalSize<u32>,
    debug: bool,
    log: F,
) where
    F: Fn(&str),
{
    let webviews = app_handle.webviews();

    if let Some(landing) = webviews.get(LANDING_WEBVIEW_LABEL) {
        if let Err(error) = landing.set_size(frame_size) {
            log(&format!("failed to resize landing view: {error}"));
        }
    }

    let Some(content) = webviews.get(CONTENT_WEBVIEW_LABEL) else {
        return;
    };
    let bounds = content_bounds::content_view_bounds(frame_size.width, frame_size.height, debug);
    if let Err(error) = content.set_position(PhysicalPosition::new(bounds.x, bounds.y)) {
        log(&format!("failed to reposition content view: {error}"));
    }
    if let Err(error) = content.set_size(PhysicalSize::new(bounds.width, bounds.height)) {
        log(&format!("failed to resize content view: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_target_url;

    #[test]
    fn built_in_target_url_parses() {
        let url = resolve_target_url().expect("target url");
        assert_eq!(url.host_str(), Some("messages.google.com"));
    }
}
