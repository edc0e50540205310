use std::time::Duration;

pub(crate) const APP_TITLE: &str = "Messages Desktop";

/// The remote web client this shell wraps.
pub(crate) const TARGET_URL: &str = "https://messages.google.com/web/";
pub(crate) const TARGET_URL_ENV: &str = "MESSAGES_DESKTOP_TARGET_URL";

/// Navigations that stay inside this domain (or a subdomain of it) remain in
/// the content view; everything else is routed to a popup window.
pub(crate) const IN_PLACE_NAVIGATION_DOMAIN: &str = "google.com";

pub(crate) const ROOT_DIR_ENV: &str = "MESSAGES_DESKTOP_ROOT";
pub(crate) const ROOT_DIR_NAME: &str = ".messages-desktop";
pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_STATE_FILE: &str = "desktop_state.json";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const LANDING_WEBVIEW_LABEL: &str = "main-landing";
pub(crate) const CONTENT_WEBVIEW_LABEL: &str = "main-content";
pub(crate) const POPUP_LABEL_PREFIX: &str = "popup-";

pub(crate) const DEFAULT_WINDOW_WIDTH: f64 = 1280.0;
pub(crate) const DEFAULT_WINDOW_HEIGHT: f64 = 720.0;
pub(crate) const POPUP_WINDOW_WIDTH: f64 = 1180.0;
pub(crate) const POPUP_WINDOW_HEIGHT: f64 = 620.0;
pub(crate) const DEBUG_CONTENT_WIDTH_RATIO: f64 = 0.7;

pub(crate) const CONTENT_ZOOM_STEP: f64 = 0.1;
pub(crate) const CONTENT_ZOOM_MIN: f64 = 0.3;
pub(crate) const CONTENT_ZOOM_MAX: f64 = 3.0;

pub(crate) const RELEASE_FEED_URL_ENV: &str = "MESSAGES_DESKTOP_RELEASE_FEED_URL";
pub(crate) const DEFAULT_RELEASE_FEED_URL: &str =
    "https://api.github.com/repos/messages-desktop/messages-desktop";
pub(crate) const UPDATE_PROMPT_DELAY: Duration = Duration::from_secs(3);
pub(crate) const UPDATE_PROMPT_TITLE: &str = "Update";
pub(crate) const UPDATE_PROMPT_MESSAGE: &str =
    "An update is available, would you like to download it?";

pub(crate) const LEARN_MORE_URL: &str = "https://github.com/messages-desktop/messages-desktop";
pub(crate) const DOCUMENTATION_URL: &str =
    "https://github.com/messages-desktop/messages-desktop/blob/master/README.md";
pub(crate) const SEARCH_ISSUES_URL: &str =
    "https://github.com/messages-desktop/messages-desktop/issues";
