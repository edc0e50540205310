use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex,
    },
};

use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use url::Url;

use crate::{
    append_desktop_log, APP_TITLE, IN_PLACE_NAVIGATION_DOMAIN, POPUP_LABEL_PREFIX,
    POPUP_WINDOW_HEIGHT, POPUP_WINDOW_WIDTH,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavigationDecision {
    AllowInPlace,
    OpenPopup,
}

/// Web navigations that stay on the target site (or one of its subdomains)
/// remain in the content view; anything else becomes a popup window.
/// Non-web schemes (about:, blob:, devtools:) are left to the webview.
pub(crate) fn decide_navigation(url: &Url, in_place_domain: &str) -> NavigationDecision {
    if !matches!(url.scheme(), "http" | "https") {
        return NavigationDecision::AllowInPlace;
    }

    let Some(host) = url.host_str() else {
        return NavigationDecision::AllowInPlace;
    };

    let suffix = format!(".{in_place_domain}");
    if host == in_place_domain || host.ends_with(&suffix) {
        NavigationDecision::AllowInPlace
    } else {
        NavigationDecision::OpenPopup
    }
}

/// Phase of one popup window. Popups are created hidden and only shown once
/// their first page load finishes, so a blank window never flashes up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PopupPhase {
    Requested,
    Created,
    Ready,
    Shown,
}

#[derive(Debug, Default)]
pub(crate) struct PopupRegistry {
    phases: Mutex<HashMap<String, PopupPhase>>,
    counter: AtomicU64,
}

impl PopupRegistry {
    /// Allocates a fresh popup label and records the request.
    pub(crate) fn begin_request(&self) -> String {
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        let label = format!("{POPUP_LABEL_PREFIX}{sequence}");
        if let Ok(mut guard) = self.phases.lock() {
            guard.insert(label.clone(), PopupPhase::Requested);
        }
        label
    }

    pub(crate) fn mark_created(&self, label: &str) -> bool {
        self.advance(label, PopupPhase::Requested, PopupPhase::Created)
    }

    /// Returns true only on the first readiness signal; later page loads in
    /// the same popup are not show triggers.
    pub(crate) fn mark_ready(&self, label: &str) -> bool {
        self.advance(label, PopupPhase::Created, PopupPhase::Ready)
    }

    pub(crate) fn mark_shown(&self, label: &str) -> bool {
        self.advance(label, PopupPhase::Ready, PopupPhase::Shown)
    }

    pub(crate) fn remove(&self, label: &str) {
        if let Ok(mut guard) = self.phases.lock() {
            guard.remove(label);
        }
    }

    pub(crate) fn phase(&self, label: &str) -> Option<PopupPhase> {
        self.phases
            .lock()
            .ok()
            .and_then(|guard| guard.get(label).copied())
    }

    fn advance(&self, label: &str, expected: PopupPhase, next: PopupPhase) -> bool {
        let Ok(mut guard) = self.phases.lock() else {
            return false;
        };
        match guard.get_mut(label) {
            Some(phase) if *phase == expected => {
                *phase = next;
                true
            }
            _ => false,
        }
    }
}

pub(crate) fn is_popup_label(label: &str) -> bool {
    label.starts_with(POPUP_LABEL_PREFIX)
}

/// Navigation hook for the content view. Returning false cancels the
/// in-place navigation; the URL is then reopened in a popup window.
pub(crate) fn route_navigation(app_handle: &AppHandle, url: &Url) -> bool {
    match decide_navigation(url, IN_PLACE_NAVIGATION_DOMAIN) {
        NavigationDecision::AllowInPlace => true,
        NavigationDecision::OpenPopup => {
            let app_handle = app_handle.clone();
            let url = url.clone();
            tauri::async_runtime::spawn(async move {
                if let Err(error) = open_popup_window(&app_handle, url) {
                    append_desktop_log(&format!("failed to open popup window: {error}"));
                }
            });
            false
        }
    }
}

pub(crate) fn open_popup_window(app_handle: &AppHandle, url: Url) -> Result<(), String> {
    let registry = app_handle.state::<PopupRegistry>();
    let label = registry.begin_request();
    append_desktop_log(&format!("routing popup request for {url} to window {label}"));

    WebviewWindowBuilder::new(app_handle, &label, WebviewUrl::External(url))
        .title(APP_TITLE)
        .inner_size(POPUP_WINDOW_WIDTH, POPUP_WINDOW_HEIGHT)
        .visible(false)
        .build()
        .map_err(|error| format!("Failed to create popup window {label}: {error}"))?;

    registry.mark_created(&label);
    Ok(())
}

/// Called when a popup's page load finishes; shows the window exactly once.
pub(crate) fn handle_popup_page_finished(app_handle: &AppHandle, label: &str) {
    let registry = app_handle.state::<PopupRegistry>();
    if !registry.mark_ready(label) {
        return;
    }

    let Some(window) = app_handle.get_webview_window(label) else {
        append_desktop_log(&format!("popup {label} is ready but its window is gone"));
        return;
    };

    match window.show() {
        Ok(()) => {
            registry.mark_shown(label);
            append_desktop_log(&format!("popup {label} shown"));
        }
        Err(error) => {
            append_desktop_log(&format!("failed to show popup {label}: {error}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::{
        decide_navigation, is_popup_label, NavigationDecision, PopupPhase, PopupRegistry,
    };

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("test url")
    }

    #[test]
    fn same_site_navigations_stay_in_place() {
        assert_eq!(
            decide_navigation(&url("https://messages.google.com/web/"), "google.com"),
            NavigationDecision::AllowInPlace
        );
        assert_eq!(
            decide_navigation(&url("https://accounts.google.com/signin"), "google.com"),
            NavigationDecision::AllowInPlace
        );
        assert_eq!(
            decide_navigation(&url("https://google.com/"), "google.com"),
            NavigationDecision::AllowInPlace
        );
    }

    #[test]
    fn external_links_open_popups() {
        assert_eq!(
            decide_navigation(&url("https://example.com/article"), "google.com"),
            NavigationDecision::OpenPopup
        );
        // A lookalike domain is not a subdomain.
        assert_eq!(
            decide_navigation(&url("https://notgoogle.com/"), "google.com"),
            NavigationDecision::OpenPopup
        );
    }

    #[test]
    fn non_web_schemes_are_left_alone() {
        assert_eq!(
            decide_navigation(&url("about:blank"), "google.com"),
            NavigationDecision::AllowInPlace
        );
    }

    #[test]
    fn popup_labels_are_unique_and_recognizable() {
        let registry = PopupRegistry::default();
        let first = registry.begin_request();
        let second = registry.begin_request();

        assert_ne!(first, second);
        assert!(is_popup_label(&first));
        assert!(!is_popup_label("main"));
    }

    #[test]
    fn popup_phases_advance_in_order() {
        let registry = PopupRegistry::default();
        let label = registry.begin_request();
        assert_eq!(registry.phase(&label), Some(PopupPhase::Requested));

        assert!(registry.mark_created(&label));
        assert!(registry.mark_ready(&label));
        assert!(registry.mark_shown(&label));
        assert_eq!(registry.phase(&label), Some(PopupPhase::Shown));
    }

    #[test]
    fn readiness_only_triggers_once() {
        let registry = PopupRegistry::default();
        let label = registry.begin_request();
        registry.mark_created(&label);

        assert!(registry.mark_ready(&label));
        assert!(!registry.mark_ready(&label));
    }

    #[test]
    fn out_of_order_transitions_are_rejected() {
        let registry = PopupRegistry::default();
        let label = registry.begin_request();

        assert!(!registry.mark_ready(&label));
        assert!(!registry.mark_shown(&label));
        assert!(!registry.mark_created("unknown-label"));
    }

    #[test]
    fn removed_popups_are_forgotten() {
        let registry = PopupRegistry::default();
        let label = registry.begin_request();
        registry.remove(&label);
        assert_eq!(registry.phase(&label), None);
    }
}
