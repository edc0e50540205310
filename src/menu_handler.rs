use tauri::{AppHandle, Manager};
use tauri_plugin_opener::OpenerExt;

use crate::{
    append_desktop_log, append_update_log, main_window, menu_actions,
    menu_actions::MenuAction, update_check, ContentZoom, CONTENT_WEBVIEW_LABEL, CONTENT_ZOOM_STEP,
    DOCUMENTATION_URL, LEARN_MORE_URL, SEARCH_ISSUES_URL,
};

const START_SPEAKING_SCRIPT: &str = r#"(() => {
  const selection = window.getSelection().toString();
  if (selection) {
    speechSynthesis.cancel();
    speechSynthesis.speak(new SpeechSynthesisUtterance(selection));
  }
})();"#;

const STOP_SPEAKING_SCRIPT: &str = "speechSynthesis.cancel();";

pub(crate) fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match menu_actions::action_from_menu_id(menu_id) {
        Some(MenuAction::LearnMore) => open_external_link(app_handle, LEARN_MORE_URL),
        Some(MenuAction::Documentation) => open_external_link(app_handle, DOCUMENTATION_URL),
        Some(MenuAction::SearchIssues) => open_external_link(app_handle, SEARCH_ISSUES_URL),
        Some(MenuAction::CheckForUpdates) => {
            append_update_log("menu requested update check");
            update_check::spawn_update_check(app_handle);
        }
        Some(MenuAction::Reload) => reload_content_view(app_handle),
        Some(MenuAction::ForceReload) => force_reload_content_view(app_handle),
        Some(MenuAction::ToggleDevtools) => toggle_content_devtools(app_handle),
        Some(MenuAction::ResetZoom) => {
            let factor = app_handle.state::<ContentZoom>().reset();
            apply_content_zoom(app_handle, factor);
        }
        Some(MenuAction::ZoomIn) => {
            let factor = app_handle.state::<ContentZoom>().adjust(CONTENT_ZOOM_STEP);
            apply_content_zoom(app_handle, factor);
        }
        Some(MenuAction::ZoomOut) => {
            let factor = app_handle.state::<ContentZoom>().adjust(-CONTENT_ZOOM_STEP);
            apply_content_zoom(app_handle, factor);
        }
        Some(MenuAction::StartSpeaking) => eval_in_content_view(app_handle, START_SPEAKING_SCRIPT),
        Some(MenuAction::StopSpeaking) => eval_in_content_view(app_handle, STOP_SPEAKING_SCRIPT),
        None => {}
    }
}

fn open_external_link(app_handle: &AppHandle, url: &str) {
    if let Err(error) = app_handle.opener().open_url(url, None::<&str>) {
        append_desktop_log(&format!("failed to open external link {url}: {error}"));
    }
}

fn reload_content_view(app_handle: &AppHandle) {
    eval_in_content_view(app_handle, "window.location.reload();");
}

/// Force reload re-navigates to the target URL instead of reloading whatever
/// page the content view drifted to.
fn force_reload_content_view(app_handle: &AppHandle) {
    let target_url = match main_window::resolve_target_url() {
        Ok(url) => url,
        Err(error) => {
            append_desktop_log(&format!("force reload skipped: {error}"));
            return;
        }
    };

    let Some(mut content) = app_handle.webviews().get(CONTENT_WEBVIEW_LABEL).cloned() else {
        append_desktop_log("force reload skipped: content view not found");
        return;
    };
    if let Err(error) = content.navigate(target_url) {
        append_desktop_log(&format!("failed to force reload content view: {error}"));
    }
}

fn toggle_content_devtools(app_handle: &AppHandle) {
    let Some(content) = app_handle.webviews().get(CONTENT_WEBVIEW_LABEL).cloned() else {
        append_desktop_log("devtools toggle skipped: content view not found");
        return;
    };

    if content.is_devtools_open() {
        content.close_devtools();
    } else {
        content.open_devtools();
    }
}

fn apply_content_zoom(app_handle: &AppHandle, factor: f64) {
    let Some(content) = app_handle.webviews().get(CONTENT_WEBVIEW_LABEL).cloned() else {
        append_desktop_log("zoom skipped: content view not found");
        return;
    };
    if let Err(error) = content.set_zoom(factor) {
        append_desktop_log(&format!("failed to set content zoom to {factor}: {error}"));
    }
}

fn eval_in_content_view(app_handle: &AppHandle, script: &str) {
    let Some(content) = app_handle.webviews().get(CONTENT_WEBVIEW_LABEL).cloned() else {
        append_desktop_log("script dispatch skipped: content view not found");
        return;
    };
    if let Err(error) = content.eval(script) {
        append_desktop_log(&format!("failed to evaluate script in content view: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::{START_SPEAKING_SCRIPT, STOP_SPEAKING_SCRIPT};

    #[test]
    fn speech_scripts_drive_the_speech_synthesis_api() {
        assert!(START_SPEAKING_SCRIPT.contains("speechSynthesis.speak"));
        assert!(START_SPEAKING_SCRIPT.contains("getSelection"));
        assert!(STOP_SPEAKING_SCRIPT.contains("speechSynthesis.cancel"));
    }
}
