use tauri::{AppHandle, Manager};
use tauri_plugin_global_shortcut::{
    Code, GlobalShortcutExt, Modifiers, Shortcut, ShortcutState,
};

use crate::{append_desktop_log, CONTENT_WEBVIEW_LABEL};

/// Key the remote web client expects for each media shortcut. The site binds
/// its own keyboard shortcuts, so the media keys are translated into the
/// matching synthetic key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MediaKeyTarget {
    PlayPause,
    NextTrack,
}

impl MediaKeyTarget {
    fn key(self) -> &'static str {
        match self {
            Self::PlayPause => " ",
            Self::NextTrack => "ArrowRight",
        }
    }

    fn code(self) -> &'static str {
        match self {
            Self::PlayPause => "Space",
            Self::NextTrack => "ArrowRight",
        }
    }
}

pub(crate) fn register_media_keys(app_handle: &AppHandle) -> Result<(), String> {
    let play_pause = Shortcut::new(None, Code::MediaPlayPause);
    let next_track = Shortcut::new(None, Code::MediaTrackNext);

    app_handle
        .global_shortcut()
        .on_shortcuts([play_pause, next_track], |app, shortcut, event| {
            if !matches!(event.state, ShortcutState::Pressed) {
                return;
            }

            let target = if shortcut.matches(Modifiers::empty(), Code::MediaPlayPause) {
                MediaKeyTarget::PlayPause
            } else if shortcut.matches(Modifiers::empty(), Code::MediaTrackNext) {
                MediaKeyTarget::NextTrack
            } else {
                return;
            };

            forward_media_key(app, target);
        })
        .map_err(|error| format!("Failed to register media key shortcuts: {error}"))
}

fn forward_media_key(app_handle: &AppHandle, target: MediaKeyTarget) {
    let Some(content) = app_handle.webviews().get(CONTENT_WEBVIEW_LABEL).cloned() else {
        append_desktop_log("media key ignored: content view not found");
        return;
    };

    if let Err(error) = content.eval(&key_event_script(target)) {
        append_desktop_log(&format!("failed to forward media key: {error}"));
    }
}

/// Dispatches a keydown/keyup pair into the page, mimicking a real key press.
fn key_event_script(target: MediaKeyTarget) -> String {
    format!(
        r#"(() => {{
  for (const type of ["keydown", "keyup"]) {{
    document.dispatchEvent(new KeyboardEvent(type, {{ key: "{key}", code: "{code}", bubbles: true }}));
  }}
}})();"#,
        key = target.key(),
        code = target.code(),
    )
}

#[cfg(test)]
mod tests {
    use super::{key_event_script, MediaKeyTarget};

    #[test]
    fn play_pause_synthesizes_a_space_press() {
        let script = key_event_script(MediaKeyTarget::PlayPause);
        assert!(script.contains(r#"code: "Space""#));
        assert!(script.contains("keydown"));
        assert!(script.contains("keyup"));
    }

    #[test]
    fn next_track_synthesizes_a_right_arrow_press() {
        let script = key_event_script(MediaKeyTarget::NextTrack);
        assert!(script.contains(r#"key: "ArrowRight""#));
        assert!(script.contains("keydown"));
        assert!(script.contains("keyup"));
    }
}
