use std::sync::Mutex;

/// Lifecycle of the single allowed main frame. The handle itself lives in the
/// host runtime; this state records where in its life the frame is so
/// re-activation and exit decisions do not depend on a nullable reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum MainWindowLifecycle {
    #[default]
    Uncreated,
    Created,
    Closed,
}

pub(crate) fn transition_on_create(_current: MainWindowLifecycle) -> MainWindowLifecycle {
    MainWindowLifecycle::Created
}

pub(crate) fn transition_on_destroy(current: MainWindowLifecycle) -> MainWindowLifecycle {
    match current {
        MainWindowLifecycle::Created => MainWindowLifecycle::Closed,
        other => other,
    }
}

#[derive(Debug, Default)]
pub(crate) struct MainWindowState {
    lifecycle: Mutex<MainWindowLifecycle>,
}

impl MainWindowState {
    pub(crate) fn lifecycle(&self) -> MainWindowLifecycle {
        self.lifecycle
            .lock()
            .map(|guard| *guard)
            .unwrap_or_default()
    }

    pub(crate) fn mark_created(&self) {
        if let Ok(mut guard) = self.lifecycle.lock() {
            *guard = transition_on_create(*guard);
        }
    }

    pub(crate) fn mark_closed(&self) {
        if let Ok(mut guard) = self.lifecycle.lock() {
            *guard = transition_on_destroy(*guard);
        }
    }

    /// Re-activation only rebuilds the frame when no live one exists.
    pub(crate) fn needs_recreation(&self) -> bool {
        matches!(
            self.lifecycle(),
            MainWindowLifecycle::Uncreated | MainWindowLifecycle::Closed
        )
    }
}

/// All-windows-closed exits everywhere except macOS, where the app stays
/// resident until quit explicitly. Explicit exits (a code is present) always
/// go through.
pub(crate) fn should_stay_resident_after_all_windows_closed(
    exit_code: Option<i32>,
    os: &str,
) -> bool {
    exit_code.is_none() && os == "macos"
}

#[cfg(test)]
mod tests {
    use super::{
        should_stay_resident_after_all_windows_closed, transition_on_destroy, MainWindowLifecycle,
        MainWindowState,
    };

    #[test]
    fn lifecycle_tracks_create_and_destroy() {
        let state = MainWindowState::default();
        assert_eq!(state.lifecycle(), MainWindowLifecycle::Uncreated);
        assert!(state.needs_recreation());

        state.mark_created();
        assert_eq!(state.lifecycle(), MainWindowLifecycle::Created);
        assert!(!state.needs_recreation());

        state.mark_closed();
        assert_eq!(state.lifecycle(), MainWindowLifecycle::Closed);
        assert!(state.needs_recreation());
    }

    #[test]
    fn destroy_before_create_does_not_mark_closed() {
        assert_eq!(
            transition_on_destroy(MainWindowLifecycle::Uncreated),
            MainWindowLifecycle::Uncreated
        );
    }

    #[test]
    fn recreation_is_allowed_after_close() {
        let state = MainWindowState::default();
        state.mark_created();
        state.mark_closed();
        state.mark_created();
        assert_eq!(state.lifecycle(), MainWindowLifecycle::Created);
    }

    #[test]
    fn all_windows_closed_exits_everywhere_but_macos() {
        assert!(should_stay_resident_after_all_windows_closed(None, "macos"));
        assert!(!should_stay_resident_after_all_windows_closed(None, "linux"));
        assert!(!should_stay_resident_after_all_windows_closed(
            None, "windows"
        ));
    }

    #[test]
    fn explicit_exit_requests_are_never_blocked() {
        assert!(!should_stay_resident_after_all_windows_closed(
            Some(0),
            "macos"
        ));
    }
}
