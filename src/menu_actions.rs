pub(crate) const MENU_RELOAD: &str = "menu_reload";
pub(crate) const MENU_FORCE_RELOAD: &str = "menu_force_reload";
pub(crate) const MENU_TOGGLE_DEVTOOLS: &str = "menu_toggle_devtools";
pub(crate) const MENU_RESET_ZOOM: &str = "menu_reset_zoom";
pub(crate) const MENU_ZOOM_IN: &str = "menu_zoom_in";
pub(crate) const MENU_ZOOM_OUT: &str = "menu_zoom_out";
pub(crate) const MENU_START_SPEAKING: &str = "menu_start_speaking";
pub(crate) const MENU_STOP_SPEAKING: &str = "menu_stop_speaking";
pub(crate) const MENU_LEARN_MORE: &str = "menu_learn_more";
pub(crate) const MENU_DOCUMENTATION: &str = "menu_documentation";
pub(crate) const MENU_SEARCH_ISSUES: &str = "menu_search_issues";
pub(crate) const MENU_CHECK_FOR_UPDATES: &str = "menu_check_for_updates";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    Reload,
    ForceReload,
    ToggleDevtools,
    ResetZoom,
    ZoomIn,
    ZoomOut,
    StartSpeaking,
    StopSpeaking,
    LearnMore,
    Documentation,
    SearchIssues,
    CheckForUpdates,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_RELOAD => Some(MenuAction::Reload),
        MENU_FORCE_RELOAD => Some(MenuAction::ForceReload),
        MENU_TOGGLE_DEVTOOLS => Some(MenuAction::ToggleDevtools),
        MENU_RESET_ZOOM => Some(MenuAction::ResetZoom),
        MENU_ZOOM_IN => Some(MenuAction::ZoomIn),
        MENU_ZOOM_OUT => Some(MenuAction::ZoomOut),
        MENU_START_SPEAKING => Some(MenuAction::StartSpeaking),
        MENU_STOP_SPEAKING => Some(MenuAction::StopSpeaking),
        MENU_LEARN_MORE => Some(MenuAction::LearnMore),
        MENU_DOCUMENTATION => Some(MenuAction::Documentation),
        MENU_SEARCH_ISSUES => Some(MenuAction::SearchIssues),
        MENU_CHECK_FOR_UPDATES => Some(MenuAction::CheckForUpdates),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        let cases = [
            (MENU_RELOAD, MenuAction::Reload),
            (MENU_FORCE_RELOAD, MenuAction::ForceReload),
            (MENU_TOGGLE_DEVTOOLS, MenuAction::ToggleDevtools),
            (MENU_RESET_ZOOM, MenuAction::ResetZoom),
            (MENU_ZOOM_IN, MenuAction::ZoomIn),
            (MENU_ZOOM_OUT, MenuAction::ZoomOut),
            (MENU_START_SPEAKING, MenuAction::StartSpeaking),
            (MENU_STOP_SPEAKING, MenuAction::StopSpeaking),
            (MENU_LEARN_MORE, MenuAction::LearnMore),
            (MENU_DOCUMENTATION, MenuAction::Documentation),
            (MENU_SEARCH_ISSUES, MenuAction::SearchIssues),
            (MENU_CHECK_FOR_UPDATES, MenuAction::CheckForUpdates),
        ];

        for (menu_id, expected) in cases {
            assert_eq!(action_from_menu_id(menu_id), Some(expected));
        }
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
        assert_eq!(action_from_menu_id(""), None);
    }
}
