pub(crate) const MENU_OPEN_LOGS_FOLDER: &str = "menu_open_logs_folder";
pub(crate) const MENU_RESTART_GATEWAY: &str = "menu_restart_gateway";
pub(crate) const MENU_QUIT: &str = "menu_quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuAction {
    OpenLogsFolder,
    RestartGateway,
    Quit,
}

pub(crate) fn action_from_menu_id(menu_id: &str) -> Option<MenuAction> {
    match menu_id {
        MENU_OPEN_LOGS_FOLDER => Some(MenuAction::OpenLogsFolder),
        MENU_RESTART_GATEWAY => Some(MenuAction::RestartGateway),
        MENU_QUIT => Some(MenuAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_from_menu_id_maps_all_known_actions() {
        assert_eq!(
            action_from_menu_id(MENU_OPEN_LOGS_FOLDER),
            Some(MenuAction::OpenLogsFolder)
        );
        assert_eq!(
            action_from_menu_id(MENU_RESTART_GATEWAY),
            Some(MenuAction::RestartGateway)
        );
        assert_eq!(action_from_menu_id(MENU_QUIT), Some(MenuAction::Quit));
    }

    #[test]
    fn action_from_menu_id_returns_none_for_unknown_menu_id() {
        assert_eq!(action_from_menu_id("unknown-menu"), None);
    }
}
