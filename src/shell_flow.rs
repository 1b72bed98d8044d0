//! Pure decisions behind the GUI lifecycle callbacks, kept separate from the
//! Tauri event loop so they can be exercised without a running webview.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExitRequestDecision {
    KeepRunning,
    Exit,
}

/// An exit request without a code means the last window closed; the platform
/// convention decides whether the app stays alive (macOS) or quits.
/// An explicit exit code always wins.
pub(crate) fn decide_exit_request(
    exit_code: Option<i32>,
    platform_keeps_app_alive: bool,
) -> ExitRequestDecision {
    if exit_code.is_none() && platform_keeps_app_alive {
        ExitRequestDecision::KeepRunning
    } else {
        ExitRequestDecision::Exit
    }
}

pub(crate) fn should_recreate_window(has_visible_windows: bool) -> bool {
    !has_visible_windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_window_closed_keeps_the_app_alive_only_on_persistent_platforms() {
        assert_eq!(decide_exit_request(None, true), ExitRequestDecision::KeepRunning);
        assert_eq!(decide_exit_request(None, false), ExitRequestDecision::Exit);
    }

    #[test]
    fn an_explicit_exit_code_always_exits() {
        assert_eq!(decide_exit_request(Some(0), true), ExitRequestDecision::Exit);
        assert_eq!(decide_exit_request(Some(1), false), ExitRequestDecision::Exit);
    }

    #[test]
    fn reactivation_recreates_the_window_only_when_none_is_visible() {
        assert!(should_recreate_window(false));
        assert!(!should_recreate_window(true));
    }
}
