use std::path::Path;
use std::process::{Command, Stdio};

use tauri::{AppHandle, Manager};

use crate::{
    append_shell_log, append_shutdown_log, menu_actions, runtime_paths, GatewayState,
};

#[cfg(target_os = "macos")]
fn open_path_with_file_browser(path: &Path) -> Result<(), String> {
    Command::new("open")
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'open': {error}"))
}

#[cfg(target_os = "windows")]
fn open_path_with_file_browser(path: &Path) -> Result<(), String> {
    Command::new("explorer")
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'explorer': {error}"))
}

#[cfg(all(unix, not(target_os = "macos")))]
fn open_path_with_file_browser(path: &Path) -> Result<(), String> {
    Command::new("xdg-open")
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|error| format!("Failed to run 'xdg-open': {error}"))
}

#[cfg(not(any(target_os = "macos", target_os = "windows", unix)))]
fn open_path_with_file_browser(_path: &Path) -> Result<(), String> {
    Err("Opening folders is not supported on this platform.".to_string())
}

pub(crate) fn handle_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match menu_actions::action_from_menu_id(menu_id) {
        Some(menu_actions::MenuAction::OpenLogsFolder) => {
            let state_dir = match runtime_paths::state_dir() {
                Ok(dir) => dir,
                Err(error) => {
                    append_shell_log(&format!("cannot resolve the state directory: {error}"));
                    return;
                }
            };
            if let Err(error) = open_path_with_file_browser(&state_dir) {
                append_shell_log(&format!("failed to open the logs folder: {error}"));
            }
        }
        Some(menu_actions::MenuAction::RestartGateway) => {
            let state = app_handle.state::<GatewayState>();
            state.stop_gateway();
            match state.start_gateway() {
                Ok(()) => {
                    let pid = state
                        .gateway_pid()
                        .map(|pid| pid.to_string())
                        .unwrap_or_else(|| "unknown".to_string());
                    append_shell_log(&format!("gateway restarted from menu (pid {pid})"));
                }
                Err(error) => {
                    append_shell_log(&format!("gateway restart from menu failed: {error}"));
                }
            }
        }
        Some(menu_actions::MenuAction::Quit) => {
            append_shutdown_log("quit requested from menu");
            app_handle.exit(0);
        }
        None => {}
    }
}
