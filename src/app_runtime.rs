use tauri::{Manager, RunEvent};

use crate::{
    append_shell_log, append_shutdown_log, append_startup_log, logging, main_window, menu_handler,
    menu_setup, shell_flow, GatewayState,
};

pub(crate) fn run() {
    append_startup_log("desktop shell starting");
    if let Ok(log_path) = logging::resolve_shell_log_path() {
        append_startup_log(&format!("shell log path: {}", log_path.display()));
    }

    tauri::Builder::default()
        .manage(GatewayState::default())
        .on_menu_event(|app_handle, event| {
            menu_handler::handle_menu_event(app_handle, event.id().as_ref())
        })
        .setup(|app| {
            let app_handle = app.handle().clone();

            let state = app_handle.state::<GatewayState>();
            if let Err(error) = state.start_gateway() {
                append_startup_log(&format!("failed to start gateway: {error}"));
            }

            if let Err(error) = menu_setup::setup_menu(&app_handle) {
                append_startup_log(&format!("failed to install application menu: {error}"));
            }

            if let Err(error) = main_window::create_main_window(&app_handle) {
                append_startup_log(&format!("failed to create main window: {error}"));
            }

            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(|app_handle, event| match event {
            RunEvent::ExitRequested { code, api, .. } => {
                match shell_flow::decide_exit_request(code, cfg!(target_os = "macos")) {
                    shell_flow::ExitRequestDecision::KeepRunning => api.prevent_exit(),
                    shell_flow::ExitRequestDecision::Exit => {}
                }
            }
            RunEvent::Exit => {
                append_shutdown_log("desktop shell exiting, stopping gateway");
                let state = app_handle.state::<GatewayState>();
                state.stop_gateway();
            }
            #[cfg(target_os = "macos")]
            RunEvent::Reopen {
                has_visible_windows,
                ..
            } => {
                if shell_flow::should_recreate_window(has_visible_windows) {
                    if let Err(error) = main_window::create_main_window(app_handle) {
                        append_shell_log(&format!("failed to re-create main window: {error}"));
                    }
                }
            }
            _ => {}
        });
}
