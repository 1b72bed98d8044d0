use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem, Submenu},
    AppHandle,
};

use crate::{menu_actions, MAIN_WINDOW_TITLE};

pub(crate) fn setup_menu(app_handle: &AppHandle) -> Result<(), String> {
    let open_logs_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_OPEN_LOGS_FOLDER,
        "Open Logs Folder",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create open-logs menu item: {error}"))?;
    let restart_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_RESTART_GATEWAY,
        "Restart Gateway",
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create restart menu item: {error}"))?;
    let quit_item = MenuItem::with_id(
        app_handle,
        menu_actions::MENU_QUIT,
        "Quit",
        true,
        Some("CmdOrCtrl+Q"),
    )
    .map_err(|error| format!("Failed to create quit menu item: {error}"))?;
    let separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create separator menu item: {error}"))?;

    let submenu = Submenu::with_items(
        app_handle,
        MAIN_WINDOW_TITLE,
        true,
        &[&open_logs_item, &restart_item, &separator, &quit_item],
    )
    .map_err(|error| format!("Failed to build application submenu: {error}"))?;
    let menu = Menu::with_items(app_handle, &[&submenu])
        .map_err(|error| format!("Failed to build application menu: {error}"))?;

    app_handle
        .set_menu(menu)
        .map_err(|error| format!("Failed to install application menu: {error}"))?;
    Ok(())
}
