use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};
use url::Url;

use crate::{
    GatewayState, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
};

/// Stands in for the old preload script: lets the gateway dashboard detect
/// that it runs inside the desktop shell.
fn desktop_bridge_script(gateway_url: &str) -> Result<String, String> {
    let encoded = serde_json::to_string(gateway_url)
        .map_err(|error| format!("Failed to encode the gateway URL: {error}"))?;
    Ok(format!(
        "window.__MOLTBOT_DESKTOP__ = {{ gatewayUrl: {encoded} }};"
    ))
}

/// Creates the main window pointed at the gateway URL. No-op if it already
/// exists. The gateway may not be listening yet; the webview's own error
/// page covers that case.
pub(crate) fn create_main_window(app_handle: &AppHandle) -> Result<(), String> {
    if app_handle.get_webview_window(MAIN_WINDOW_LABEL).is_some() {
        return Ok(());
    }

    let state = app_handle.state::<GatewayState>();
    let gateway_url = Url::parse(&state.gateway_url)
        .map_err(|error| format!("Invalid gateway URL {}: {}", state.gateway_url, error))?;
    let script = desktop_bridge_script(&state.gateway_url)?;

    WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        WebviewUrl::External(gateway_url),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(MAIN_WINDOW_WIDTH, MAIN_WINDOW_HEIGHT)
    .initialization_script(&script)
    .build()
    .map(|_| ())
    .map_err(|error| format!("Failed to create main window: {error}"))
}
