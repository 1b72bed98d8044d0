pub(crate) const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:18789/";
pub(crate) const GATEWAY_PORT: u16 = 18789;

pub(crate) const STATE_DIR_NAME: &str = ".clawdbot";
pub(crate) const CONFIG_FILE_NAME: &str = "moltbot.json";
pub(crate) const ENV_FILE_NAME: &str = ".env";
// Kept from the previous shell so existing installs keep a single gateway log.
pub(crate) const GATEWAY_LOG_FILE: &str = "gateway-electron.log";
pub(crate) const SHELL_LOG_FILE: &str = "desktop-shell.log";

pub(crate) const GATEWAY_TOKEN_ENV_KEY: &str = "CLAWDBOT_GATEWAY_TOKEN";
pub(crate) const GATEWAY_TOKEN_BYTES: usize = 24;
pub(crate) const OPENROUTER_KEY_ENV_KEY: &str = "OPENROUTER_API_KEY";
pub(crate) const OPENROUTER_KEY_PLACEHOLDER: &str = "replace-with-your-openrouter-key";

pub(crate) const STATE_DIR_ENV: &str = "MOLTBOT_STATE_DIR";
pub(crate) const GATEWAY_BIN_ENV: &str = "MOLTBOT_BIN";
pub(crate) const GATEWAY_URL_ENV: &str = "MOLTBOT_GATEWAY_URL";
pub(crate) const DEFAULT_GATEWAY_BIN: &str = "moltbot";

pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Moltbot";
pub(crate) const MAIN_WINDOW_WIDTH: f64 = 1280.0;
pub(crate) const MAIN_WINDOW_HEIGHT: f64 = 860.0;
