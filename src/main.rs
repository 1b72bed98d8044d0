#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod config_template;
mod env_file;
mod gateway_config;
mod gateway_launch;
mod gateway_process;
mod gateway_url;
mod logging;
mod main_window;
mod menu_actions;
mod menu_handler;
mod menu_setup;
mod runtime_paths;
mod shell_flow;

pub(crate) use app_constants::*;
pub(crate) use app_types::GatewayState;
pub(crate) use logging::{append_shell_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
