#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app_constants;
mod app_runtime;
mod app_types;
mod bounds_store;
mod desktop_bridge_commands;
mod kv_store;
mod launch_config;
mod lifecycle;
mod lifecycle_events;
mod logging;
mod main_window;
mod platform_policy;
mod runtime_paths;
mod tray_actions;
mod tray_labels;
mod tray_menu_handler;
mod tray_setup;
mod window_actions;
mod window_bounds;

pub(crate) use app_constants::*;
pub(crate) use app_types::{
    DesktopBridgeResult, LifecycleState, TrayMenuState, WindowBridgeState,
};
pub(crate) use logging::{append_desktop_log, append_shutdown_log, append_startup_log};

fn main() {
    app_runtime::run();
}
