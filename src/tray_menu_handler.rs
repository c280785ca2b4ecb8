use tauri::AppHandle;

use crate::{append_desktop_log, tray_actions, window_actions};

pub fn handle_tray_menu_event(app_handle: &AppHandle, menu_id: &str) {
    match tray_actions::action_from_menu_id(menu_id) {
        Some(tray_actions::TrayMenuAction::ToggleWindow) => {
            window_actions::toggle_main_window(app_handle, append_desktop_log)
        }
        Some(tray_actions::TrayMenuAction::Quit) => window_actions::quit_application(app_handle),
        None => append_desktop_log(&format!("ignoring unknown tray menu id: {menu_id}")),
    }
}
