use tauri::{menu::MenuItem, AppHandle, Manager};

use crate::{tray_actions, TrayMenuState};

pub(crate) const TRAY_HIDE_LABEL: &str = "Hide Resident";
pub(crate) const TRAY_SHOW_LABEL: &str = "Show Resident";
pub(crate) const TRAY_QUIT_LABEL: &str = "Quit";

pub(crate) fn toggle_label(visible: bool) -> &'static str {
    if visible {
        TRAY_HIDE_LABEL
    } else {
        TRAY_SHOW_LABEL
    }
}

fn set_menu_text_safe<F>(item: &MenuItem<tauri::Wry>, text: &str, item_name: &str, log: F)
where
    F: Fn(&str),
{
    if let Err(error) = item.set_text(text) {
        log(&format!(
            "failed to update tray menu text for {}: {}",
            item_name, error
        ));
    }
}

pub(crate) fn update_tray_menu_labels_with_visibility<F>(
    app_handle: &AppHandle,
    visible: bool,
    log: F,
) where
    F: Fn(&str),
{
    let Some(tray_state) = app_handle.try_state::<TrayMenuState>() else {
        return;
    };

    set_menu_text_safe(
        &tray_state.toggle_item,
        toggle_label(visible),
        tray_actions::TRAY_MENU_TOGGLE_WINDOW,
        &log,
    );
}
