use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    AppHandle, Manager,
};

use crate::{
    append_desktop_log, lifecycle::WindowState, tray_actions, tray_labels, tray_menu_handler,
    window_actions, LifecycleState, TrayMenuState, TRAY_ID, TRAY_TOOLTIP,
};

pub fn setup_tray(app_handle: &AppHandle) -> Result<(), String> {
    let main_window_visible = app_handle
        .try_state::<LifecycleState>()
        .and_then(|state| state.window_state())
        .is_some_and(|state| state == WindowState::Visible);

    let toggle_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_TOGGLE_WINDOW,
        tray_labels::toggle_label(main_window_visible),
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray toggle menu item: {error}"))?;
    let quit_item = MenuItem::with_id(
        app_handle,
        tray_actions::TRAY_MENU_QUIT,
        tray_labels::TRAY_QUIT_LABEL,
        true,
        None::<&str>,
    )
    .map_err(|error| format!("Failed to create tray quit menu item: {error}"))?;
    let separator = PredefinedMenuItem::separator(app_handle)
        .map_err(|error| format!("Failed to create tray separator menu item: {error}"))?;

    let menu = Menu::with_items(app_handle, &[&toggle_item, &separator, &quit_item])
        .map_err(|error| format!("Failed to build tray menu: {error}"))?;

    if !app_handle.manage(TrayMenuState {
        toggle_item: toggle_item.clone(),
    }) {
        append_desktop_log("tray menu state already exists, skipping manage");
    }

    let tray_builder = TrayIconBuilder::with_id(TRAY_ID)
        .menu(&menu)
        .tooltip(TRAY_TOOLTIP)
        .icon(tauri::include_image!("./icons/tray.png"))
        .show_menu_on_left_click(false)
        .on_menu_event(|app, event| {
            tray_menu_handler::handle_tray_menu_event(app, event.id().as_ref())
        })
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                window_actions::toggle_main_window(tray.app_handle(), append_desktop_log);
            }
        });

    #[cfg(target_os = "macos")]
    let tray_builder = tray_builder.icon_as_template(true);

    tray_builder
        .build(app_handle)
        .map_err(|error| format!("Failed to create tray icon: {error}"))?;

    Ok(())
}
