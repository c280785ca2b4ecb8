use tauri::{AppHandle, Manager};

use crate::{
    append_desktop_log, lifecycle::LifecycleEvent, window_actions, DesktopBridgeResult,
    LifecycleState, WindowBridgeState,
};

#[tauri::command]
pub(crate) fn desktop_bridge_is_desktop_runtime() -> bool {
    true
}

#[tauri::command]
pub(crate) fn desktop_bridge_get_window_state(
    app_handle: AppHandle,
) -> Result<WindowBridgeState, String> {
    app_handle.state::<LifecycleState>().bridge_state()
}

#[tauri::command]
pub(crate) fn desktop_bridge_hide_window(app_handle: AppHandle) -> DesktopBridgeResult {
    let result =
        window_actions::dispatch_lifecycle_event(&app_handle, LifecycleEvent::Hide, append_desktop_log)
            .map(|_| ());
    if let Err(error) = &result {
        append_desktop_log(&format!("failed to hide main window from bridge: {error}"));
    }
    DesktopBridgeResult::from_result(result)
}

#[tauri::command]
pub(crate) fn desktop_bridge_quit_app(app_handle: AppHandle) -> DesktopBridgeResult {
    window_actions::quit_application(&app_handle);
    DesktopBridgeResult::from_result(Ok(()))
}
