use tauri::{AppHandle, Manager};

use crate::{
    append_shutdown_log,
    launch_config::LaunchConfig,
    lifecycle::{LifecycleEffect, LifecycleEvent, Transition, WindowState},
    main_window, tray_labels, LifecycleState,
};

/// Feeds `event` to the lifecycle controller and executes the window effects it returns.
/// `CancelClose` and `StayResident` are left to the caller, which owns the matching API handle.
pub(crate) fn dispatch_lifecycle_event<F>(
    app_handle: &AppHandle,
    event: LifecycleEvent,
    log: F,
) -> Result<Transition, String>
where
    F: Fn(&str) + Copy,
{
    let state = app_handle.state::<LifecycleState>();
    let transition = state.dispatch(event, log)?;
    apply_window_effects(app_handle, &transition, state.launch_config(), log)?;
    Ok(transition)
}

fn apply_window_effects<F>(
    app_handle: &AppHandle,
    transition: &Transition,
    config: &LaunchConfig,
    log: F,
) -> Result<(), String>
where
    F: Fn(&str) + Copy,
{
    for effect in &transition.effects {
        match effect {
            LifecycleEffect::CreateWindow(geometry) => {
                main_window::create_main_window(app_handle, geometry, config, log)?;
                log(&format!(
                    "main window created: {}x{} at {:?}",
                    geometry.width, geometry.height, geometry.position
                ));
            }
            LifecycleEffect::ShowWindow => {
                main_window::show_main_window(app_handle, log);
                tray_labels::update_tray_menu_labels_with_visibility(app_handle, true, log);
            }
            LifecycleEffect::HideWindow => {
                main_window::hide_main_window(app_handle, log);
                tray_labels::update_tray_menu_labels_with_visibility(app_handle, false, log);
            }
            LifecycleEffect::ReleaseWindow => log("main window released"),
            LifecycleEffect::CancelClose | LifecycleEffect::StayResident => {}
        }
    }
    Ok(())
}

pub(crate) fn toggle_event_for(state: Option<WindowState>) -> LifecycleEvent {
    match state {
        Some(WindowState::Visible) => LifecycleEvent::Hide,
        _ => LifecycleEvent::Activate,
    }
}

pub(crate) fn toggle_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy,
{
    let current = app_handle.state::<LifecycleState>().window_state();
    if let Err(error) = dispatch_lifecycle_event(app_handle, toggle_event_for(current), log) {
        log(&format!("toggle_main_window failed: {error}"));
    }
}

pub(crate) fn activate_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str) + Copy,
{
    if let Err(error) = dispatch_lifecycle_event(app_handle, LifecycleEvent::Activate, log) {
        log(&format!("activate_main_window failed: {error}"));
    }
}

/// Raises the quit flag before exiting so the close path lets the window go.
pub(crate) fn quit_application(app_handle: &AppHandle) {
    if let Err(error) =
        dispatch_lifecycle_event(app_handle, LifecycleEvent::QuitRequested, append_shutdown_log)
    {
        append_shutdown_log(&format!("failed to record quit request: {error}"));
    }
    append_shutdown_log("quit requested, exiting desktop process");
    app_handle.exit(0);
}
