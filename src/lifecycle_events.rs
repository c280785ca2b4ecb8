use tauri::{AppHandle, Manager, RunEvent, WindowEvent};

use crate::{
    append_desktop_log, append_shutdown_log,
    lifecycle::{LifecycleEffect, LifecycleEvent, WindowState},
    main_window, window_actions,
    window_bounds::WindowBounds,
    LifecycleState, MAIN_WINDOW_LABEL,
};

/// An exit with an explicit code, or one raised while the main window is still alive,
/// is a real quit. Otherwise the last window has gone away.
pub(crate) fn classify_exit_request(
    code: Option<i32>,
    window_state: Option<WindowState>,
) -> LifecycleEvent {
    match (code, window_state) {
        (Some(_), _) => LifecycleEvent::QuitRequested,
        (None, Some(state)) if state.is_alive() => LifecycleEvent::QuitRequested,
        (None, _) => LifecycleEvent::AllWindowsClosed,
    }
}

/// Minimized windows report placeholder geometry on some platforms.
pub(crate) fn should_record_bounds(is_minimized: bool, bounds: &WindowBounds) -> bool {
    !is_minimized && bounds.width > 0 && bounds.height > 0
}

pub(crate) fn handle_window_event(window: &tauri::Window, event: &WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }
    let app_handle = window.app_handle();

    match event {
        WindowEvent::Moved(_) | WindowEvent::Resized(_) => {
            let bounds = match main_window::read_window_bounds(window) {
                Ok(bounds) => bounds,
                Err(error) => {
                    append_desktop_log(&format!("failed to read main window bounds: {error}"));
                    return;
                }
            };
            if !should_record_bounds(window.is_minimized().unwrap_or(false), &bounds) {
                return;
            }

            let lifecycle_event = if matches!(event, WindowEvent::Moved(_)) {
                LifecycleEvent::Moved(bounds)
            } else {
                LifecycleEvent::Resized(bounds)
            };
            if let Err(error) =
                window_actions::dispatch_lifecycle_event(app_handle, lifecycle_event, append_desktop_log)
            {
                append_desktop_log(&format!("failed to record main window bounds: {error}"));
            }
        }
        WindowEvent::CloseRequested { api, .. } => {
            match window_actions::dispatch_lifecycle_event(
                app_handle,
                LifecycleEvent::CloseRequested,
                append_desktop_log,
            ) {
                Ok(transition) if transition.contains(LifecycleEffect::CancelClose) => {
                    api.prevent_close();
                }
                Ok(_) => append_shutdown_log("main window closing"),
                Err(error) => {
                    append_desktop_log(&format!("failed to handle close request: {error}"));
                }
            }
        }
        WindowEvent::Destroyed => {
            let alive = app_handle
                .state::<LifecycleState>()
                .window_state()
                .is_some_and(WindowState::is_alive);
            if alive {
                append_shutdown_log("main window destroyed, tearing down lifecycle state");
                if let Err(error) = window_actions::dispatch_lifecycle_event(
                    app_handle,
                    LifecycleEvent::Teardown,
                    append_shutdown_log,
                ) {
                    append_shutdown_log(&format!("failed to tear down main window: {error}"));
                }
            }
        }
        _ => {}
    }
}

pub(crate) fn handle_run_event(app_handle: &AppHandle, event: RunEvent) {
    match event {
        RunEvent::ExitRequested { code, api, .. } => {
            let window_state = app_handle.state::<LifecycleState>().window_state();
            let lifecycle_event = classify_exit_request(code, window_state);
            match window_actions::dispatch_lifecycle_event(
                app_handle,
                lifecycle_event,
                append_shutdown_log,
            ) {
                Ok(transition) if transition.contains(LifecycleEffect::StayResident) => {
                    api.prevent_exit();
                }
                Ok(_) => append_shutdown_log(&format!("exit requested: code={code:?}")),
                Err(error) => {
                    append_shutdown_log(&format!("failed to handle exit request: {error}"));
                }
            }
        }
        RunEvent::Exit => {
            if let Err(error) = window_actions::dispatch_lifecycle_event(
                app_handle,
                LifecycleEvent::Teardown,
                append_shutdown_log,
            ) {
                append_shutdown_log(&format!("failed to tear down main window: {error}"));
            }
            append_shutdown_log("desktop process exiting");
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => {
            window_actions::activate_main_window(app_handle, append_desktop_log);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_exit_code_is_a_quit_request() {
        for state in [
            None,
            Some(WindowState::Visible),
            Some(WindowState::Hidden),
            Some(WindowState::Destroyed),
        ] {
            assert_eq!(
                classify_exit_request(Some(0), state),
                LifecycleEvent::QuitRequested
            );
        }
    }

    #[test]
    fn implicit_exit_with_live_window_is_a_quit_request() {
        assert_eq!(
            classify_exit_request(None, Some(WindowState::Hidden)),
            LifecycleEvent::QuitRequested
        );
    }

    #[test]
    fn implicit_exit_without_window_means_all_windows_closed() {
        for state in [None, Some(WindowState::Absent), Some(WindowState::Destroyed)] {
            assert_eq!(
                classify_exit_request(None, state),
                LifecycleEvent::AllWindowsClosed
            );
        }
    }

    #[test]
    fn minimized_or_empty_bounds_are_not_recorded() {
        let bounds = WindowBounds {
            x: -32000,
            y: -32000,
            width: 160,
            height: 28,
        };
        assert!(!should_record_bounds(true, &bounds));
        assert!(!should_record_bounds(
            false,
            &WindowBounds {
                width: 0,
                ..bounds
            }
        ));
        assert!(should_record_bounds(false, &bounds));
    }
}
