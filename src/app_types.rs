use std::sync::Mutex;

use tauri::menu::MenuItem;

use crate::{
    kv_store::JsonFileStore,
    launch_config::LaunchConfig,
    lifecycle::{LifecycleController, LifecycleEvent, Transition, WindowState},
    window_bounds::WindowBounds,
};

pub(crate) type DesktopLifecycle = LifecycleController<JsonFileStore>;

#[derive(Clone)]
pub(crate) struct TrayMenuState {
    pub(crate) toggle_item: MenuItem<tauri::Wry>,
}

/// Tauri managed state around the lifecycle controller.
#[derive(Debug)]
pub(crate) struct LifecycleState {
    controller: Mutex<DesktopLifecycle>,
    launch_config: LaunchConfig,
}

impl LifecycleState {
    pub(crate) fn new(controller: DesktopLifecycle, launch_config: LaunchConfig) -> Self {
        Self {
            controller: Mutex::new(controller),
            launch_config,
        }
    }

    pub(crate) fn launch_config(&self) -> &LaunchConfig {
        &self.launch_config
    }

    /// Runs `event` through the controller. The lock is released before returning,
    /// so callers may touch the window without re-entering it.
    pub(crate) fn dispatch<F>(&self, event: LifecycleEvent, log: F) -> Result<Transition, String>
    where
        F: Fn(&str),
    {
        let mut guard = self
            .controller
            .lock()
            .map_err(|_| "Lifecycle controller lock poisoned.".to_string())?;
        Ok(guard.handle(event, log))
    }

    pub(crate) fn window_state(&self) -> Option<WindowState> {
        self.controller
            .lock()
            .ok()
            .map(|guard| guard.window_state())
    }

    pub(crate) fn bridge_state(&self) -> Result<WindowBridgeState, String> {
        let guard = self
            .controller
            .lock()
            .map_err(|_| "Lifecycle controller lock poisoned.".to_string())?;
        Ok(WindowBridgeState {
            state: guard.window_state(),
            quitting: guard.is_quitting(),
            bounds: guard.last_bounds(),
        })
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WindowBridgeState {
    pub(crate) state: WindowState,
    pub(crate) quitting: bool,
    pub(crate) bounds: Option<WindowBounds>,
}

#[derive(Debug, serde::Serialize)]
pub(crate) struct DesktopBridgeResult {
    pub(crate) ok: bool,
    pub(crate) reason: Option<String>,
}

impl DesktopBridgeResult {
    pub(crate) fn from_result(result: Result<(), String>) -> Self {
        match result {
            Ok(()) => Self {
                ok: true,
                reason: None,
            },
            Err(reason) => Self {
                ok: false,
                reason: Some(reason),
            },
        }
    }
}
