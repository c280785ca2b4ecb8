use crate::{
    append_desktop_log, append_startup_log,
    bounds_store::BoundsStore,
    kv_store::JsonFileStore,
    launch_config::{EntryPoint, LaunchConfig},
    lifecycle::{LifecycleController, LifecycleEvent},
    lifecycle_events, logging,
    platform_policy::PlatformPolicy,
    runtime_paths, tray_setup, window_actions, LifecycleState, DESKTOP_LOG_FILE,
};

fn describe_entry_point(entry_point: &EntryPoint) -> String {
    match entry_point {
        EntryPoint::DevServer(url) => format!("dev server {url}"),
        EntryPoint::Packaged(document) => format!("packaged {document}"),
    }
}

pub(crate) fn run() {
    let root_dir = runtime_paths::default_root_dir();

    append_startup_log("desktop process starting");
    append_startup_log(&format!(
        "desktop log path: {}",
        logging::resolve_desktop_log_path(&root_dir, DESKTOP_LOG_FILE).display()
    ));

    let launch_config = LaunchConfig::from_env(append_startup_log);
    let policy = PlatformPolicy::for_current_platform();
    append_startup_log(&format!(
        "launch config: dev_mode={} entry={} stay_resident_on_all_closed={}",
        launch_config.dev_mode,
        describe_entry_point(&launch_config.entry_point),
        policy.stay_resident_on_all_closed
    ));

    let store = JsonFileStore::open(runtime_paths::store_path(&root_dir), append_startup_log);
    append_startup_log(&format!("window state store: {}", store.path().display()));
    let controller = LifecycleController::new(policy, BoundsStore::new(store));

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            append_desktop_log("second instance launched, activating main window");
            window_actions::activate_main_window(app, append_desktop_log);
        }))
        .manage(LifecycleState::new(controller, launch_config))
        .invoke_handler(tauri::generate_handler![
            crate::desktop_bridge_commands::desktop_bridge_is_desktop_runtime,
            crate::desktop_bridge_commands::desktop_bridge_get_window_state,
            crate::desktop_bridge_commands::desktop_bridge_hide_window,
            crate::desktop_bridge_commands::desktop_bridge_quit_app,
        ])
        .on_window_event(lifecycle_events::handle_window_event)
        .setup(|app| {
            let app_handle = app.handle().clone();
            window_actions::dispatch_lifecycle_event(
                &app_handle,
                LifecycleEvent::Create,
                append_startup_log,
            )?;

            if let Err(error) = tray_setup::setup_tray(&app_handle) {
                append_startup_log(&format!("failed to initialize tray: {error}"));
            }
            Ok(())
        })
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(lifecycle_events::handle_run_event);
}
