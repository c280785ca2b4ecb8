use std::path::PathBuf;

use tauri::{window::Color, AppHandle, Manager, Theme, WebviewUrl, WebviewWindowBuilder};

use crate::{
    launch_config::{EntryPoint, LaunchConfig},
    window_bounds::{WindowBounds, WindowGeometry},
    DARK_BACKGROUND_RGB, LIGHT_BACKGROUND_RGB, MAIN_WINDOW_LABEL, MAIN_WINDOW_TITLE,
};

pub(crate) fn background_rgb(dark: bool) -> (u8, u8, u8) {
    if dark {
        DARK_BACKGROUND_RGB
    } else {
        LIGHT_BACKGROUND_RGB
    }
}

fn webview_url(entry_point: &EntryPoint) -> WebviewUrl {
    match entry_point {
        EntryPoint::DevServer(url) => WebviewUrl::External(url.clone()),
        EntryPoint::Packaged(document) => WebviewUrl::App(PathBuf::from(*document)),
    }
}

/// Builds the main window hidden, paints it for the current theme, then shows it.
pub(crate) fn create_main_window<F>(
    app_handle: &AppHandle,
    geometry: &WindowGeometry,
    config: &LaunchConfig,
    log: F,
) -> Result<(), String>
where
    F: Fn(&str),
{
    let builder = WebviewWindowBuilder::new(
        app_handle,
        MAIN_WINDOW_LABEL,
        webview_url(&config.entry_point),
    )
    .title(MAIN_WINDOW_TITLE)
    .inner_size(f64::from(geometry.width), f64::from(geometry.height))
    .min_inner_size(f64::from(geometry.min_width), 0.0)
    .visible(false);

    let builder = match geometry.position {
        Some((x, y)) => builder.position(f64::from(x), f64::from(y)),
        None => builder.center(),
    };

    #[cfg(target_os = "macos")]
    let builder = builder
        .title_bar_style(tauri::TitleBarStyle::Overlay)
        .hidden_title(true);
    #[cfg(not(target_os = "macos"))]
    let builder = builder.decorations(false);

    let window = builder
        .build()
        .map_err(|error| format!("Failed to create main window: {error}"))?;

    let dark = matches!(window.theme(), Ok(Theme::Dark));
    let (red, green, blue) = background_rgb(dark);
    if let Err(error) = window.set_background_color(Some(Color(red, green, blue, 255))) {
        log(&format!("failed to set main window background color: {error}"));
    }

    #[cfg(debug_assertions)]
    if config.dev_mode {
        window.open_devtools();
    }

    window
        .show()
        .map_err(|error| format!("Failed to show main window: {error}"))
}

pub(crate) fn read_window_bounds(window: &tauri::Window) -> Result<WindowBounds, String> {
    let scale_factor = window
        .scale_factor()
        .map_err(|error| format!("Failed to read window scale factor: {error}"))?;
    let position = window
        .outer_position()
        .map_err(|error| format!("Failed to read window position: {error}"))?
        .to_logical::<f64>(scale_factor);
    let size = window
        .inner_size()
        .map_err(|error| format!("Failed to read window size: {error}"))?
        .to_logical::<f64>(scale_factor);

    Ok(WindowBounds::from_logical(
        position.x,
        position.y,
        size.width,
        size.height,
    ))
}

pub(crate) fn show_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("show_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.show() {
        log(&format!("failed to show main window: {error}"));
    }
    if let Err(error) = window.unminimize() {
        log(&format!("failed to unminimize main window: {error}"));
    }
    if let Err(error) = window.set_focus() {
        log(&format!("failed to focus main window: {error}"));
    }
}

pub(crate) fn hide_main_window<F>(app_handle: &AppHandle, log: F)
where
    F: Fn(&str),
{
    let Some(window) = app_handle.get_webview_window(MAIN_WINDOW_LABEL) else {
        log("hide_main_window skipped: main window not found");
        return;
    };

    if let Err(error) = window.hide() {
        log(&format!("failed to hide main window: {error}"));
    }
}
