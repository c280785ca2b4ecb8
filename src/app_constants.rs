pub(crate) const MAIN_WINDOW_LABEL: &str = "main";
pub(crate) const MAIN_WINDOW_TITLE: &str = "Resident";
pub(crate) const PACKAGED_ENTRY_DOCUMENT: &str = "index.html";

pub(crate) const DEFAULT_WINDOW_WIDTH: u32 = 900;
pub(crate) const DEFAULT_WINDOW_HEIGHT: u32 = 600;
pub(crate) const MIN_WINDOW_WIDTH: u32 = 900;

pub(crate) const DARK_BACKGROUND_RGB: (u8, u8, u8) = (0x18, 0x18, 0x18);
pub(crate) const LIGHT_BACKGROUND_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);

pub(crate) const STORE_FILE: &str = "store.json";
pub(crate) const APP_STORE_SCOPE: &str = "app";
pub(crate) const BOUNDS_STORE_KEY: &str = "bounds";

pub(crate) const DESKTOP_LOG_FILE: &str = "desktop.log";
pub(crate) const DESKTOP_LOG_MAX_BYTES: u64 = 5 * 1024 * 1024;

pub(crate) const DESKTOP_ENV: &str = "RESIDENT_DESKTOP_ENV";
pub(crate) const DEV_SERVER_URL_ENV: &str = "RESIDENT_DEV_SERVER_URL";
pub(crate) const DESKTOP_ROOT_ENV: &str = "RESIDENT_DESKTOP_ROOT";
pub(crate) const DEVELOPMENT_MODE_VALUE: &str = "development";
pub(crate) const DEFAULT_ROOT_DIR_NAME: &str = ".resident-desktop";

pub(crate) const TRAY_ID: &str = "resident-tray";
pub(crate) const TRAY_TOOLTIP: &str = "Resident";
