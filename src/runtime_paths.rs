use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{DEFAULT_ROOT_DIR_NAME, DESKTOP_ROOT_ENV, STORE_FILE};

/// Root for the store and logs: `$RESIDENT_DESKTOP_ROOT`, else `~/.resident-desktop`.
pub(crate) fn default_root_dir() -> PathBuf {
    root_dir_from(env::var(DESKTOP_ROOT_ENV).ok(), home::home_dir())
}

fn root_dir_from(override_value: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    if let Some(raw) = override_value {
        let path = PathBuf::from(raw.trim());
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    home_dir
        .unwrap_or_else(env::temp_dir)
        .join(DEFAULT_ROOT_DIR_NAME)
}

pub(crate) fn store_path(root_dir: &Path) -> PathBuf {
    root_dir.join("data").join(STORE_FILE)
}
