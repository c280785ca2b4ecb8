use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{runtime_paths, DESKTOP_LOG_FILE, DESKTOP_LOG_MAX_BYTES};

pub(crate) fn resolve_desktop_log_path(root_dir: &Path, file_name: &str) -> PathBuf {
    root_dir.join("logs").join(file_name)
}

fn format_log_line(category: &str, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category,
        message
    )
}

fn rotate_log_if_needed(path: &Path, max_bytes: u64) -> Result<(), String> {
    let size = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(format!(
                "Failed to stat log file {}: {}",
                path.display(),
                error
            ))
        }
    };
    if size < max_bytes {
        return Ok(());
    }

    let mut rotated = path.as_os_str().to_owned();
    rotated.push(".1");
    fs::rename(path, PathBuf::from(&rotated)).map_err(|error| {
        format!("Failed to rotate log file {}: {}", path.display(), error)
    })
}

pub(crate) fn append_log_line(
    path: &Path,
    category: &str,
    message: &str,
    max_bytes: u64,
) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent.display(),
                error
            )
        })?;
    }
    rotate_log_if_needed(path, max_bytes)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|error| format!("Failed to open log file {}: {}", path.display(), error))?;
    file.write_all(format_log_line(category, message).as_bytes())
        .map_err(|error| format!("Failed to write log file {}: {}", path.display(), error))
}

fn append_category_log(category: &str, message: &str) {
    #[cfg(debug_assertions)]
    eprintln!("[{category}] {message}");

    let path = resolve_desktop_log_path(&runtime_paths::default_root_dir(), DESKTOP_LOG_FILE);
    if let Err(error) = append_log_line(&path, category, message, DESKTOP_LOG_MAX_BYTES) {
        eprintln!("{error}");
    }
}

pub(crate) fn append_desktop_log(message: &str) {
    append_category_log("desktop", message);
}

pub(crate) fn append_startup_log(message: &str) {
    append_category_log("startup", message);
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_category_log("shutdown", message);
}
