use std::{fs::OpenOptions, io::Write, path::PathBuf};

use crate::{runtime_paths, SHELL_LOG_FILE};

pub(crate) fn resolve_shell_log_path() -> Result<PathBuf, String> {
    Ok(runtime_paths::state_dir()?.join(SHELL_LOG_FILE))
}

/// Best effort: an unwritable shell log never fails the caller.
pub(crate) fn append_shell_log(message: &str) {
    let Ok(path) = resolve_shell_log_path() else {
        return;
    };
    if runtime_paths::ensure_parent_dir(&path).is_err() {
        return;
    }

    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
    if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&path) {
        let _ = writeln!(file, "[{timestamp}] {message}");
    }
}

pub(crate) fn append_startup_log(message: &str) {
    append_shell_log(&format!("[startup] {message}"));
}

pub(crate) fn append_shutdown_log(message: &str) {
    append_shell_log(&format!("[shutdown] {message}"));
}
