use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{CONFIG_FILE_NAME, ENV_FILE_NAME, GATEWAY_LOG_FILE, STATE_DIR_ENV, STATE_DIR_NAME};

pub(crate) fn home_dir() -> Result<PathBuf, String> {
    home::home_dir().ok_or_else(|| "Cannot resolve the user home directory.".to_string())
}

/// Per-user state directory holding the gateway config, env file and logs.
/// Shared with the moltbot CLI, so the location is fixed.
pub(crate) fn state_dir() -> Result<PathBuf, String> {
    if let Ok(root) = env::var(STATE_DIR_ENV) {
        let trimmed = root.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }
    Ok(home_dir()?.join(STATE_DIR_NAME))
}

pub(crate) fn config_file_path() -> Result<PathBuf, String> {
    Ok(state_dir()?.join(CONFIG_FILE_NAME))
}

pub(crate) fn env_file_path() -> Result<PathBuf, String> {
    Ok(state_dir()?.join(ENV_FILE_NAME))
}

pub(crate) fn gateway_log_path() -> Result<PathBuf, String> {
    Ok(state_dir()?.join(GATEWAY_LOG_FILE))
}

pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(parent)
        .map_err(|error| format!("Failed to create directory {}: {}", parent.display(), error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_paths_use_fixed_file_names() {
        let state = state_dir().expect("state dir");
        assert_eq!(
            config_file_path().expect("config path"),
            state.join("moltbot.json")
        );
        assert_eq!(env_file_path().expect("env path"), state.join(".env"));
        assert_eq!(
            gateway_log_path().expect("log path"),
            state.join("gateway-electron.log")
        );
    }

    #[test]
    fn ensure_parent_dir_creates_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let nested = dir.path().join("a").join("b").join("file.txt");
        ensure_parent_dir(&nested).expect("create parents");
        assert!(nested.parent().expect("parent").is_dir());
    }

    #[test]
    fn ensure_parent_dir_is_a_no_op_when_directory_exists() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("file.txt");
        ensure_parent_dir(&file).expect("first call");
        ensure_parent_dir(&file).expect("second call");
    }
}
