use std::{fs, path::Path};

use crate::{config_template, runtime_paths};

/// Writes the default gateway config on first run. Strictly first-run-only:
/// an existing file is never touched, whatever its contents.
pub(crate) fn ensure_config_file(path: &Path) -> Result<(), String> {
    runtime_paths::ensure_parent_dir(path)?;
    if path.exists() {
        return Ok(());
    }

    fs::write(path, config_template::DEFAULT_CONFIG_TEMPLATE)
        .map_err(|error| format!("Failed to write gateway config {}: {}", path.display(), error))
}
