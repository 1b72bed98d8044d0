use std::{collections::HashMap, fs, path::Path};

use rand::{rngs::OsRng, RngCore};

use crate::{
    runtime_paths, GATEWAY_TOKEN_BYTES, GATEWAY_TOKEN_ENV_KEY, OPENROUTER_KEY_ENV_KEY,
    OPENROUTER_KEY_PLACEHOLDER,
};

pub(crate) fn generate_gateway_token() -> String {
    let mut bytes = [0_u8; GATEWAY_TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Splits `KEY=VALUE` lines into a map. Blank lines and `#` comments are
/// skipped, a line without `=` (or starting with one) is ignored, and the
/// split happens on the first `=` so values may contain the character.
pub(crate) fn parse_env_lines(raw: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for line in raw.lines() {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(separator) = line.find('=') else {
            continue;
        };
        if separator == 0 {
            continue;
        }
        vars.insert(
            line[..separator].to_string(),
            line[separator + 1..].to_string(),
        );
    }
    vars
}

/// Creates the env file with a fresh gateway token on first run, then parses
/// it. The file is never rewritten once present, so the token survives
/// restarts and user edits are kept.
pub(crate) fn ensure_env_file(path: &Path) -> Result<HashMap<String, String>, String> {
    runtime_paths::ensure_parent_dir(path)?;
    if !path.exists() {
        let token = generate_gateway_token();
        let content = format!(
            "{GATEWAY_TOKEN_ENV_KEY}={token}\n{OPENROUTER_KEY_ENV_KEY}={OPENROUTER_KEY_PLACEHOLDER}\n"
        );
        fs::write(path, content)
            .map_err(|error| format!("Failed to write env file {}: {}", path.display(), error))?;
    }

    let raw = fs::read_to_string(path)
        .map_err(|error| format!("Failed to read env file {}: {}", path.display(), error))?;
    Ok(parse_env_lines(&raw))
}
