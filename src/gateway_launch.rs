use crate::{DEFAULT_GATEWAY_BIN, GATEWAY_BIN_ENV, GATEWAY_PORT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LaunchPlan {
    pub(crate) cmd: String,
    pub(crate) args: Vec<String>,
}

/// Resolves the gateway command from the `MOLTBOT_BIN` override or the fixed
/// default. The override is shlex-split, so it may carry leading arguments
/// (for example an interpreter plus a script path).
pub(crate) fn resolve_gateway_launch(bin_override: Option<&str>) -> Result<LaunchPlan, String> {
    let (cmd, mut args) = match bin_override.map(str::trim).filter(|value| !value.is_empty()) {
        Some(custom) => {
            let mut pieces = shlex::split(custom)
                .ok_or_else(|| format!("Invalid {GATEWAY_BIN_ENV} value: {custom}"))?;
            if pieces.is_empty() {
                return Err(format!("{GATEWAY_BIN_ENV} is empty."));
            }
            let cmd = pieces.remove(0);
            (cmd, pieces)
        }
        None => (DEFAULT_GATEWAY_BIN.to_string(), Vec::new()),
    };

    args.extend(gateway_run_args());
    Ok(LaunchPlan { cmd, args })
}

fn gateway_run_args() -> Vec<String> {
    vec![
        "gateway".to_string(),
        "run".to_string(),
        "--bind".to_string(),
        "loopback".to_string(),
        "--port".to_string(),
        GATEWAY_PORT.to_string(),
        "--force".to_string(),
    ]
}
