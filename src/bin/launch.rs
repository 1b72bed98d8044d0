//! Thin bootstrap binary: finds the desktop shell executable, runs it with
//! inherited stdio and mirrors how it went down.

use std::process::{exit, Command};

const DESKTOP_BIN_ENV: &str = "MOLTBOT_DESKTOP_BIN";

fn default_desktop_shell_bin() -> &'static str {
    if cfg!(target_os = "windows") {
        "moltbot-desktop.exe"
    } else {
        "moltbot-desktop"
    }
}

fn resolve_desktop_shell_command(
    bin_override: Option<&str>,
) -> Result<(String, Vec<String>), String> {
    match bin_override.map(str::trim).filter(|value| !value.is_empty()) {
        Some(custom) => {
            let mut pieces = shlex::split(custom)
                .ok_or_else(|| format!("Invalid {DESKTOP_BIN_ENV} value: {custom}"))?;
            if pieces.is_empty() {
                return Err(format!("{DESKTOP_BIN_ENV} is empty."));
            }
            let cmd = pieces.remove(0);
            Ok((cmd, pieces))
        }
        None => Ok((default_desktop_shell_bin().to_string(), Vec::new())),
    }
}

fn main() {
    let (cmd, args) =
        match resolve_desktop_shell_command(std::env::var(DESKTOP_BIN_ENV).ok().as_deref()) {
            Ok(resolved) => resolved,
            Err(error) => {
                eprintln!("moltbot-launch: {error}");
                exit(1);
            }
        };

    let status = match Command::new(&cmd).args(&args).status() {
        Ok(status) => status,
        Err(error) => {
            eprintln!(
                "moltbot-launch: failed to start the desktop shell ({cmd}): {error}. \
                 Provide it via PATH or set {DESKTOP_BIN_ENV}."
            );
            exit(1);
        }
    };

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            unsafe { libc::kill(std::process::id() as i32, signal) };
            // Only reached if the re-raised signal did not terminate us.
            exit(1);
        }
    }

    exit(mirrored_exit_code(status.code()));
}

fn mirrored_exit_code(code: Option<i32>) -> i32 {
    code.unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_defaults_to_the_platform_binary_name() {
        let (cmd, args) = resolve_desktop_shell_command(None).expect("default resolution");
        #[cfg(target_os = "windows")]
        assert_eq!(cmd, "moltbot-desktop.exe");
        #[cfg(not(target_os = "windows"))]
        assert_eq!(cmd, "moltbot-desktop");
        assert!(args.is_empty());
    }

    #[test]
    fn a_blank_override_is_treated_as_absent() {
        let (cmd, _) = resolve_desktop_shell_command(Some("  ")).expect("blank override");
        assert_eq!(cmd, default_desktop_shell_bin());
    }

    #[test]
    fn an_override_may_carry_arguments() {
        let (cmd, args) =
            resolve_desktop_shell_command(Some("/usr/bin/env moltbot-desktop")).expect("override");
        assert_eq!(cmd, "/usr/bin/env");
        assert_eq!(args, vec!["moltbot-desktop"]);
    }

    #[test]
    fn unbalanced_quotes_are_rejected() {
        let error = resolve_desktop_shell_command(Some("\"unterminated")).unwrap_err();
        assert!(error.contains(DESKTOP_BIN_ENV));
    }

    #[test]
    fn a_missing_exit_code_is_mirrored_as_success() {
        assert_eq!(mirrored_exit_code(Some(3)), 3);
        assert_eq!(mirrored_exit_code(Some(0)), 0);
        assert_eq!(mirrored_exit_code(None), 0);
    }
}
