use std::{
    collections::HashMap,
    env,
    fs::OpenOptions,
    path::Path,
    process::{Child, Command, Stdio},
    sync::{Arc, Mutex},
    thread,
    time::Duration,
};

use crate::gateway_launch::LaunchPlan;
use crate::{
    append_shell_log, env_file, gateway_config, gateway_launch, runtime_paths, GatewayState,
    GATEWAY_BIN_ENV,
};

const EXIT_POLL_INTERVAL: Duration = Duration::from_millis(500);

impl GatewayState {
    /// Starts the gateway unless one is already running. Runs the config
    /// bootstrap on every transition, so a wiped state directory is repaired
    /// before the spawn.
    pub(crate) fn start_gateway(&self) -> Result<(), String> {
        if self.is_gateway_running()? {
            return Ok(());
        }

        let extra_env = env_file::ensure_env_file(&runtime_paths::env_file_path()?)?;
        gateway_config::ensure_config_file(&runtime_paths::config_file_path()?)?;

        let plan =
            gateway_launch::resolve_gateway_launch(env::var(GATEWAY_BIN_ENV).ok().as_deref())?;
        let cwd = runtime_paths::home_dir()?;
        let log_path = runtime_paths::gateway_log_path()?;
        self.spawn_gateway(&plan, &extra_env, &cwd, &log_path)
    }

    /// Spawns the gateway child with the env-file mapping layered over the
    /// shell's own environment and both output streams appended to the
    /// gateway log. No-op while a previous child is still alive.
    pub(crate) fn spawn_gateway(
        &self,
        plan: &LaunchPlan,
        extra_env: &HashMap<String, String>,
        cwd: &Path,
        log_path: &Path,
    ) -> Result<(), String> {
        let mut guard = self
            .child
            .lock()
            .map_err(|_| "Gateway process lock poisoned.".to_string())?;
        if let Some(child) = guard.as_mut() {
            match child.try_wait() {
                Ok(None) => return Ok(()),
                Ok(Some(status)) => {
                    append_shell_log(&format!("gateway exited earlier with {status}"));
                    *guard = None;
                }
                Err(error) => {
                    return Err(format!("Failed to poll gateway process status: {error}"));
                }
            }
        }

        runtime_paths::ensure_parent_dir(log_path)?;
        let stdout_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|error| {
                format!("Failed to open gateway log {}: {}", log_path.display(), error)
            })?;
        let stderr_file = stdout_file
            .try_clone()
            .map_err(|error| format!("Failed to clone gateway log handle: {error}"))?;

        let child = Command::new(&plan.cmd)
            .args(&plan.args)
            .current_dir(cwd)
            .envs(extra_env)
            .stdin(Stdio::null())
            .stdout(Stdio::from(stdout_file))
            .stderr(Stdio::from(stderr_file))
            .spawn()
            .map_err(|error| format!("Failed to spawn gateway process {:?}: {}", plan.cmd, error))?;

        let pid = child.id();
        append_shell_log(&format!("gateway started (pid {pid})"));
        *guard = Some(child);
        drop(guard);

        spawn_exit_watcher(Arc::clone(&self.child), pid);
        Ok(())
    }

    /// Reports whether the held child is still alive, reaping and clearing
    /// the handle if it already terminated.
    pub(crate) fn is_gateway_running(&self) -> Result<bool, String> {
        let mut guard = self
            .child
            .lock()
            .map_err(|_| "Gateway process lock poisoned.".to_string())?;
        let Some(child) = guard.as_mut() else {
            return Ok(false);
        };
        match child.try_wait() {
            Ok(None) => Ok(true),
            Ok(Some(status)) => {
                append_shell_log(&format!("gateway exited with {status}"));
                *guard = None;
                Ok(false)
            }
            Err(error) => Err(format!("Failed to poll gateway process status: {error}")),
        }
    }

    pub(crate) fn gateway_pid(&self) -> Option<u32> {
        self.child
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(Child::id))
    }

    /// Terminates the held child and clears the handle. No-op when stopped.
    pub(crate) fn stop_gateway(&self) {
        let child = match self.child.lock() {
            Ok(mut guard) => guard.take(),
            Err(_) => None,
        };
        if let Some(mut process) = child {
            append_shell_log(&format!("stopping gateway (pid {})", process.id()));
            stop_child_process(&mut process);
        }
    }
}

fn stop_child_process(child: &mut Child) {
    #[cfg(target_os = "windows")]
    {
        let _ = Command::new("taskkill")
            .args(["/pid", &child.id().to_string(), "/t", "/f"])
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        let _ = child.wait();
        return;
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = child.kill();
        let _ = child.wait();
    }
}

/// Observes the spawned child and clears the shared handle when it exits for
/// any reason, so a later start can succeed without manual cleanup. The pid
/// check keeps a stale watcher from clearing a replacement child.
fn spawn_exit_watcher(child_slot: Arc<Mutex<Option<Child>>>, pid: u32) {
    thread::spawn(move || loop {
        thread::sleep(EXIT_POLL_INTERVAL);
        let Ok(mut guard) = child_slot.lock() else {
            return;
        };
        match guard.as_mut() {
            Some(child) if child.id() == pid => match child.try_wait() {
                Ok(Some(status)) => {
                    append_shell_log(&format!("gateway (pid {pid}) exited with {status}"));
                    *guard = None;
                    return;
                }
                Ok(None) => {}
                Err(_) => return,
            },
            _ => return,
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{collections::HashMap, fs, time::Instant};

    #[cfg(unix)]
    fn shell_plan(script: &str) -> LaunchPlan {
        LaunchPlan {
            cmd: "/bin/sh".to_string(),
            args: vec!["-c".to_string(), script.to_string()],
        }
    }

    #[cfg(unix)]
    fn wait_until_stopped(state: &GatewayState) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if !state.is_gateway_running().expect("poll child") {
                return;
            }
            thread::sleep(Duration::from_millis(50));
        }
        panic!("gateway child did not exit within the deadline");
    }

    #[cfg(unix)]
    #[test]
    fn spawn_gateway_is_a_no_op_while_the_child_is_running() {
        let state = GatewayState::default();
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("gateway.log");

        state
            .spawn_gateway(&shell_plan("sleep 30"), &HashMap::new(), dir.path(), &log)
            .expect("first spawn");
        let first_pid = state.gateway_pid().expect("pid after first spawn");

        state
            .spawn_gateway(&shell_plan("sleep 30"), &HashMap::new(), dir.path(), &log)
            .expect("second spawn");
        assert_eq!(state.gateway_pid(), Some(first_pid));

        state.stop_gateway();
    }

    #[cfg(unix)]
    #[test]
    fn restart_yields_a_distinct_process() {
        let state = GatewayState::default();
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("gateway.log");

        state
            .spawn_gateway(&shell_plan("sleep 30"), &HashMap::new(), dir.path(), &log)
            .expect("first spawn");
        let first_pid = state.gateway_pid().expect("pid after first spawn");
        state.stop_gateway();

        state
            .spawn_gateway(&shell_plan("sleep 30"), &HashMap::new(), dir.path(), &log)
            .expect("respawn");
        let second_pid = state.gateway_pid().expect("pid after respawn");
        assert_ne!(first_pid, second_pid);

        state.stop_gateway();
    }

    #[cfg(unix)]
    #[test]
    fn a_crashed_child_is_cleared_and_can_be_respawned() {
        let state = GatewayState::default();
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("gateway.log");

        state
            .spawn_gateway(&shell_plan("exit 3"), &HashMap::new(), dir.path(), &log)
            .expect("spawn short-lived child");
        wait_until_stopped(&state);
        assert_eq!(state.gateway_pid(), None);

        state
            .spawn_gateway(&shell_plan("sleep 30"), &HashMap::new(), dir.path(), &log)
            .expect("respawn after crash");
        assert!(state.is_gateway_running().expect("poll child"));

        state.stop_gateway();
    }

    #[cfg(unix)]
    #[test]
    fn stop_gateway_is_a_no_op_when_already_stopped() {
        let state = GatewayState::default();
        state.stop_gateway();
        assert!(!state.is_gateway_running().expect("poll child"));
    }

    #[cfg(unix)]
    #[test]
    fn child_environment_includes_the_extra_mapping() {
        let state = GatewayState::default();
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("gateway.log");
        let mut extra_env = HashMap::new();
        extra_env.insert("MOLTBOT_TEST_MARKER".to_string(), "from-env-file".to_string());

        state
            .spawn_gateway(
                &shell_plan("printf '%s' \"$MOLTBOT_TEST_MARKER\""),
                &extra_env,
                dir.path(),
                &log,
            )
            .expect("spawn echo child");
        wait_until_stopped(&state);

        let logged = fs::read_to_string(&log).expect("read gateway log");
        assert_eq!(logged, "from-env-file");
    }

    #[cfg(unix)]
    #[test]
    fn env_file_mapping_overrides_the_inherited_environment() {
        let state = GatewayState::default();
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("gateway.log");
        env::set_var("MOLTBOT_TEST_COLLISION", "from-process-env");
        let mut extra_env = HashMap::new();
        extra_env.insert(
            "MOLTBOT_TEST_COLLISION".to_string(),
            "from-env-file".to_string(),
        );

        state
            .spawn_gateway(
                &shell_plan("printf '%s' \"$MOLTBOT_TEST_COLLISION\""),
                &extra_env,
                dir.path(),
                &log,
            )
            .expect("spawn echo child");
        wait_until_stopped(&state);
        env::remove_var("MOLTBOT_TEST_COLLISION");

        let logged = fs::read_to_string(&log).expect("read gateway log");
        assert_eq!(logged, "from-env-file");
    }

    #[cfg(unix)]
    #[test]
    fn gateway_output_is_appended_across_spawns() {
        let state = GatewayState::default();
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("gateway.log");

        state
            .spawn_gateway(&shell_plan("echo first"), &HashMap::new(), dir.path(), &log)
            .expect("first spawn");
        wait_until_stopped(&state);
        state
            .spawn_gateway(&shell_plan("echo second"), &HashMap::new(), dir.path(), &log)
            .expect("second spawn");
        wait_until_stopped(&state);

        let logged = fs::read_to_string(&log).expect("read gateway log");
        assert_eq!(logged, "first\nsecond\n");
    }

    #[test]
    fn spawn_failure_surfaces_to_the_caller() {
        let state = GatewayState::default();
        let dir = tempfile::tempdir().expect("tempdir");
        let log = dir.path().join("gateway.log");
        let plan = LaunchPlan {
            cmd: dir
                .path()
                .join("missing-gateway-binary")
                .to_string_lossy()
                .to_string(),
            args: Vec::new(),
        };

        let error = state
            .spawn_gateway(&plan, &HashMap::new(), dir.path(), &log)
            .unwrap_err();
        assert!(error.contains("Failed to spawn gateway process"));
        assert_eq!(state.gateway_pid(), None);
    }
}
