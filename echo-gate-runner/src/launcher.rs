use std::process::Stdio;

use echo_gate_core::{LaunchFailure, ProcessInvocation, Result, SpawnedProcess};
use tokio::process::Command;
use tracing::trace;

/// Starts OS processes
pub trait ProcessLauncher: Send + Sync {
    /// Spawns `invocation` and returns as soon as the process exists.
    /// Implementations must not wait for the process to finish.
    fn launch(&self, invocation: ProcessInvocation) -> Result<SpawnedProcess>;
}

/// Launches through `tokio::process::Command`.
///
/// `argv[0]` is resolved by the OS and every following entry is handed to
/// the child as its own argument. No shell sits in between, so metacharacters
/// in an argument (`;`, `|`, `$(..)`) reach the child as literal text and
/// are only dangerous if the spawned program itself interprets them.
///
/// The child is detached: its handle is dropped right after spawning and the
/// tokio runtime reaps it once it exits. Its stdin, stdout and stderr are
/// bound to the null device, so nothing it prints reaches the host's
/// diagnostic stream. Must be called from inside a tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsProcessLauncher;

impl OsProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

/// Builds the `Command` for `invocation` without spawning it
fn command(invocation: &ProcessInvocation) -> Result<Command> {
    let program = invocation.program().ok_or(LaunchFailure::EmptyArgv)?;

    let mut command = Command::new(program);
    command
        .args(invocation.args())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    if let Some(dir) = &invocation.working_directory {
        command.current_dir(dir);
    }
    if let Some(env) = &invocation.env {
        command.env_clear().envs(env.iter().map(|(k, v)| (k, v)));
    }

    Ok(command)
}

impl ProcessLauncher for OsProcessLauncher {
    fn launch(&self, invocation: ProcessInvocation) -> Result<SpawnedProcess> {
        let mut command = command(&invocation)?;
        let program = invocation.program().unwrap_or_default();

        let mut child = command
            .spawn()
            .map_err(|e| LaunchFailure::spawn(program, e))?;

        let pid = child.id();
        let process = match child.try_wait() {
            Ok(Some(status)) => match status.code() {
                Some(code) => SpawnedProcess::exited(pid, code),
                None => SpawnedProcess::running(pid),
            },
            _ => SpawnedProcess::running(pid),
        };

        trace!(program = %program, pid = ?pid, "Process spawned");

        drop(child);
        Ok(process)
    }
}
