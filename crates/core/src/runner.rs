//! Bounded execution of the external resource editor.
//!
//! Spawns the configured Resource Hacker executable with a prepared
//! argument vector, captures stdout/stderr up to a fixed cap, and enforces
//! a wall-clock timeout. Every failure path (spawn error, non-zero exit,
//! timeout, output overflow) is normalized into an [`ExecOutcome`] carrying
//! whatever partial output was captured — the tool emits its diagnostics on
//! the failure path, and callers need to see them.

use std::process::Stdio;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;

/// Maximum stdout or stderr size captured per stream (10 MiB).
///
/// Exceeding the cap is a failure condition, not silent truncation: a
/// listing that overflows the buffer is incomplete and must not be
/// presented as a successful result.
pub const MAX_OUTPUT_BYTES: usize = 10 * 1024 * 1024;

/// Default wall-clock timeout for editor invocations.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Shorter timeout for help/inspection requests, which never touch files.
pub const HELP_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Process-wide editor configuration, resolved once at startup and passed
/// by reference into [`run_editor`].
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Path to the Resource Hacker executable, or a bare command name to be
    /// resolved via the host's executable search.
    pub executable: String,
    /// Timeout applied to file-modifying operations.
    pub timeout: Duration,
}

impl EditorConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default              |
    /// |------------------------|----------------------|
    /// | `RESOURCE_HACKER_PATH` | `ResourceHacker.exe` |
    /// | `RH_TIMEOUT_MS`        | `30000`              |
    pub fn from_env() -> Self {
        let executable = std::env::var("RESOURCE_HACKER_PATH")
            .unwrap_or_else(|_| "ResourceHacker.exe".to_string());
        let timeout = std::env::var("RH_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);
        Self {
            executable,
            timeout,
        }
    }
}

/// Normalized result of one editor invocation.
///
/// `success` means the process exited zero within the timeout and under the
/// output cap. Exit codes are not interpreted beyond zero/nonzero; the
/// captured text carries the tool's own diagnostics.
#[derive(Debug, Clone)]
pub struct ExecOutcome {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
    /// Human-readable failure description when `success` is false.
    pub failure: Option<String>,
    /// Exit code, absent when the process was killed or never started.
    pub exit_code: Option<i32>,
}

impl ExecOutcome {
    /// Captured text for operator display: stdout, falling back to stderr.
    pub fn captured(&self) -> &str {
        if self.stdout.is_empty() {
            &self.stderr
        } else {
            &self.stdout
        }
    }

    fn spawn_failure(message: String) -> Self {
        Self {
            success: false,
            stdout: String::new(),
            stderr: String::new(),
            failure: Some(message),
            exit_code: None,
        }
    }
}

/// Execute the configured editor with `args` under `timeout`.
///
/// Never returns an error: spawn failures, non-zero exits, timeouts, and
/// output overflows all normalize into a failed [`ExecOutcome`].
pub async fn run_editor(config: &EditorConfig, args: &[String], timeout: Duration) -> ExecOutcome {
    let mut cmd = Command::new(&config.executable);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    // Resource Hacker is a GUI tool in command-line mode; keep it headless.
    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        cmd.creation_flags(CREATE_NO_WINDOW);
    }

    tracing::debug!(executable = %config.executable, ?args, "Spawning resource editor");

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(e) => {
            tracing::warn!(executable = %config.executable, error = %e, "Failed to spawn editor");
            return ExecOutcome::spawn_failure(format!(
                "Failed to start '{}': {e}",
                config.executable
            ));
        }
    };

    // Read both streams in spawned tasks so `child.wait()` (which borrows
    // `&mut child`) can run concurrently with capture.
    let stdout_handle = child.stdout.take();
    let stderr_handle = child.stderr.take();
    let stdout_task = tokio::spawn(async move { read_stream(stdout_handle).await });
    let stderr_task = tokio::spawn(async move { read_stream(stderr_handle).await });

    let wait_result = tokio::time::timeout(timeout, child.wait()).await;

    // On timeout the child is dropped with `kill_on_drop(true)`, which kills
    // the process. Stream collection on the kill paths is best-effort with a
    // short grace window: a grandchild holding the pipes open must not turn
    // a timeout into a hang.
    let status = match wait_result {
        Ok(Ok(status)) => status,
        Ok(Err(e)) => {
            drop(child);
            let (stdout, _) = drain_stream(stdout_task).await;
            let (stderr, _) = drain_stream(stderr_task).await;
            return ExecOutcome {
                success: false,
                stdout,
                stderr,
                failure: Some(format!("Failed to wait for editor process: {e}")),
                exit_code: None,
            };
        }
        Err(_elapsed) => {
            drop(child);
            let (stdout, _) = drain_stream(stdout_task).await;
            let (stderr, _) = drain_stream(stderr_task).await;
            return ExecOutcome {
                success: false,
                stdout,
                stderr,
                failure: Some(format!(
                    "Editor timed out after {}ms and was terminated",
                    timeout.as_millis()
                )),
                exit_code: None,
            };
        }
    };

    let (stdout, stdout_overflow) = finish_stream(stdout_task).await;
    let (stderr, stderr_overflow) = finish_stream(stderr_task).await;

    if stdout_overflow || stderr_overflow {
        return ExecOutcome {
            success: false,
            stdout,
            stderr,
            failure: Some(format!(
                "Editor output exceeded the {} MiB capture limit",
                MAX_OUTPUT_BYTES / (1024 * 1024)
            )),
            exit_code: status.code(),
        };
    }

    if status.success() {
        ExecOutcome {
            success: true,
            stdout,
            stderr,
            failure: None,
            exit_code: status.code(),
        }
    } else {
        let failure = match status.code() {
            Some(code) => format!("Editor exited with code {code}"),
            None => "Editor was terminated by a signal".to_string(),
        };
        ExecOutcome {
            success: false,
            stdout,
            stderr,
            failure: Some(failure),
            exit_code: status.code(),
        }
    }
}

/// Read an output stream to EOF, capturing at most [`MAX_OUTPUT_BYTES`].
///
/// Bytes past the cap are discarded but still consumed, so a verbose child
/// never blocks on a full pipe; the overflow flag records that the capture
/// is incomplete. Returns the captured bytes and whether the cap was hit.
async fn read_stream<R: AsyncRead + Unpin>(handle: Option<R>) -> (Vec<u8>, bool) {
    let mut buf = Vec::new();
    let mut overflow = false;
    let Some(mut h) = handle else {
        return (buf, overflow);
    };
    let mut chunk = [0u8; 8192];
    loop {
        match h.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                let room = MAX_OUTPUT_BYTES.saturating_sub(buf.len());
                let keep = n.min(room);
                buf.extend_from_slice(&chunk[..keep]);
                if keep < n {
                    overflow = true;
                }
            }
        }
    }
    (buf, overflow)
}

async fn finish_stream(task: tokio::task::JoinHandle<(Vec<u8>, bool)>) -> (String, bool) {
    let (bytes, overflow) = task.await.unwrap_or_default();
    (String::from_utf8_lossy(&bytes).into_owned(), overflow)
}

/// Grace window for collecting partial output after the child was killed.
const DRAIN_GRACE: Duration = Duration::from_millis(250);

/// Best-effort stream collection for the kill paths. Gives up after
/// [`DRAIN_GRACE`] in case something inherited the pipe and kept it open.
async fn drain_stream(task: tokio::task::JoinHandle<(Vec<u8>, bool)>) -> (String, bool) {
    match tokio::time::timeout(DRAIN_GRACE, task).await {
        Ok(result) => {
            let (bytes, overflow) = result.unwrap_or_default();
            (String::from_utf8_lossy(&bytes).into_owned(), overflow)
        }
        Err(_elapsed) => (String::new(), false),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
