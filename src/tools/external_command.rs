use crate::error::{ShuffleError, ShuffleResult};
use crate::signal::is_shutdown_requested;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::Duration;

const STDERR_TAIL_LINES: usize = 20;

#[derive(Debug)]
pub struct CommandOutcome {
    pub status: ExitStatus,
    pub stderr_tail: String,
}

impl CommandOutcome {
    #[must_use]
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Exit status plus the last non-empty stderr line, for one-line diagnostics.
    #[must_use]
    pub fn failure_summary(&self) -> String {
        let status = self.status.code().map_or_else(
            || "terminated by signal".to_string(),
            |code| format!("exit status {code}"),
        );
        match self
            .stderr_tail
            .lines()
            .rev()
            .find(|line| !line.trim().is_empty())
        {
            Some(line) => format!("{status}: {}", line.trim()),
            None => status,
        }
    }
}

/// Runs `command` to completion, polling for the shutdown signal.
///
/// stderr goes to an anonymous temp file rather than a pipe so a chatty tool
/// can never block on a full pipe buffer. On shutdown the child is killed and
/// reaped before `Interrupted` is returned.
pub fn run_external(
    mut command: Command,
    label: &str,
    shutdown_signal: &AtomicBool,
    poll_interval: Duration,
) -> ShuffleResult<CommandOutcome> {
    let program = command.get_program().to_string_lossy().into_owned();
    debug!(
        "running {program} {:?}",
        command.get_args().collect::<Vec<_>>()
    );

    let mut stderr_log = tempfile::tempfile()
        .map_err(|e| ShuffleError::io("Failed to create stderr capture file", e))?;
    let stderr_handle = stderr_log
        .try_clone()
        .map_err(|e| ShuffleError::io("Failed to create stderr capture file", e))?;

    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::from(stderr_handle));

    let mut child = command.spawn().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            ShuffleError::MissingDependency(vec![program.clone()])
        } else {
            ShuffleError::io(format!("Failed to start {program}"), e)
        }
    })?;

    let spinner = spinner(label);
    let waited = wait_for_exit(&mut child, shutdown_signal, poll_interval);
    spinner.finish_and_clear();

    let status = match waited {
        Ok(status) => status,
        Err(e) => {
            warn!("stopping {program} [{}]", child.id());
            let _ = child.kill();
            let _ = child.wait();
            return Err(e);
        }
    };

    let stderr_tail = read_tail(&mut stderr_log, STDERR_TAIL_LINES);
    debug!("{program} finished with {status}");

    Ok(CommandOutcome {
        status,
        stderr_tail,
    })
}

fn wait_for_exit(
    child: &mut Child,
    shutdown_signal: &AtomicBool,
    poll_interval: Duration,
) -> ShuffleResult<ExitStatus> {
    loop {
        if is_shutdown_requested(shutdown_signal) {
            return Err(ShuffleError::Interrupted);
        }

        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => thread::sleep(poll_interval),
            Err(e) => return Err(ShuffleError::io("Failed to check process status", e)),
        }
    }
}

fn spinner(label: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(label.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn read_tail(file: &mut File, max_lines: usize) -> String {
    let mut bytes = Vec::new();
    if file.seek(SeekFrom::Start(0)).is_err() || file.read_to_end(&mut bytes).is_err() {
        return String::new();
    }

    let text = String::from_utf8_lossy(&bytes);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].join("\n")
}
