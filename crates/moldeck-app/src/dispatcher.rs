//! Dispatcher implementations for reaching the viewer.

use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

use moldeck_core::{DispatchError, DispatchResult, ScriptDispatcher};

/// Dry-run dispatcher: logs every script instead of sending it anywhere.
/// Used when no viewer executable is configured.
#[derive(Debug, Default)]
pub struct LogDispatcher;

impl ScriptDispatcher for LogDispatcher {
    fn send(&mut self, script: &str, target: &str) -> DispatchResult<()> {
        log::info!("[dry-run] applet {target}: {script}");
        Ok(())
    }

    fn send_wait(&mut self, script: &str, target: &str) -> DispatchResult<String> {
        log::info!("[dry-run, wait] applet {target}: {script}");
        Ok("ok".to_string())
    }
}

/// Dispatcher that feeds scripts to a viewer child process, one
/// tab-separated `target\tscript` line per script. The waiting variant
/// reads one reply line back before returning; a reply starting with
/// `error:` is reported as a rejected script.
#[derive(Debug)]
pub struct ProcessDispatcher {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
}

impl ProcessDispatcher {
    /// Spawn the viewer executable with piped stdio.
    pub fn spawn(command: &str, args: &[String]) -> DispatchResult<Self> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|e| DispatchError::Spawn {
                command: command.to_string(),
                reason: e.to_string(),
            })?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| DispatchError::Io("viewer stdin was not captured".to_string()))?;
        let stdout = child
            .stdout
            .take()
            .map(BufReader::new)
            .ok_or_else(|| DispatchError::Io("viewer stdout was not captured".to_string()))?;
        log::info!("viewer {command:?} started");
        Ok(Self {
            child,
            stdin,
            stdout,
        })
    }

    fn write_line(&mut self, script: &str, target: &str) -> DispatchResult<()> {
        writeln!(self.stdin, "{target}\t{script}")
            .and_then(|_| self.stdin.flush())
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::BrokenPipe => DispatchError::Unreachable {
                    target: target.to_string(),
                    reason: "viewer process exited".to_string(),
                },
                _ => DispatchError::Io(e.to_string()),
            })
    }
}

impl ScriptDispatcher for ProcessDispatcher {
    fn send(&mut self, script: &str, target: &str) -> DispatchResult<()> {
        log::debug!("applet {target}: {script}");
        self.write_line(script, target)
    }

    fn send_wait(&mut self, script: &str, target: &str) -> DispatchResult<String> {
        self.write_line(script, target)?;
        let mut reply = String::new();
        self.stdout
            .read_line(&mut reply)
            .map_err(|e| DispatchError::Io(e.to_string()))?;
        let reply = reply.trim_end();
        if let Some(reason) = reply.strip_prefix("error:") {
            return Err(DispatchError::Rejected {
                script: script.to_string(),
                reason: reason.trim().to_string(),
            });
        }
        Ok(reply.to_string())
    }
}

impl Drop for ProcessDispatcher {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            log::warn!("failed to stop viewer process: {e}");
        }
        let _ = self.child.wait();
    }
}
