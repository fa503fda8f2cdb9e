//! The dispatcher seam between the deck and the embedded viewer.
//!
//! Widgets never talk to the viewer directly; they hand finished script
//! strings to a [`ScriptDispatcher`] along with the id of the target
//! applet. The deck adds no retries or recovery on top of the dispatcher's
//! own contract.

use thiserror::Error;

/// Dispatcher errors.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("failed to start viewer {command:?}: {reason}")]
    Spawn { command: String, reason: String },
    #[error("viewer target {target:?} is not reachable: {reason}")]
    Unreachable { target: String, reason: String },
    #[error("viewer rejected script {script:?}: {reason}")]
    Rejected { script: String, reason: String },
    #[error("viewer I/O error: {0}")]
    Io(String),
}

pub type DispatchResult<T> = Result<T, DispatchError>;

/// Command channel to an embedded molecular viewer.
pub trait ScriptDispatcher {
    /// Fire-and-forget script execution on the target applet.
    fn send(&mut self, script: &str, target: &str) -> DispatchResult<()>;

    /// Send a script and block until the target applet has executed it,
    /// returning the viewer's reply.
    fn send_wait(&mut self, script: &str, target: &str) -> DispatchResult<String>;
}

/// A script captured by [`RecordingDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentScript {
    pub script: String,
    pub target: String,
    /// Whether the caller used the waiting variant.
    pub waited: bool,
}

/// Dispatcher that records every script instead of executing it. Backs the
/// unit tests; also useful for dry runs.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    sent: Vec<SentScript>,
    reply: String,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reply returned by [`ScriptDispatcher::send_wait`].
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            sent: Vec::new(),
            reply: reply.into(),
        }
    }

    pub fn sent(&self) -> &[SentScript] {
        &self.sent
    }

    /// The scripts alone, in dispatch order.
    pub fn scripts(&self) -> Vec<&str> {
        self.sent.iter().map(|s| s.script.as_str()).collect()
    }
}

impl ScriptDispatcher for RecordingDispatcher {
    fn send(&mut self, script: &str, target: &str) -> DispatchResult<()> {
        self.sent.push(SentScript {
            script: script.to_string(),
            target: target.to_string(),
            waited: false,
        });
        Ok(())
    }

    fn send_wait(&mut self, script: &str, target: &str) -> DispatchResult<String> {
        self.sent.push(SentScript {
            script: script.to_string(),
            target: target.to_string(),
            waited: true,
        });
        Ok(self.reply.clone())
    }
}
