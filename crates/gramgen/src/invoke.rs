use crate::progress::{self, ProgressMode};
use find_tool::{display_cmd, finders};
use std::ffi::OsString;
use std::fmt;
use std::process;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolStatus {
    Success,
    /// Non-zero exit. 'None' means the child was killed by a signal.
    Failure(Option<i32>),
    /// The invocation could not be located or started; the payload explains why.
    Unavailable(String),
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolStatus::Success => write!(f, "succeeded"),
            ToolStatus::Failure(Some(code)) => write!(f, "exited with status {}", code),
            ToolStatus::Failure(None) => write!(f, "was terminated by a signal"),
            ToolStatus::Unavailable(reason) => {
                write!(f, "could not be run:\n{}", reason.trim_end())
            }
        }
    }
}

/// The subprocess boundary of the regeneration runner. Tests substitute a fake so the runner can
/// be exercised without a grammar compiler installed.
pub trait Invoker {
    fn invoke(&mut self, invocation: &str, args: &[OsString]) -> ToolStatus;
}

/// Runs tools as real child processes, resolving invocation names through 'find_tool'. Stdio is
/// inherited, so the grammar compiler's own diagnostics go straight to the terminal.
pub struct SystemInvoker {
    progress: ProgressMode,
}

impl SystemInvoker {
    pub fn new(progress: ProgressMode) -> Self {
        Self { progress }
    }
}

impl Invoker for SystemInvoker {
    fn invoke(&mut self, invocation: &str, args: &[OsString]) -> ToolStatus {
        let tool = match finders::find_invocation(invocation) {
            Ok(tool) => tool,
            Err(log) => return ToolStatus::Unavailable(log),
        };

        let mut cmd = process::Command::new(tool.path());
        cmd.args(args);

        let bar = progress::spinner(self.progress, invocation);
        let status = cmd.status();
        bar.finish();

        match status {
            Ok(status) if status.success() => ToolStatus::Success,
            Ok(status) => ToolStatus::Failure(status.code()),
            Err(err) => {
                ToolStatus::Unavailable(format!("Cannot execute '{}': {}", display_cmd(&cmd), err))
            }
        }
    }
}
