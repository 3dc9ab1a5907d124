use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command as Cmd;

#[derive(Debug, Clone)]
struct ToolName(String);

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
enum Message {
    CheckingEnvVar(OsString),
    EnvVarFound(OsString, String),
    EnvVarUnset(OsString, std::env::VarError),
    EnvVarBadPath(OsString, PathBuf),

    RunningWhich(OsString),
    WhichSuccess(OsString, PathBuf),
    WhichFailure(OsString, which::Error),
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::CheckingEnvVar(var) => {
                write!(f, "Checking environment variable '{}'", var.display())
            }
            Message::EnvVarFound(var, val) => {
                write!(f, "Environment variable found: {}={}", var.display(), val)
            }
            Message::EnvVarUnset(var, err) => {
                write!(f, "Environment variable '{}' unset: {}", var.display(), err)
            }
            Message::EnvVarBadPath(var, path) => {
                write!(
                    f,
                    "Environment variable '{}' points to '{}', which does not exist",
                    var.display(),
                    path.display()
                )
            }

            Message::RunningWhich(exe) => {
                write!(f, "Checking executable '{}'", exe.display())
            }
            Message::WhichSuccess(exe, path) => {
                write!(
                    f,
                    "Executable '{}' found: path is '{}'",
                    exe.display(),
                    path.display()
                )
            }
            Message::WhichFailure(exe, err) => {
                write!(f, "Executable '{}' invalid: {err}", exe.display())
            }
        }
    }
}

#[derive(Debug, Clone)]
struct Log {
    messages: Vec<Message>,
}

impl Log {
    fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    fn push(&mut self, message: Message) {
        self.messages.push(message);
    }
}

impl fmt::Display for Log {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for message in &self.messages {
            writeln!(f, "- {message}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct Tool {
    name: ToolName,
    path: PathBuf,
}

impl Tool {
    pub fn new(name: &str, path: &Path) -> Self {
        Self {
            name: ToolName(name.to_owned()),
            path: path.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name.0
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EnvVarKind {
    /// If the env var is defined but does not point to an existing file, try further strategies.
    Soft,
    /// If the env var is defined but does not point to an existing file, don't try further
    /// strategies.
    Hard,
}

#[derive(Debug, Clone)]
pub enum Strategy {
    EnvVar(OsString, EnvVarKind),
    Which(OsString),
}

#[derive(Debug, Clone)]
pub struct ToolFinder {
    name: ToolName,
    search_strategies: Vec<Strategy>,
}

impl ToolFinder {
    pub fn new(name: &str) -> Self {
        Self {
            name: ToolName(name.to_owned()),
            search_strategies: Vec::new(),
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.search_strategies.push(strategy);
        self
    }

    fn try_strategy(&self, log: &mut Log, strategy: &Strategy) -> Option<Option<Tool>> {
        match strategy {
            Strategy::EnvVar(var, kind) => {
                log.push(Message::CheckingEnvVar(var.clone()));
                match std::env::var(var) {
                    Ok(val) => {
                        let path = PathBuf::from(&val);
                        log.push(Message::EnvVarFound(var.clone(), val));
                        if path.exists() {
                            Some(Some(Tool {
                                name: self.name.clone(),
                                path,
                            }))
                        } else {
                            log.push(Message::EnvVarBadPath(var.clone(), path));
                            match kind {
                                EnvVarKind::Soft => None,
                                EnvVarKind::Hard => Some(None),
                            }
                        }
                    }
                    Err(err) => {
                        log.push(Message::EnvVarUnset(var.clone(), err));
                        None
                    }
                }
            }
            Strategy::Which(exe) => {
                log.push(Message::RunningWhich(exe.clone()));
                match which::which(exe) {
                    Ok(path) => {
                        log.push(Message::WhichSuccess(exe.clone(), path.clone()));
                        Some(Some(Tool {
                            name: self.name.clone(),
                            path,
                        }))
                    }
                    Err(err) => {
                        log.push(Message::WhichFailure(exe.clone(), err));
                        None
                    }
                }
            }
        }
    }

    /// Tries each strategy in order. On failure the error string is the full search log, so the
    /// user can see why every strategy came up empty.
    pub fn find_tool(&self) -> Result<Tool, String> {
        let mut log = Log::new();
        self.search_strategies
            .iter()
            .find_map(|strategy| self.try_strategy(&mut log, strategy))
            .flatten()
            .ok_or_else(|| log.to_string())
    }
}

pub fn display_cmd(cmd: &Cmd) -> String {
    std::iter::once(cmd.get_program())
        .chain(cmd.get_args())
        .map(|s| s.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}
