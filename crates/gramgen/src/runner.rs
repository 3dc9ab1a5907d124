use crate::config::RegenConfig;
use crate::error::Error;
use crate::invoke::{Invoker, ToolStatus};
use crate::report;
use std::ffi::OsString;
use std::fs;
use std::io;

/// One grammar compiler invocation and how it ended.
#[derive(Clone, Debug)]
pub struct Attempt {
    pub invocation: String,
    pub status: ToolStatus,
}

/// A successful regeneration. 'skipped' lists the candidates that failed before 'used' succeeded,
/// so a fallback run still surfaces the primary tool's failure.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub used: String,
    pub skipped: Vec<Attempt>,
}

impl Outcome {
    pub fn write_warnings(&self, dest: &mut impl io::Write) -> io::Result<()> {
        if self.skipped.is_empty() {
            return Ok(());
        }
        report::write_warning_title(dest, "USED FALLBACK TOOL")?;
        for attempt in &self.skipped {
            writeln!(dest, "'{}' {}", attempt.invocation, attempt.status)?;
        }
        writeln!(dest, "Regenerated with '{}' instead.", self.used)
    }
}

/// Produces a clean output directory and populates it by running the configured grammar compiler,
/// trying the fallback invocation once if the primary one fails.
///
/// Directory cleanup errors are fatal and reported before any tool runs. The generated sources
/// are written entirely by the external tool; on a double failure the output directory is left
/// empty.
pub fn regenerate(config: &RegenConfig, invoker: &mut impl Invoker) -> Result<Outcome, Error> {
    if config.output_dir.exists() {
        fs::remove_dir_all(&config.output_dir).map_err(Error::CleanOutputDirFailed)?;
    }
    fs::create_dir(&config.output_dir).map_err(Error::CreateOutputDirFailed)?;

    let mut language_flag = OsString::from("-Dlanguage=");
    language_flag.push(&config.target_language);

    // Both candidates must see the exact same argument vector.
    let args = [
        language_flag,
        config.grammar_path.clone().into_os_string(),
        OsString::from("-o"),
        config.output_dir.clone().into_os_string(),
    ];

    let mut attempts = Vec::new();
    for invocation in [&config.primary_tool, &config.fallback_tool] {
        let status = invoker.invoke(invocation, &args);
        if status == ToolStatus::Success {
            return Ok(Outcome {
                used: invocation.clone(),
                skipped: attempts,
            });
        }
        attempts.push(Attempt {
            invocation: invocation.clone(),
            status,
        });
    }
    Err(Error::AllCandidatesFailed(attempts))
}
