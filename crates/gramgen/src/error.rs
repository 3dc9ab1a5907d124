use crate::report::{self, Reportable};
use crate::runner::Attempt;
use std::io;

#[derive(Debug)]
pub enum Error {
    CleanOutputDirFailed(io::Error),
    CreateOutputDirFailed(io::Error),
    AllCandidatesFailed(Vec<Attempt>),
}

impl Reportable for Error {
    fn report(&self, dest: &mut impl io::Write) -> io::Result<()> {
        use Error::*;

        report::write_error_title(dest, "PARSER REGENERATION FAILED")?;
        match self {
            CleanOutputDirFailed(err) => {
                writeln!(dest, "Could not remove the old output directory: {}", err)
            }
            CreateOutputDirFailed(err) => {
                writeln!(dest, "Could not create the output directory: {}", err)
            }
            AllCandidatesFailed(attempts) => {
                writeln!(dest, "Every grammar compiler invocation failed:")?;
                for attempt in attempts {
                    writeln!(dest, "'{}' {}", attempt.invocation, attempt.status)?;
                }
                Ok(())
            }
        }
    }

    fn exit_status(&self) -> i32 {
        1
    }
}
