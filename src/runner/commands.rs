use std::ffi::OsStr;
use std::process::{Command, Output};

use crate::errors::{ProbeError, Result};

/// Everything observable about a finished external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub program: String,
    /// `None` when the process was killed by a signal.
    pub status_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status_code == Some(0)
    }

    fn from_output(program: &str, out: Output) -> Self {
        CommandOutput {
            program: program.to_string(),
            status_code: out.status.code(),
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        }
    }
}

/// Run `program` with `args` to completion, capturing stdout and stderr.
///
/// A non-zero exit status is not an error here; only failing to start the
/// program is. Callers decide what a given exit code means. The program and
/// arguments reach the OS unchanged; only the name kept for messages is
/// converted lossily.
pub fn run_captured<P, S>(program: P, args: &[S]) -> Result<CommandOutput>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    let program = program.as_ref();
    let name = program.to_string_lossy();
    let out = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| ProbeError::Spawn {
            program: name.to_string(),
            source,
        })?;
    let out = CommandOutput::from_output(&name, out);
    tracing::debug!(
        program = %name,
        args = ?args.iter().map(|a| a.as_ref().to_string_lossy()).collect::<Vec<_>>(),
        code = ?out.status_code,
        "command finished"
    );
    Ok(out)
}

/// Like [`run_captured`] but any unsuccessful exit becomes an error.
pub fn run_checked<P, S>(program: P, args: &[S]) -> Result<CommandOutput>
where
    P: AsRef<OsStr>,
    S: AsRef<OsStr>,
{
    let out = run_captured(program, args)?;
    match out.status_code {
        Some(0) => Ok(out),
        Some(code) => Err(ProbeError::CommandFailed {
            program: out.program,
            code,
            stderr: out.stderr.trim().to_string(),
        }),
        None => Err(ProbeError::Signaled {
            program: out.program,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_code() {
        let out = run_captured("sh", &["-c", "echo hello; echo oops >&2; exit 3"]).unwrap();
        assert_eq!(out.program, "sh");
        assert_eq!(out.stdout, "hello\n");
        assert_eq!(out.stderr, "oops\n");
        assert_eq!(out.status_code, Some(3));
        assert!(!out.success());
    }

    #[test]
    fn checked_turns_nonzero_into_error() {
        let err = run_checked("sh", &["-c", "echo broken >&2; exit 4"]).unwrap_err();
        match err {
            ProbeError::CommandFailed { program, code, stderr } => {
                assert_eq!(program, "sh");
                assert_eq!(code, 4);
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn checked_passes_through_success() {
        let out = run_checked("sh", &["-c", "printf ok"]).unwrap();
        assert!(out.success());
        assert_eq!(out.stdout, "ok");
    }

    #[test]
    fn signal_is_reported() {
        let err = run_checked("sh", &["-c", "kill -9 $$"]).unwrap_err();
        assert!(matches!(err, ProbeError::Signaled { .. }), "{:?}", err);
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = run_captured("sysprobe-definitely-not-a-program", &[] as &[&str]).unwrap_err();
        match err {
            ProbeError::Spawn { program, .. } => {
                assert_eq!(program, "sysprobe-definitely-not-a-program")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
