use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::errors::{ProbeError, Result};
use crate::fs_op::write_text;
use crate::runner::commands::{run_captured, CommandOutput};

/// Fixed log fixture: two INFO lines, one ERROR line, no WARNING line.
/// Indentation and the blank first and last lines are part of the fixture.
pub const SAMPLE_LOG: &str = "
    [INFO] System started
    [ERROR] Disk full
    [INFO] User logged in
    ";

pub const LOG_FILE_NAME: &str = "app.log";

/// Write [`SAMPLE_LOG`] to `app.log` inside `dir` and return its path.
pub fn write_log_fixture(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(LOG_FILE_NAME);
    write_text(&path, SAMPLE_LOG)?;
    Ok(path)
}

/// Run `grep -c <pattern> <file>` and return its raw output. The count is
/// whatever grep printed on stdout.
///
/// grep exits 1 when no line matched; that still prints `0` and is not an
/// error. Exit status 2 and above means grep itself failed.
pub fn grep_count(grep_tool: &str, pattern: &str, file: &Path) -> Result<CommandOutput> {
    let args = [OsStr::new("-c"), OsStr::new(pattern), file.as_os_str()];
    let out = run_captured(grep_tool, &args)?;
    match out.status_code {
        Some(0) | Some(1) => Ok(out),
        Some(code) => Err(ProbeError::CommandFailed {
            program: out.program,
            code,
            stderr: out.stderr.trim().to_string(),
        }),
        None => Err(ProbeError::Signaled { program: out.program }),
    }
}

/// Number of lines in `file` matching `pattern`, as counted by grep.
pub fn count_matching_lines(grep_tool: &str, pattern: &str, file: &Path) -> Result<u64> {
    let out = grep_count(grep_tool, pattern, file)?;
    let printed = out.stdout.trim();
    printed.parse().map_err(|_| ProbeError::Parse {
        program: out.program.clone(),
        output: printed.to_string(),
    })
}
