use crate::errors::{ProbeError, Result};
use crate::runner::commands::{run_captured, run_checked};

/// Prefix of device-node paths as printed in the first column of `df`.
pub const DEVICE_PATH_MARKER: &str = "/dev/";

/// Kernel release as reported by `uname -r`, trimmed.
pub fn kernel_release(uname_tool: &str) -> Result<String> {
    let out = run_checked(uname_tool, &["-r"])?;
    Ok(out.stdout.trim().to_string())
}

/// Human-readable disk usage table from `df -h`.
///
/// `df` exits non-zero when some mount cannot be read but still prints the
/// rest of the table, so only a failure to run it, or an empty table, is an
/// error.
pub fn disk_usage(df_tool: &str) -> Result<String> {
    let out = run_captured(df_tool, &["-h"])?;
    if !out.success() {
        tracing::warn!(code = ?out.status_code, stderr = %out.stderr.trim(), "df reported errors");
    }
    if out.stdout.trim().is_empty() {
        return Err(match out.status_code {
            Some(0) => ProbeError::Parse {
                program: out.program,
                output: out.stdout,
            },
            Some(code) => ProbeError::CommandFailed {
                program: out.program,
                code,
                stderr: out.stderr.trim().to_string(),
            },
            None => ProbeError::Signaled { program: out.program },
        });
    }
    Ok(out.stdout)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_release_is_single_line() {
        let rel = kernel_release("uname").unwrap();
        assert!(!rel.is_empty());
        assert!(!rel.contains('\n'));
    }

    #[test]
    fn disk_usage_has_header_and_rows() {
        // header wording is locale dependent, only the shape is checked
        let table = disk_usage("df").unwrap();
        assert!(table.lines().count() >= 2, "{}", table);
    }

    #[test]
    fn silent_success_is_parse_error() {
        match disk_usage("true") {
            Err(ProbeError::Parse { program, output }) => {
                assert_eq!(program, "true");
                assert!(output.trim().is_empty());
            }
            other => panic!("expected a parse error, got {:?}", other),
        }
    }

    #[test]
    fn failing_tool_without_output_is_error() {
        assert!(matches!(disk_usage("false"), Err(ProbeError::CommandFailed { code: 1, .. })));
    }
}
