//! Permission bits: change them through the external `chmod` utility or
//! directly through the OS, and read them back as octal.
//!
//! Only the classic `rwx` triplets are looked at. Setuid/setgid/sticky bits
//! and the file-type bits of `st_mode` are masked off.

use std::ffi::OsStr;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use crate::errors::{ProbeError, Result};
use crate::fs_op::error::FsOpError;
use crate::runner::commands::run_checked;

/// Mask for the user/group/other permission triplets.
pub const PERMISSION_BITS: u32 = 0o777;

/// Run the external permission-change utility, e.g. `chmod 600 <path>`.
///
/// A non-zero exit from the tool is reported as
/// [`ProbeError::CommandFailed`] with its stderr.
pub fn change_permissions(chmod_tool: &str, path: &Path, mode_spec: &str) -> Result<()> {
    run_checked(chmod_tool, &[OsStr::new(mode_spec), path.as_os_str()])?;
    tracing::debug!(path = %path.display(), mode = mode_spec, "changed permissions");
    Ok(())
}

/// Set permission bits directly, without going through an external tool.
pub fn set_mode(path: &Path, mode: u32) -> Result<()> {
    let perms = fs::Permissions::from_mode(mode & PERMISSION_BITS);
    fs::set_permissions(path, perms).map_err(|e| FsOpError::at(path, e))?;
    Ok(())
}

/// Current permission bits of `path` (`st_mode & 0o777`).
pub fn file_mode(path: &Path) -> Result<u32> {
    let md = fs::metadata(path).map_err(|e| ProbeError::from(FsOpError::at(path, e)))?;
    Ok(md.permissions().mode() & PERMISSION_BITS)
}

/// Three-digit octal rendering of the permission bits: `0o600` -> `"600"`.
pub fn format_octal(mode: u32) -> String {
    format!("{:03o}", mode & PERMISSION_BITS)
}

/// True if any of the execute bits is set.
pub fn is_executable(path: &Path) -> Result<bool> {
    Ok(file_mode(path)? & 0o111 != 0)
}
