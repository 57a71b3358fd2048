use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::fs_op::{set_mode, write_text};
use crate::runner::commands::{run_captured, CommandOutput};

pub const SCRIPT_FILE_NAME: &str = "demo_script.sh";

/// The generated script: prints a known phrase and exits 0.
pub const DEMO_SCRIPT: &str = "#!/bin/bash
echo \"Script executed successfully\"
exit 0
";

/// Write `body` to `dir/name` and mark it `0o755`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    write_text(&path, body)?;
    set_mode(&path, 0o755)?;
    Ok(path)
}

/// Execute the script directly (through its shebang), capturing output.
pub fn run_script(path: &Path) -> Result<CommandOutput> {
    run_captured(path, &[] as &[&OsStr])
}
