//! Bodies of the suite's cases.

use crate::checks::expect::{expect_contains, expect_eq, expect_that};
use crate::checks::{CheckContext, CheckResult};
use crate::fs_op::{
    change_permissions, create_file, exists, file_mode, format_octal, is_executable, is_file, read_text,
    write_text,
};
use crate::probes::log_scan::{grep_count, write_log_fixture};
use crate::probes::script::{run_script, write_script, DEMO_SCRIPT, SCRIPT_FILE_NAME};
use crate::probes::sys_info::{disk_usage, kernel_release, DEVICE_PATH_MARKER};
use crate::runner::ProcessHandle;

pub const DEMO_TEXT: &str = "Sysprobe QA Automation demo!";

pub fn file_operations(ctx: &CheckContext<'_>) -> CheckResult {
    let file = ctx.tmp_path().join("demo.txt");
    write_text(&file, DEMO_TEXT)?;
    expect_that(exists(&file), "file should have been created")?;
    expect_that(is_file(&file), "created path should be a regular file")?;
    let content = read_text(&file)?;
    expect_contains(&content, "QA Automation", "file holds unexpected data")
}

pub fn process_management(ctx: &CheckContext<'_>) -> CheckResult {
    let secs = ctx.settings.process.sleep_secs.to_string();
    let mut child = ProcessHandle::spawn(&ctx.settings.tools.sleep, &[secs.as_str()])?;
    expect_that(child.is_running()?, "process should still be running right after launch")?;
    let code = child.wait()?;
    expect_eq(&code, &0, "process should exit successfully")
}

pub fn log_analysis(ctx: &CheckContext<'_>, pattern: &str, expected: u64) -> CheckResult {
    let log = write_log_fixture(ctx.tmp_path())?;
    let out = grep_count(&ctx.settings.tools.grep, pattern, &log)?;
    expect_eq(
        out.stdout.trim(),
        expected.to_string().as_str(),
        &format!("wrong number of {} records", pattern),
    )
}

pub fn file_permissions(ctx: &CheckContext<'_>) -> CheckResult {
    let file = ctx.tmp_path().join("secure.txt");
    create_file(&file)?;
    change_permissions(&ctx.settings.tools.chmod, &file, "600")?;
    let mode = format_octal(file_mode(&file)?);
    expect_eq(mode.as_str(), "600", "permissions should be 600")
}

pub fn system_info(ctx: &CheckContext<'_>) -> CheckResult {
    let release = kernel_release(&ctx.settings.tools.uname)?;
    expect_that(!release.is_empty(), "kernel information should be available")?;
    let table = disk_usage(&ctx.settings.tools.df)?;
    expect_contains(&table, DEVICE_PATH_MARKER, "disk information should be available")
}

pub fn bash_script_execution(ctx: &CheckContext<'_>) -> CheckResult {
    let script = write_script(ctx.tmp_path(), SCRIPT_FILE_NAME, DEMO_SCRIPT)?;
    expect_that(is_executable(&script)?, "script should be marked executable")?;
    let out = run_script(&script)?;
    expect_contains(&out.stdout, "successfully", "script output")?;
    expect_eq(&out.status_code, &Some(0), "script exit code")
}
