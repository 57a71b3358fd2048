//! The demonstration suite as data: nine named cases, each an independent
//! "drive an OS primitive, assert the observed fact" procedure, plus a runner
//! that executes them and collects a report.

pub mod cases;
pub mod expect;
pub mod report;

use std::path::Path;

use tempfile::TempDir;
use thiserror::Error;

use crate::errors::ProbeError;
use crate::settings::Settings;

pub use report::{run_suite, CaseResult, Outcome, Report, RunMode};

/// Why a case did not pass.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The observed value differed from the expected one.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// The observation could not be made (missing tool, I/O failure...).
    #[error("execution error: {0}")]
    Execution(#[from] ProbeError),
}

impl From<crate::fs_op::FsOpError> for CheckError {
    fn from(e: crate::fs_op::FsOpError) -> Self {
        CheckError::Execution(e.into())
    }
}

pub type CheckResult = Result<(), CheckError>;

/// Everything a case may use. The temporary directory belongs to exactly one
/// case and is removed when the context is dropped.
pub struct CheckContext<'a> {
    pub settings: &'a Settings,
    tmp: TempDir,
}

impl<'a> CheckContext<'a> {
    pub fn new(settings: &'a Settings) -> Result<Self, ProbeError> {
        let tmp = tempfile::Builder::new().prefix("sysprobe-").tempdir()?;
        Ok(CheckContext { settings, tmp })
    }

    pub fn tmp_path(&self) -> &Path {
        self.tmp.path()
    }
}

type CaseFn = Box<dyn Fn(&CheckContext<'_>) -> CheckResult + Send + Sync>;

/// One runnable case.
pub struct CheckCase {
    pub name: String,
    pub description: String,
    run: CaseFn,
}

impl CheckCase {
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, run: F) -> Self
    where
        F: Fn(&CheckContext<'_>) -> CheckResult + Send + Sync + 'static,
    {
        CheckCase {
            name: name.into(),
            description: description.into(),
            run: Box::new(run),
        }
    }

    pub fn run(&self, ctx: &CheckContext<'_>) -> CheckResult {
        (self.run)(ctx)
    }
}

impl std::fmt::Debug for CheckCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckCase").field("name", &self.name).finish()
    }
}

/// (pattern, expected count) pairs for the log-analysis case.
pub const LOG_PATTERNS: [(&str, u64); 3] = [("INFO", 2), ("ERROR", 1), ("WARNING", 0)];

/// The full suite, in declaration order.
pub fn suite() -> Vec<CheckCase> {
    let mut out = vec![
        CheckCase::new(
            "file_operations",
            "create, write and read back a file",
            cases::file_operations,
        ),
        CheckCase::new(
            "process_management",
            "spawn a delay process and observe its lifecycle",
            cases::process_management,
        ),
    ];
    for (pattern, expected) in LOG_PATTERNS {
        out.push(CheckCase::new(
            format!("log_analysis[{}-{}]", pattern, expected),
            format!("grep -c {} over the sample log prints {}", pattern, expected),
            move |ctx: &CheckContext<'_>| cases::log_analysis(ctx, pattern, expected),
        ));
    }
    out.push(CheckCase::new(
        "file_permissions",
        "chmod 600 and read the mode back",
        cases::file_permissions,
    ));
    out.push(CheckCase::new(
        "system_info",
        "kernel release and disk usage are reported",
        cases::system_info,
    ));
    out.push(CheckCase::new(
        "bash_script_execution",
        "generate, mark executable and run a shell script",
        cases::bash_script_execution,
    ));
    out
}

/// Keep the cases whose name contains `pattern`.
pub fn filter_cases(cases: Vec<CheckCase>, pattern: &str) -> Vec<CheckCase> {
    cases.into_iter().filter(|c| c.name.contains(pattern)).collect()
}

/// One line per case: name padded to a column, then the description.
pub fn render_listing(cases: &[CheckCase]) -> String {
    let width = cases.iter().map(|c| c.name.len()).max().unwrap_or(0);
    cases
        .iter()
        .map(|c| format!("{:<width$}  {}\n", c.name, c.description, width = width))
        .collect()
}
