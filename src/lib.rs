//! sysprobe drives elementary operating-system interactions (file writes,
//! child processes, `grep`, `chmod`, `uname`, `df`, generated shell scripts)
//! and checks the outcome each one should produce.
//!
//! The library exposes the primitives (`fs_op`, `runner`, `probes`) and the
//! suite built on them (`checks`). The `sysprobe` binary runs the suite.

pub mod checks;
pub mod errors;
pub mod fs_op;
pub mod logging;
pub mod probes;
pub mod runner;
pub mod settings;

pub use crate::checks::{run_suite, suite, CheckCase, CheckError, Outcome, Report, RunMode};
pub use crate::errors::ProbeError;
pub use crate::settings::Settings;
