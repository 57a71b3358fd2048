//! Running external programs: one-shot commands with captured output, and
//! background children observed through a handle.

pub mod commands;
pub mod process;

pub use commands::{run_captured, run_checked, CommandOutput};
pub use process::ProcessHandle;
