//! The OS interactions exercised by the suite. Each function drives one
//! external tool or file operation and hands back what it observed; judging
//! the observation is left to the caller.

pub mod log_scan;
pub mod script;
pub mod sys_info;
