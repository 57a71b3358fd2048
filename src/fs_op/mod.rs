//! Filesystem primitives used by the probes: creating and writing files,
//! classifying paths, and reading or changing permission bits.

pub mod create;
pub mod error;
pub mod helpers;
pub mod permissions;
pub mod stat;

pub use create::{create_file, read_text, write_text};
pub use error::FsOpError;
pub use permissions::{change_permissions, file_mode, format_octal, is_executable, set_mode};
pub use stat::{exists, is_file, PathType};
