use std::path::PathBuf;

use thiserror::Error;

use crate::fs_op::error::FsOpError;

/// Errors produced while driving an OS primitive.
///
/// These are execution errors: something prevented the observation from being
/// made at all. A mismatch between an observed and an expected value is a
/// [`crate::checks::CheckError::Assertion`] instead.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    FsOp(#[from] FsOpError),

    /// The program could not be started at all (missing binary, bad perms).
    #[error("failed to spawn `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with status {code}: {stderr}")]
    CommandFailed {
        program: String,
        code: i32,
        stderr: String,
    },

    #[error("`{program}` was terminated by a signal")]
    Signaled { program: String },

    #[error("could not parse output of `{program}`: {output:?}")]
    Parse { program: String, output: String },

    #[error("invalid configuration in `{path}`: {msg}")]
    Config { path: PathBuf, msg: String },
}

pub type Result<T> = std::result::Result<T, ProbeError>;
