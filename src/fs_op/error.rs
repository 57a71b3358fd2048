use thiserror::Error;
use std::path::PathBuf;

/// Errors produced by the filesystem helpers in `fs_op`.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// IO error tied to the path it happened on.
    #[error("Filesystem operation on `{path}` failed: {source}")]
    AtPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refused to create a path that is already present.
    #[error("already exists: `{0}`")]
    AlreadyExists(PathBuf),

    /// File content was not valid UTF-8 text.
    #[error("`{0}` does not contain UTF-8 text")]
    NotText(PathBuf),
}

impl FsOpError {
    pub(crate) fn at(path: &std::path::Path, source: std::io::Error) -> Self {
        FsOpError::AtPath {
            path: path.to_path_buf(),
            source,
        }
    }
}
