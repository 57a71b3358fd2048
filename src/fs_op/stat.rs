use std::fs;
use std::path::Path;

/// What a path points at, as seen by a single `stat` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathType {
    NotFound,
    Directory,
    File,
    /// Anything else that exists: FIFO, socket, device node, dangling symlink.
    Other,
}

impl PathType {
    /// Classify `path`, following symlinks. A symlink whose target is gone
    /// is reported as `Other` rather than `NotFound`.
    pub fn of<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        match fs::metadata(p) {
            Ok(md) if md.is_dir() => PathType::Directory,
            Ok(md) if md.is_file() => PathType::File,
            Ok(_) => PathType::Other,
            Err(_) if fs::symlink_metadata(p).is_ok() => PathType::Other,
            Err(_) => PathType::NotFound,
        }
    }
}

/// Return `true` if the provided `path` exists.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) != PathType::NotFound
}

/// Return `true` if the provided `path` is a regular file.
pub fn is_file<P: AsRef<Path>>(path: P) -> bool {
    PathType::of(path) == PathType::File
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn path_type_nonexistent() {
        let tmp = tempdir().unwrap();
        let p = tmp.path().join("no_such_file_hopefully");
        assert_eq!(PathType::of(&p), PathType::NotFound);
        assert!(!exists(&p));
        assert!(!is_file(&p));
    }

    #[test]
    fn path_type_file_and_dir() {
        let tmp = tempdir().unwrap();
        let file = tmp.path().join("a.txt");
        fs::write(&file, b"hello").unwrap();
        assert_eq!(PathType::of(&file), PathType::File);
        assert!(exists(&file));
        assert!(is_file(&file));

        let dir = tmp.path().join("subdir");
        fs::create_dir(&dir).unwrap();
        assert_eq!(PathType::of(&dir), PathType::Directory);
        assert!(exists(&dir));
        assert!(!is_file(&dir));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_other() {
        let tmp = tempdir().unwrap();
        let link = tmp.path().join("dangling");
        std::os::unix::fs::symlink(tmp.path().join("gone"), &link).unwrap();
        assert_eq!(PathType::of(&link), PathType::Other);
        assert!(exists(&link));
    }
}
