use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;
use crate::fs_op::helpers::{atomic_write, ensure_parent_exists};

/// Create an empty file at `path`, like `touch` on a fresh name. Parent
/// directories are created. Fails if the path already exists.
pub fn create_file<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let p = path.as_ref();
    if p.exists() {
        return Err(FsOpError::AlreadyExists(p.to_path_buf()));
    }
    ensure_parent_exists(p).map_err(|e| FsOpError::at(p, e))?;
    atomic_write(p, &[]).map_err(|e| FsOpError::at(p, e))?;
    tracing::debug!(path = %p.display(), "created empty file");
    Ok(())
}

/// Write literal `contents` to `path`, replacing any previous content.
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> Result<(), FsOpError> {
    let p = path.as_ref();
    atomic_write(p, contents.as_bytes()).map_err(|e| FsOpError::at(p, e))?;
    tracing::debug!(path = %p.display(), bytes = contents.len(), "wrote text file");
    Ok(())
}

/// Read `path` back as UTF-8 text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String, FsOpError> {
    let p = path.as_ref();
    let bytes = fs::read(p).map_err(|e| FsOpError::at(p, e))?;
    String::from_utf8(bytes).map_err(|_| FsOpError::NotText(p.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_op::helpers::ATOMIC_WRITE_PREFIX;
    use tempfile::tempdir;

    #[test]
    fn create_file_and_dir() {
        let td = tempdir().unwrap();
        let dir = td.path().join("a/b");
        let file = dir.join("f.txt");
        // parents are created on demand
        create_file(&file).unwrap();
        assert!(file.exists());
        assert_eq!(fs::metadata(&file).unwrap().len(), 0);
        // Ensure no leftover atomic temp files are present after success.
        let tmp_leftovers = fs::read_dir(&dir)
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.file_name().to_string_lossy().starts_with(ATOMIC_WRITE_PREFIX))
            .count();
        assert_eq!(tmp_leftovers, 0, "found leftover atomic temp files");
    }

    #[test]
    fn create_file_refuses_existing_path() {
        let td = tempdir().unwrap();
        let file = td.path().join("taken.txt");
        fs::write(&file, "keep me").unwrap();
        match create_file(&file) {
            Err(FsOpError::AlreadyExists(p)) => assert_eq!(p, file),
            other => panic!("expected AlreadyExists, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(&file).unwrap(), "keep me");
    }

    #[test]
    fn write_then_read_text() {
        let td = tempdir().unwrap();
        let file = td.path().join("demo.txt");
        write_text(&file, "hello text").unwrap();
        assert_eq!(read_text(&file).unwrap(), "hello text");
    }

    #[test]
    fn read_text_rejects_binary() {
        let td = tempdir().unwrap();
        let file = td.path().join("blob.bin");
        fs::write(&file, [0xff, 0xfe, 0x00]).unwrap();
        assert!(matches!(read_text(&file), Err(FsOpError::NotText(_))));
    }

    #[test]
    fn read_text_missing_file_names_path() {
        let td = tempdir().unwrap();
        let file = td.path().join("nope.txt");
        let err = read_text(&file).unwrap_err();
        assert!(err.to_string().contains("nope.txt"), "{}", err);
    }
}
