use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Prefix of the temporary sibling used by [`atomic_write`].
pub const ATOMIC_WRITE_PREFIX: &str = ".tmp_atomic_write.";

/// Ensure parent directory exists for a path.
pub fn ensure_parent_exists(p: &Path) -> io::Result<()> {
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Build a temp-file name next to `target` that is unique per process, per
/// call and per moment in time, so concurrent cases writing into the same
/// directory never collide.
fn temp_sibling(dir: &Path) -> PathBuf {
    static NEXT_WRITE_ID: AtomicU64 = AtomicU64::new(0);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default();
    let seq = NEXT_WRITE_ID.fetch_add(1, Ordering::Relaxed);
    let raw = format!("{:x}{:x}{:x}", std::process::id(), nanos, seq);
    let start = raw.len().saturating_sub(12);
    dir.join(format!("{}{}", ATOMIC_WRITE_PREFIX, &raw[start..]))
}

/// Write `data` to `target` atomically by writing to a temporary file in the
/// same directory and then renaming into place. A reader never observes a
/// partially written file, and the temporary file is removed on failure.
pub fn atomic_write(target: &Path, data: &[u8]) -> io::Result<()> {
    let dir = match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        // no parent: write directly
        _ => return fs::write(target, data),
    };
    fs::create_dir_all(dir)?;
    let tmp = temp_sibling(dir);
    if let Err(e) = fs::write(&tmp, data) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }
    fs::rename(&tmp, target).inspect_err(|_| {
        let _ = fs::remove_file(&tmp);
    })
}
