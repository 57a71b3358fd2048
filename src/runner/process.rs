//! Owned handle on a spawned child process.
//!
//! The handle is polled synchronously: [`ProcessHandle::poll`] never blocks,
//! [`ProcessHandle::wait`] blocks until the child exits. A handle dropped
//! while its child is still running kills and reaps the child, so no process
//! outlives the code that started it.

use std::ffi::OsStr;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::errors::{ProbeError, Result};

#[derive(Debug)]
pub struct ProcessHandle {
    program: String,
    child: Child,
    exit: Option<i32>,
}

impl ProcessHandle {
    /// Start `program` in the background. Its stdio is detached.
    pub fn spawn<S: AsRef<OsStr>>(program: &str, args: &[S]) -> Result<Self> {
        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ProbeError::Spawn {
                program: program.to_string(),
                source,
            })?;
        tracing::debug!(program, pid = child.id(), "spawned child process");
        Ok(ProcessHandle {
            program: program.to_string(),
            child,
            exit: None,
        })
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    /// Non-blocking status check: `None` while the child is still running,
    /// otherwise its exit code.
    pub fn poll(&mut self) -> Result<Option<i32>> {
        if let Some(code) = self.exit {
            return Ok(Some(code));
        }
        match self.child.try_wait()? {
            Some(status) => self.record(status).map(Some),
            None => Ok(None),
        }
    }

    pub fn is_running(&mut self) -> Result<bool> {
        Ok(self.poll()?.is_none())
    }

    /// Block until the child exits and return its exit code.
    pub fn wait(&mut self) -> Result<i32> {
        if let Some(code) = self.exit {
            return Ok(code);
        }
        let status = self.child.wait()?;
        self.record(status)
    }

    fn record(&mut self, status: ExitStatus) -> Result<i32> {
        let code = status.code().ok_or_else(|| ProbeError::Signaled {
            program: self.program.clone(),
        })?;
        tracing::debug!(program = %self.program, pid = self.child.id(), code, "child exited");
        self.exit = Some(code);
        Ok(code)
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        if self.exit.is_some() {
            return;
        }
        if let Ok(None) = self.child.try_wait() {
            tracing::warn!(program = %self.program, pid = self.child.id(), "killing child still running at drop");
            let _ = self.child.kill();
        }
        let _ = self.child.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_then_exited() {
        let mut p = ProcessHandle::spawn("sleep", &["1"]).unwrap();
        assert_eq!(p.poll().unwrap(), None);
        assert!(p.is_running().unwrap());
        assert_eq!(p.wait().unwrap(), 0);
        // cached after exit
        assert_eq!(p.poll().unwrap(), Some(0));
        assert_eq!(p.wait().unwrap(), 0);
    }

    #[test]
    fn nonzero_exit_code_is_reported() {
        let mut p = ProcessHandle::spawn("sh", &["-c", "exit 7"]).unwrap();
        assert_eq!(p.wait().unwrap(), 7);
        assert!(!p.is_running().unwrap());
    }

    #[test]
    fn killed_child_is_signaled() {
        let mut p = ProcessHandle::spawn("sh", &["-c", "kill -9 $$"]).unwrap();
        assert!(matches!(p.wait(), Err(ProbeError::Signaled { .. })));
    }

    #[test]
    fn drop_reaps_running_child() {
        let p = ProcessHandle::spawn("sleep", &["30"]).unwrap();
        let pid = p.id();
        drop(p);
        // the pid is gone once the child has been killed and reaped
        let probe = format!("kill -0 {} 2>/dev/null", pid);
        let out = Command::new("sh").args(["-c", &probe]).output().unwrap();
        assert!(!out.status.success());
    }

    #[test]
    fn spawn_missing_program_fails() {
        let err = ProcessHandle::spawn::<&str>("sysprobe-no-such-binary", &[]).unwrap_err();
        assert!(matches!(err, ProbeError::Spawn { .. }));
    }
}
