//! Process-wide log-target state: the file path the file sink appends to.
//!
//! The path lives behind its own mutex, separate from the dispatch lock, so
//! each get/set/delete is individually atomic. Coordinating target *changes*
//! with concurrent logging is still the caller's job; the usual discipline
//! is to set the target during init and delete it during shutdown.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard, PoisonError},
};

static LOG_TARGET: Mutex<Option<PathBuf>> = Mutex::new(None);

fn target_guard() -> MutexGuard<'static, Option<PathBuf>> {
    // A panic while holding the guard only poisons the path snapshot;
    // logging keeps working with whatever value was last stored.
    LOG_TARGET.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns a snapshot of the current log-target path, if one is set.
#[must_use]
pub fn log_target() -> Option<PathBuf> {
    target_guard().clone()
}

/// Replaces the log target wholesale.
///
/// The previous path is cleared first; a `None` or empty `path` leaves the
/// target unset. Idempotent.
pub fn set_log_target(path: Option<&Path>) {
    let mut target = target_guard();
    *target = None;
    if let Some(p) = path
        && !p.as_os_str().is_empty()
    {
        *target = Some(p.to_path_buf());
    }
}

/// Unlinks the file at the current log target, if one is set.
///
/// The stored path is left untouched so logging can recreate the file on
/// the next append. Unlink errors are ignored; with no target set this
/// performs no filesystem operation at all.
pub fn delete_log_target() {
    let target = target_guard();
    if let Some(path) = target.as_deref() {
        let _ = fs::remove_file(path);
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    // One sequential test: the target is process-global state and parallel
    // #[test] threads would observe each other's writes.
    #[test]
    fn target_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diag.log");

        // Empty at start of this test's ownership of the global.
        set_log_target(None);
        assert_eq!(log_target(), None);

        // Delete with no target set: nothing to do, and it must not
        // disturb a target set afterwards.
        delete_log_target();
        set_log_target(Some(&path));
        assert_eq!(log_target().as_deref(), Some(path.as_path()));

        // Set is idempotent.
        set_log_target(Some(&path));
        assert_eq!(log_target().as_deref(), Some(path.as_path()));

        // Delete unlinks the file but keeps the stored path.
        fs::write(&path, b"stale\n").unwrap();
        delete_log_target();
        assert!(!path.exists());
        assert_eq!(log_target().as_deref(), Some(path.as_path()));

        // Empty path clears, same as None.
        set_log_target(Some(Path::new("")));
        assert_eq!(log_target(), None);
    }
}
