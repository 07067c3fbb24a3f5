//! Guaranteed self-deletion of the installer.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// RAII guard that deletes the installer executable when dropped.
///
/// Created before any prompt runs, so the deletion happens on normal
/// completion, aborted pipelines, and user cancellation alike. Deletion
/// failures are reported but never propagated; cleanup must not mask the
/// failure that got us here.
pub struct SelfDelete {
    target: Option<PathBuf>,
}

impl SelfDelete {
    /// Arm a guard against the currently running executable.
    pub fn arm() -> Self {
        match std::env::current_exe() {
            Ok(path) => Self { target: Some(path) },
            Err(err) => {
                eprintln!("Warning: cannot locate installer executable, skipping self-deletion: {err}");
                Self { target: None }
            }
        }
    }

    /// A guard that deletes nothing, for `--keep-installer` runs.
    pub fn disarmed() -> Self {
        Self { target: None }
    }

    /// Arm a guard against an explicit path.
    pub fn for_path(path: PathBuf) -> Self {
        Self { target: Some(path) }
    }
}

impl Drop for SelfDelete {
    fn drop(&mut self) {
        let Some(path) = self.target.take() else {
            return;
        };
        if let Err(err) = fs::remove_file(&path) {
            if err.kind() != ErrorKind::NotFound {
                eprintln!("Warning: failed to delete installer '{}': {err}", path.display());
            }
        }
    }
}
