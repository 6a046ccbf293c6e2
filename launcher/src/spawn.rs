//! Synchronous child-process execution.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

/// Unified failure taxonomy for a launch attempt.
///
/// Path resolution, spawn errors, and non-zero child exits all land here.
/// Callers handle every variant identically (one failure notice, exit 1);
/// the variants only shape the detail line.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("failed to locate the launcher executable")]
    LauncherPath(#[source] io::Error),

    #[error("no parent directory above {}", .dir.display())]
    NoProjectRoot { dir: PathBuf },

    #[error("failed to spawn {}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} exited with {}", .path.display(), .status)]
    TargetFailed { path: PathBuf, status: ExitStatus },
}

/// Run `target` to completion with inherited standard streams.
///
/// The child runs from `project_root` and owns the terminal for its
/// lifetime; nothing is captured, buffered, or reframed. Blocks until the
/// child exits — there is no timeout and no cancellation. A child killed by
/// a signal has no exit code and is reported through [`LaunchError::TargetFailed`]
/// with the raw status.
pub fn run_target(project_root: &Path, target: &Path) -> Result<(), LaunchError> {
    debug!(
        script = %target.display(),
        cwd = %project_root.display(),
        "Spawning target script"
    );

    let status = Command::new(target)
        .current_dir(project_root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| LaunchError::Spawn {
            path: target.to_path_buf(),
            source,
        })?;

    debug!(%status, "Target script exited");

    if status.success() {
        Ok(())
    } else {
        Err(LaunchError::TargetFailed {
            path: target.to_path_buf(),
            status,
        })
    }
}
