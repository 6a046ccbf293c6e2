//! Project-relative path resolution.
//!
//! The launcher binary sits one directory below the project root in a
//! deployed tree; the target script lives at `<root>/scripts/telemetry_gcp`.
//! Every path here is derived from the executable's own location — never from
//! arguments, the working directory, or the environment.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::spawn::LaunchError;

/// Directory under the project root that holds runnable scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// File name of the target script.
pub const TARGET_SCRIPT: &str = "telemetry_gcp";

/// Directory containing the running launcher executable.
pub fn launcher_dir() -> Result<PathBuf, LaunchError> {
    let exe = env::current_exe().map_err(LaunchError::LauncherPath)?;
    let dir = exe
        .parent()
        .ok_or_else(|| LaunchError::NoProjectRoot { dir: exe.clone() })?
        .to_path_buf();
    debug!(dir = %dir.display(), "Resolved launcher directory");
    Ok(dir)
}

/// Parent directory of the launcher's own directory.
pub fn project_root(launcher_dir: &Path) -> Result<PathBuf, LaunchError> {
    launcher_dir
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| LaunchError::NoProjectRoot {
            dir: launcher_dir.to_path_buf(),
        })
}

/// Fixed location of the target script below the project root.
#[must_use]
pub fn target_script_path(project_root: &Path) -> PathBuf {
    project_root.join(SCRIPTS_DIR).join(TARGET_SCRIPT)
}
