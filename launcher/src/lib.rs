//! Launch support for the `telemetry` binary.
//!
//! Two concerns, one module each:
//!
//! - **`paths`**: locate the project root relative to the running executable
//!   and derive the target script path under it
//! - **`spawn`**: run the target synchronously with inherited standard
//!   streams and fold every failure mode into [`LaunchError`]
//!
//! The binary crate composes these; nothing here reads arguments, the
//! environment, or configuration.

pub mod paths;
pub mod spawn;

pub use paths::{launcher_dir, project_root, target_script_path};
pub use spawn::{LaunchError, run_target};
