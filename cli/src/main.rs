//! Telemetry launcher binary.
//!
//! Resolves `<project-root>/scripts/telemetry_gcp` relative to this
//! executable's own location, runs it with inherited standard streams, and
//! maps the outcome to an exit code:
//!
//! ```text
//! main() -> start notice -> run() -> child exits 0 -> exit 0
//!                               \-> anything else  -> failure notice + exit 1
//! ```
//!
//! The launcher consumes no arguments and no configuration. The two notices
//! are plain console lines; diagnostics go to `tracing` behind a `warn`
//! default filter so the console contract holds unless `RUST_LOG` opts in.

use std::io;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use telemetry_launcher::{launcher_dir, project_root, run_target, target_script_path};

/// Name the notices report. Deliberately not derived from the script file
/// name: the deployed script is `telemetry_gcp`, but operators know the
/// target as plain "gcp".
const TARGET_NAME: &str = "gcp";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    println!("🚀 Running telemetry script for target: {TARGET_NAME}.");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("🛑 Failed to run telemetry script for target: {TARGET_NAME}");
            eprintln!("{err:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let launcher_dir = launcher_dir()?;
    let root = project_root(&launcher_dir)?;
    let target = target_script_path(&root);
    run_target(&root, &target)?;
    Ok(())
}
