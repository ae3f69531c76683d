//! Accelerant tool probing.

use std::process::Command;

use tracing::debug;

use crate::domain::toolchain::PackageTool;

/// Probes for the accelerant tool and selects the tooling for this run.
///
/// Never fatal: any probe failure, including the binary being absent, selects
/// the standard pip/venv fallback.
pub fn detect_package_tool() -> PackageTool {
    detect_with("uv")
}

fn detect_with(program: &str) -> PackageTool {
    match Command::new(program).arg("--version").output() {
        Ok(output) if output.status.success() => PackageTool::Uv,
        Ok(output) => {
            debug!("{program} --version exited with {}", output.status);

            PackageTool::Pip
        }
        Err(error) => {
            debug!("{program} probe failed: {error}");

            PackageTool::Pip
        }
    }
}
