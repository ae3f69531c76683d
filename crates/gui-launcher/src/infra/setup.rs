//! Virtual environment creation and dependency installation.

use std::process::Command;

use crate::domain::layout::{Manifest, ProjectLayout};
use crate::domain::toolchain::PackageTool;
use crate::error::LaunchError;
use crate::ui::status;

/// Ensures the virtual environment directory exists.
///
/// Idempotent: an existing directory short-circuits creation, so repeated
/// runs never recreate the environment.
///
/// # Errors
/// Returns [`LaunchError::EnvCreation`] if the selected tool exits non-zero
/// or cannot be executed.
pub fn ensure_venv(tool: PackageTool, layout: &ProjectLayout) -> Result<(), LaunchError> {
    if layout.venv_dir().exists() {
        status::success("Virtual environment exists");

        return Ok(());
    }

    status::info("Creating virtual environment...");
    run_checked(tool.venv_create_command(layout)).map_err(LaunchError::EnvCreation)?;
    status::success("Virtual environment created");

    Ok(())
}

/// Installs every manifest in order.
///
/// A missing manifest file is a warning and a skip; a failing install aborts
/// the run before any later manifest is attempted.
///
/// # Errors
/// Returns [`LaunchError::Install`] on the first non-zero installer status.
pub fn install_manifests(tool: PackageTool, layout: &ProjectLayout) -> Result<(), LaunchError> {
    install_manifests_with(&layout.manifests(), |manifest| {
        status::info(&format!("Installing requirements from {}...", manifest.label));

        run_checked(tool.install_command(layout, &manifest.path))
    })
}

fn install_manifests_with<F>(manifests: &[Manifest], mut install: F) -> Result<(), LaunchError>
where
    F: FnMut(&Manifest) -> Result<(), String>,
{
    for manifest in manifests {
        if !manifest.path.exists() {
            status::warning(&format!(
                "{} requirements.txt not found, skipping",
                manifest.label
            ));
            continue;
        }

        install(manifest).map_err(|detail| LaunchError::Install {
            label: manifest.label.to_string(),
            detail,
        })?;
        status::success(&format!("{} requirements installed", manifest.label));
    }

    Ok(())
}

/// Runs a tool to completion with inherited stdio, mapping failures to a
/// human-readable detail string.
fn run_checked(mut command: Command) -> Result<(), String> {
    let program = command.get_program().to_string_lossy().to_string();
    let exit_status = command
        .status()
        .map_err(|error| format!("Failed to execute {program}: {error}"))?;

    if !exit_status.success() {
        return Err(format!("{program} exited with {exit_status}"));
    }

    Ok(())
}
