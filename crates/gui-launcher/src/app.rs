//! The setup-and-run pipeline.
//!
//! A fixed, linear sequence: detect tooling, ensure the virtual environment,
//! install manifests, launch the dev server, open the browser, wait. Each
//! fatal step propagates its error; the caller maps it to exit status 1.

use crate::domain::layout::ProjectLayout;
use crate::domain::toolchain::PackageTool;
use crate::error::LaunchError;
use crate::infra::{detect, server, setup};
use crate::ui::status;

/// Runs the whole launch pipeline to completion.
///
/// # Errors
/// Returns the first fatal error: root discovery, environment creation,
/// dependency installation, or server spawn.
pub async fn run() -> Result<(), LaunchError> {
    status::header();

    let layout = ProjectLayout::discover().map_err(LaunchError::RootDiscovery)?;

    let tool = detect::detect_package_tool();
    match tool {
        PackageTool::Uv => {
            status::success("uv found - using for fast package management");
        }
        PackageTool::Pip => {
            status::warning("uv not found - using standard pip/venv");
            status::hint("(Install uv: https://github.com/astral-sh/uv)");
        }
    }
    status::blank();

    setup::ensure_venv(tool, &layout)?;
    setup::install_manifests(tool, &layout)?;

    server::run(&layout).await
}
