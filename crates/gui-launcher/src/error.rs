//! Fatal launcher errors.
//!
//! Tool-detection misses and missing manifests are deliberately not errors:
//! the first selects the fallback tooling, the second skips one manifest.

use std::io;

use thiserror::Error;

/// Errors that abort the launch pipeline with a non-zero exit status.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The project root could not be resolved.
    #[error("Failed to resolve project root: {0}")]
    RootDiscovery(io::Error),

    /// The selected tool failed to create the virtual environment.
    #[error("Failed to create virtual environment: {0}")]
    EnvCreation(String),

    /// The installer returned a non-zero status for a present manifest.
    #[error("Failed to install {label} requirements: {detail}")]
    Install { label: String, detail: String },

    /// The dev server child process could not be spawned.
    #[error("Failed to start server: {0}")]
    ServerSpawn(io::Error),
}
