pub mod app;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ui;

// Re-exports for convenience
pub use domain::{layout, toolchain};
pub use error::LaunchError;
