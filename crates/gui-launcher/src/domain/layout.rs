//! Fixed filesystem layout of the project the launcher operates on.

use std::env;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{Path, PathBuf};

/// Address the dev server binds to.
pub const SERVER_ADDR: &str = "127.0.0.1:8462";
/// URL opened in the operator's browser once the server is up.
pub const SERVER_URL: &str = "http://127.0.0.1:8462";

const VENV_DIR_NAME: &str = ".venv";
const GUI_DIR_NAME: &str = "GUI";
const REQUIREMENTS_FILE_NAME: &str = "requirements.txt";

/// One dependency-declaration file to install into the virtual environment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Manifest {
    pub label: &'static str,
    pub path: PathBuf,
}

/// Resolved paths for one launcher run.
///
/// All paths are fixed relative to the project root; nothing here touches the
/// filesystem beyond root discovery.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    /// Resolves the layout from the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    pub fn discover() -> io::Result<Self> {
        Ok(Self::from_root(env::current_dir()?))
    }

    /// Builds a layout rooted at an explicit directory.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the web GUI project, including its `manage.py`.
    pub fn gui_dir(&self) -> PathBuf {
        self.root.join(GUI_DIR_NAME)
    }

    /// Virtual environment directory.
    pub fn venv_dir(&self) -> PathBuf {
        self.root.join(VENV_DIR_NAME)
    }

    /// Directory containing the virtual environment's executables.
    pub fn venv_bin_dir(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_dir().join("Scripts")
        } else {
            self.venv_dir().join("bin")
        }
    }

    /// Interpreter installed inside the virtual environment.
    pub fn venv_python(&self) -> PathBuf {
        if cfg!(windows) {
            self.venv_bin_dir().join("python.exe")
        } else {
            self.venv_bin_dir().join("python")
        }
    }

    /// Dependency manifests in install order: project root first, GUI second.
    pub fn manifests(&self) -> Vec<Manifest> {
        vec![
            Manifest {
                label: "root",
                path: self.root.join(REQUIREMENTS_FILE_NAME),
            },
            Manifest {
                label: "GUI",
                path: self.gui_dir().join(REQUIREMENTS_FILE_NAME),
            },
        ]
    }
}

/// Builds the child's `PATH` value with `bin_dir` prepended to the parent's.
///
/// Returned as a plain value so the server launch step can pass the whole
/// environment explicitly instead of mutating the launcher's own environment.
pub fn prepend_to_path(bin_dir: &Path, existing: Option<&OsStr>) -> OsString {
    let Some(existing) = existing else {
        return bin_dir.as_os_str().to_os_string();
    };

    let entries = std::iter::once(bin_dir.to_path_buf()).chain(env::split_paths(existing));

    env::join_paths(entries).unwrap_or_else(|_| bin_dir.as_os_str().to_os_string())
}
