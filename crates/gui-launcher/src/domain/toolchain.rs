//! Package tooling selection and command construction.
//!
//! The accelerant (`uv`) versus standard (`python -m venv` + `pip`) choice is
//! made once at startup and threaded explicitly through every step, so each
//! command builder here is a pure function of the tool and the layout.

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use super::layout::{ProjectLayout, SERVER_ADDR, prepend_to_path};

#[cfg(windows)]
const SYSTEM_PYTHON: &str = "python";
#[cfg(not(windows))]
const SYSTEM_PYTHON: &str = "python3";

/// Tooling used for environment creation and dependency installation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PackageTool {
    /// The accelerant: `uv venv` / `uv pip install`.
    Uv,
    /// The standard fallback: `python -m venv` / `python -m pip install`.
    Pip,
}

impl PackageTool {
    /// Builds the command that materializes the virtual environment.
    pub fn venv_create_command(self, layout: &ProjectLayout) -> Command {
        match self {
            Self::Uv => {
                let mut command = Command::new("uv");
                command.arg("venv").arg(layout.venv_dir());

                command
            }
            Self::Pip => {
                let mut command = Command::new(SYSTEM_PYTHON);
                command.args(["-m", "venv"]).arg(layout.venv_dir());

                command
            }
        }
    }

    /// Builds the command that installs one manifest into the environment.
    ///
    /// The uv variant runs from the project root so uv resolves the adjacent
    /// `.venv`; the pip variant targets the environment through its own
    /// interpreter.
    pub fn install_command(self, layout: &ProjectLayout, manifest_path: &Path) -> Command {
        match self {
            Self::Uv => {
                let mut command = Command::new("uv");
                command
                    .args(["pip", "install", "-r"])
                    .arg(manifest_path)
                    .current_dir(layout.root());

                command
            }
            Self::Pip => {
                let mut command = Command::new(layout.venv_python());
                command.args(["-m", "pip", "install", "-r"]).arg(manifest_path);

                command
            }
        }
    }
}

/// Builds the dev-server invocation.
///
/// The child runs the venv interpreter from the GUI directory with the venv
/// bin directory prepended to the `PATH` it inherits. The caller supplies the
/// parent `PATH` value, keeping this construction free of ambient reads.
pub fn server_command(layout: &ProjectLayout, parent_path: Option<&OsStr>) -> Command {
    let mut command = Command::new(layout.venv_python());
    command
        .args(["manage.py", "runserver", SERVER_ADDR])
        .current_dir(layout.gui_dir())
        .env("PATH", prepend_to_path(&layout.venv_bin_dir(), parent_path));

    command
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_uv_venv_create_command() {
        // Arrange
        let layout = ProjectLayout::from_root("/srv/project");

        // Act
        let command = PackageTool::Uv.venv_create_command(&layout);
        let debug_command = format!("{command:?}");

        // Assert
        assert!(debug_command.contains("uv"));
        assert!(debug_command.contains("venv"));
        assert!(debug_command.contains(".venv"));
    }

    #[test]
    fn test_pip_venv_create_command_uses_module_venv() {
        // Arrange
        let layout = ProjectLayout::from_root("/srv/project");

        // Act
        let command = PackageTool::Pip.venv_create_command(&layout);
        let debug_command = format!("{command:?}");

        // Assert
        assert!(debug_command.contains("-m"));
        assert!(debug_command.contains("venv"));
    }

    #[test]
    fn test_uv_install_command_runs_from_project_root() {
        // Arrange
        let layout = ProjectLayout::from_root("/srv/project");
        let manifest = PathBuf::from("/srv/project/requirements.txt");

        // Act
        let command = PackageTool::Uv.install_command(&layout, &manifest);

        // Assert
        let debug_command = format!("{command:?}");
        assert!(debug_command.contains("pip"));
        assert!(debug_command.contains("install"));
        assert!(debug_command.contains("requirements.txt"));
        assert_eq!(command.get_current_dir(), Some(Path::new("/srv/project")));
    }

    #[test]
    fn test_pip_install_command_uses_venv_interpreter() {
        // Arrange
        let layout = ProjectLayout::from_root("/srv/project");
        let manifest = PathBuf::from("/srv/project/GUI/requirements.txt");

        // Act
        let command = PackageTool::Pip.install_command(&layout, &manifest);

        // Assert
        assert_eq!(command.get_program(), layout.venv_python().as_os_str());
        let debug_command = format!("{command:?}");
        assert!(debug_command.contains("-m"));
        assert!(debug_command.contains("pip"));
        assert!(debug_command.contains("GUI"));
    }

    #[test]
    fn test_server_command_runs_in_gui_dir_with_prepended_path() {
        // Arrange
        let layout = ProjectLayout::from_root("/srv/project");
        let parent_path = OsString::from("/usr/bin");

        // Act
        let command = server_command(&layout, Some(parent_path.as_os_str()));

        // Assert
        assert_eq!(command.get_program(), layout.venv_python().as_os_str());
        assert_eq!(command.get_current_dir(), Some(layout.gui_dir().as_path()));
        let debug_command = format!("{command:?}");
        assert!(debug_command.contains("manage.py"));
        assert!(debug_command.contains("runserver"));
        assert!(debug_command.contains(SERVER_ADDR));

        let path_value = command
            .get_envs()
            .find(|(key, _)| *key == OsStr::new("PATH"))
            .and_then(|(_, value)| value)
            .expect("PATH must be set for the child");
        let entries: Vec<PathBuf> = std::env::split_paths(&path_value).collect();
        assert_eq!(entries[0], layout.venv_bin_dir());
        assert!(entries.contains(&PathBuf::from("/usr/bin")));
    }
}
