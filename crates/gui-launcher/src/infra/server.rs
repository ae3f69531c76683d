//! Dev server supervision: spawn, browser handoff, interrupt-aware wait.

use std::env;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::domain::layout::{ProjectLayout, SERVER_URL};
use crate::domain::toolchain;
use crate::error::LaunchError;
use crate::ui::status;

/// Grace period before the browser request, giving the server time to bind
/// its socket. Heuristic only: the browser may still win the race.
const BROWSER_DELAY: Duration = Duration::from_secs(2);

/// Spawns the dev server, opens the browser, and blocks until the server
/// exits or the operator interrupts.
///
/// Both the natural-exit and interrupt paths return `Ok`: once the server is
/// running, shutdown is an operator decision, not a launcher failure.
///
/// # Errors
/// Returns [`LaunchError::ServerSpawn`] if the child cannot be started.
pub async fn run(layout: &ProjectLayout) -> Result<(), LaunchError> {
    status::server_banner();

    let parent_path = env::var_os("PATH");
    let command = toolchain::server_command(layout, parent_path.as_deref());
    let mut child = Command::from(command)
        .spawn()
        .map_err(LaunchError::ServerSpawn)?;

    tokio::time::sleep(BROWSER_DELAY).await;
    open_browser();

    wait_for_exit(&mut child).await;

    Ok(())
}

/// Asks the OS to open the server URL in the default browser.
///
/// Best-effort: a session without a usable browser is not a launch failure.
fn open_browser() {
    if let Err(error) = open::that_detached(SERVER_URL) {
        warn!("Failed to open browser at {SERVER_URL}: {error}");
    }
}

/// Blocks on child exit. An operator interrupt sends one graceful
/// termination request and then waits for the child to actually exit.
async fn wait_for_exit(child: &mut Child) {
    tokio::select! {
        exit_status = child.wait() => {
            debug!("server exited: {exit_status:?}");
        }
        signal_result = tokio::signal::ctrl_c() => {
            if let Err(error) = signal_result {
                // Without a working signal handler the only option left is
                // to keep waiting on the child.
                debug!("ctrl-c handler unavailable: {error}");
                let _ = child.wait().await;

                return;
            }

            status::blank();
            status::info("Shutting down server...");
            terminate(child);
            let _ = child.wait().await;
        }
    }
}

/// Sends SIGTERM to the child so it can shut down cleanly.
fn terminate(child: &Child) {
    let Some(pid) = child.id() else {
        return;
    };
    let Ok(pid) = i32::try_from(pid) else {
        return;
    };

    if let Err(error) = nix::sys::signal::kill(
        nix::unistd::Pid::from_raw(pid),
        nix::sys::signal::Signal::SIGTERM,
    ) {
        warn!("Failed to send SIGTERM to server (PID {pid}): {error}");
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::process::ExitStatusExt as _;

    use super::*;

    #[tokio::test]
    async fn test_wait_for_exit_returns_when_child_exits() {
        // Arrange
        let mut child = Command::new("sh")
            .args(["-c", "true"])
            .spawn()
            .expect("failed to spawn child");

        // Act
        wait_for_exit(&mut child).await;

        // Assert
        let exit_status = child.try_wait().expect("try_wait failed");
        assert!(exit_status.is_some());
    }

    #[tokio::test]
    async fn test_terminate_sends_sigterm_to_child() {
        // Arrange
        let mut child = Command::new("sleep")
            .arg("5")
            .spawn()
            .expect("failed to spawn child");

        // Act
        terminate(&child);
        let exit_status = child.wait().await.expect("wait failed");

        // Assert
        assert_eq!(
            exit_status.signal(),
            Some(nix::sys::signal::Signal::SIGTERM as i32)
        );
    }
}
