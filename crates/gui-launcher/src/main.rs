use std::process::ExitCode;

use gui_launcher::ui::status;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    if let Err(error) = gui_launcher::app::run().await {
        status::failure(&error.to_string());

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
