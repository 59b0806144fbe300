use screensage::commands::Cli;
use screensage::libs::logging;
use screensage::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
