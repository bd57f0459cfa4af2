use urlclean_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    match logging::init_logging() {
        Ok(path) => tracing::debug!("logging to {}", path.display()),
        Err(err) => {
            logging::init_logging_stderr();
            tracing::warn!("file logging unavailable: {:#}", err);
        }
    }

    // Parse CLI and dispatch.
    match CliCommand::run_from_args() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("urlclean error: {:#}", err);
            std::process::exit(1);
        }
    }
}
