use std::process::ExitCode;

use traceup_core::logging;

mod cli;

fn main() -> ExitCode {
    // Initialize logging as early as possible; an unwritable state dir must not stop an upload.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::warn!("file logging unavailable, using stderr: {:#}", err);
    }

    match cli::run_from_args() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("traceup error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
