//! Example: simple API development with agent coordination.

use std::process::ExitCode;

use hive_examples::cli::Display;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match hive_examples::create_simple_api().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
