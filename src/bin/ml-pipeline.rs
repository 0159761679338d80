//! Example: ML pipeline development with a specialized team.

use std::process::ExitCode;

use hive_examples::cli::Display;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match hive_examples::create_ml_pipeline().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Display::new().print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
