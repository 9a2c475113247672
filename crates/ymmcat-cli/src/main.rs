use std::process::ExitCode;

use ymmcat_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() -> ExitCode {
    let target = logging::init_default();
    tracing::debug!(?target, "ymmcat {} starting", env!("CARGO_PKG_VERSION"));

    match CliCommand::run_from_args().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("ymmcat error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
