//! Planimeter terminal gallery.

use std::process::ExitCode;

mod app;
mod mount;
mod source;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting Planimeter");

    let manifest = std::env::args().nth(1);
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            log::error!("failed to start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };
    let local = tokio::task::LocalSet::new();
    match local.block_on(&runtime, app::run(manifest.as_deref())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
