//! `appium-setup`: interactive Appium installer.
//!
//! Exits 0 whether the run completes, is aborted or fails.

use appium_setup::cli::Cli;
use appium_setup::logging::init_logging;
use appium_setup::terminal;
use appium_setup::{SystemRunner, Wizard};
use clap::Parser;
use std::io;

fn main() {
    let cli = Cli::parse();
    if cli.no_color {
        terminal::disable_colors();
    }
    init_logging(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(error) => {
            terminal::print_error(&error.to_string());
            return;
        }
    };

    let stdin = io::stdin();
    let mut wizard = Wizard::new(stdin.lock(), io::stdout(), SystemRunner::new(), cli.options());
    match runtime.block_on(wizard.run()) {
        Ok(outcome) => tracing::info!(?outcome, "run finished"),
        Err(error) => terminal::print_error(&error.to_string()),
    }
}
