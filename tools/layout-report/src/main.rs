//! Prints how much memory storing pairs column by column saves over storing them
//! interleaved, for a couple of element layouts.

mod cli;
mod report;

use std::process::ExitCode;

use clap::Parser;

pub fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let arguments = cli::Arguments::parse();
    log::debug!("{arguments:?}");

    match report::run(arguments.layout, arguments.count) {
        Ok(reports) => {
            for report in reports {
                println!("{report}");
            }
            ExitCode::SUCCESS
        },
        Err(error) => {
            log::error!("Failed to fill containers with {} pairs: {error}", arguments.count);
            ExitCode::FAILURE
        },
    }
}
