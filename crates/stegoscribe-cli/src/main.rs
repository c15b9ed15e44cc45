use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stegoscribe_core::Result<T>;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec.options();

    let result = match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Psnr(psnr) => psnr.run(),
        Commands::Capacity(capacity) => capacity.run(options),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", cli::failure_message(&e));
            ExitCode::FAILURE
        }
    }
}
