//! Thin binary entry point — parses CLI args and delegates to
//! `wareki::cli::run()`.

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

fn main() -> ExitCode {
    let cli = match wareki::cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        // argument errors print the usage text and exit 1
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match wareki::cli::run(&cli) {
        Ok(converted) => {
            println!("{converted}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
