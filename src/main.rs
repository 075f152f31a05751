//! Binary entrypoint for the `testenum` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    testenum::telemetry::init();
    match testenum::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
