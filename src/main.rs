//! Binary entrypoint for the Giza Guide server.
//! Run with: cargo run --bin giza-guide

use std::process::ExitCode;

use giza_guide::start_giza_guide;

fn main() -> ExitCode {
    start_giza_guide::run()
}
