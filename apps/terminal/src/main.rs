//! # Stockroom Entry Point
//!
//! Setup and the menu loop live in `lib.rs` so they can be tested.

use std::process::ExitCode;

fn main() -> ExitCode {
    match stockroom_terminal::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stockroom: {err}");
            ExitCode::FAILURE
        }
    }
}
