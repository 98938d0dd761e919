//! Thin entrypoint for the `autopipe` binary.

use std::process;

fn main() {
    process::exit(autopipe_cli::run());
}
