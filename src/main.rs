//! portrait - command-line tool for rendering character portraits to PNG

use std::process::ExitCode;

use genportrait::cli;

fn main() -> ExitCode {
    cli::run()
}
