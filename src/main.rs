#![forbid(unsafe_code)]

//! fsj — fs_janitor CLI entry point.

use clap::Parser;

mod cli_app;

fn main() {
    let args = cli_app::Cli::parse();
    if let Err(e) = cli_app::run(&args) {
        eprintln!("fsj: {e}");
        std::process::exit(1);
    }
}
