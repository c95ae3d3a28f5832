//! CLI entrypoint for the rollbook collector.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use rollbook_core::Collector;

/// Interactive student record collector/reporter.
///
/// Reads a student count and that many {name, class, address} records
/// from stdin, then prints them back as a labeled report. Takes no
/// arguments; the whole exchange happens on stdin/stdout.
#[derive(Debug, Parser)]
#[command(name = "rollbook", version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    match Collector::new(stdin, stdout).run() {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rollbook: {err}");
            ExitCode::FAILURE
        }
    }
}
