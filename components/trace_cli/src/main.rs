//! Corten Stack Trace CLI
//!
//! Entry point for `corten-trace`. Parses CLI arguments and delegates to
//! the Runner for formatting.

use clap::Parser as ClapParser;
use trace_cli::{Cli, CliError, Runner};

fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Off)
        .filter_module("stack_trace", level)
        .filter_module("trace_cli", level)
        .parse_default_env()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runner = Runner::new()
        .with_json(cli.json)
        .with_source_map(cli.source_map.clone());

    let result = if let Some(file) = &cli.file {
        runner.execute_file(file)
    } else if let Some(snapshot) = &cli.eval {
        runner.execute_string(snapshot)
    } else {
        // Default: show usage
        println!("Corten Stack Trace Formatter v0.1.0");
        println!();
        println!("Usage:");
        println!("  corten-trace --file <SNAPSHOT>       Format an error snapshot file");
        println!("  corten-trace --eval <JSON>           Format an inline error snapshot");
        println!("  corten-trace ... --source-map <MAP>  Remap positions with a mapping table");
        println!();
        println!("Run 'corten-trace --help' for more options.");
        return;
    };

    match result {
        Ok(output) => println!("{output}"),
        Err(CliError::Io(e)) => {
            eprintln!("Error: Could not read input: {e}");
            std::process::exit(1);
        }
        Err(CliError::Trace(e)) => {
            eprintln!("Stack Trace Error: {e}");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
