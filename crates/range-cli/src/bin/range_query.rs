//! `range-query`: report the input values that fall inside a range.
//!
//! Usage:
//!   range-query [--input <PATH>] [--quiet] [--tree] [-v...]
//!
//! The input (stdin by default) starts with the lower and upper bound,
//! followed by the values to index. `RUST_LOG` controls logging unless `-v`
//! is given.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use range_cli::{parse_input, render, run, CliError, RenderOptions};

#[derive(Debug, Parser)]
#[command(name = "range-query", version, about = "One-dimensional range query over a balanced BST")]
struct Cli {
    /// Read input from a file instead of stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Print only the values found.
    #[arg(short, long)]
    quiet: bool,
    /// Also print the tree structure.
    #[arg(long)]
    tree: bool,
    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.init();
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = read_input(cli.input.as_ref())
        .and_then(|text| parse_input(&text))
        .and_then(|request| run(&request));

    match result {
        Ok(report) => {
            let opts = RenderOptions {
                quiet: cli.quiet,
                tree: cli.tree,
            };
            if let Err(e) = io::stdout().write_all(render(&report, opts).as_bytes()) {
                eprintln!("{e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
