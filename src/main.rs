use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use heapmatch::commands::{self, SortOptions};

mod cli;
use cli::{display, Cli, Commands};

/// Exit status when `find` reports no match, as grep does.
const EXIT_NO_MATCH: i32 = 1;

fn main() {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run one command and return the process exit status.
fn run(command: Commands) -> Result<i32> {
    match command {
        Commands::Find {
            needle,
            file,
            all,
            json,
        } => {
            let report = commands::run_find(&needle, file.as_deref(), all)?;
            if json {
                print_json(&report)?;
            } else {
                display::print_find(&report);
            }
            if report.matches.is_empty() {
                return Ok(EXIT_NO_MATCH);
            }
        }
        Commands::Table { needle, json } => {
            let report = commands::run_table(&needle)?;
            if json {
                print_json(&report)?;
            } else {
                display::print_table(&report);
            }
        }
        Commands::Sort {
            file,
            max,
            limit,
            capacity,
            json,
        } => {
            let opts = SortOptions {
                descending: max,
                limit,
                capacity,
            };
            let report = commands::run_sort(file.as_deref(), opts)?;
            if json {
                print_json(&report)?;
            } else {
                display::print_sort(&report);
            }
        }
    }
    Ok(0)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
