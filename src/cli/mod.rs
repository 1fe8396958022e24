// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the heapmatch command-line interface.
//!
//! Three subcommands: `find` runs a KMP search over a file or stdin, `table`
//! shows the backtrack table for a needle, and `sort` pushes integers through
//! the binary heap and prints them in extraction order.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "heapmatch",
    about = "Binary heap and Knuth-Morris-Pratt search from the command line",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find a byte string in a file (or stdin)
    Find {
        /// Text to search for
        needle: String,

        /// File to search; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Report every match, overlapping ones included
        #[arg(short, long)]
        all: bool,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the KMP backtrack table for a needle
    Table {
        /// Needle to build the table for
        needle: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Sort whitespace-separated integers through the binary heap
    Sort {
        /// Input file; reads stdin when omitted or `-`
        file: Option<PathBuf>,

        /// Largest first (max-heap)
        #[arg(long)]
        max: bool,

        /// Only print the first N values
        #[arg(short, long)]
        limit: Option<usize>,

        /// Initial heap capacity (0 = library default)
        #[arg(long, default_value = "0")]
        capacity: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
