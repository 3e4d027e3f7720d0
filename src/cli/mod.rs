// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sifter command-line interface.
//!
//! Three subcommands over a JSON record document: `query` runs one
//! programmatic query, `interactive` replays input events from stdin line by
//! line, and `inspect` dumps the index the filter would build.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sifter",
    about = "Incremental weighted word filter for structured records",
    version
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the records and the field configuration come from.
#[derive(Args, Clone, Debug)]
pub struct Source {
    /// JSON document holding the records
    #[arg(short, long)]
    pub input: PathBuf,

    /// Filter configuration (container, single, fields). Defaults apply when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query and print the ranked view
    Query {
        #[command(flatten)]
        source: Source,

        /// Query words (none = show everything)
        words: Vec<String>,

        /// Also list records hidden by the query
        #[arg(short, long)]
        all: bool,

        /// Output the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read input lines from stdin; each line completes a word, an empty line clears
    Interactive {
        #[command(flatten)]
        source: Source,

        /// Run this query once before reading input
        #[arg(long)]
        initial: Option<String>,

        /// Also list records hidden by each query
        #[arg(short, long)]
        all: bool,
    },

    /// Print the extracted field texts of every record
    Inspect {
        #[command(flatten)]
        source: Source,
    },
}
