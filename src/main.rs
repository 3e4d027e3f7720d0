// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sifter::{Engine, FilterConfig, Query, Trigger};

mod cli;
use cli::display::{print_index, print_outcome};
use cli::{Cli, Commands, Source};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose { "info" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Query {
            source,
            words,
            all,
            json,
        } => run_query(&source, words, all, json),
        Commands::Interactive {
            source,
            initial,
            all,
        } => run_interactive(&source, initial, all),
        Commands::Inspect { source } => {
            let engine = load_engine(&source)?;
            print_index(engine.index());
            Ok(())
        }
    }
}

/// Load the config (or defaults) and the record document, and build an engine.
fn load_engine(source: &Source) -> Result<Engine> {
    let config = match &source.config {
        Some(path) => FilterConfig::from_path(path)?,
        None => FilterConfig::default(),
    };

    let raw = fs::read_to_string(&source.input)
        .with_context(|| format!("Failed to read {}", source.input.display()))?;
    let document: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid JSON in {}", source.input.display()))?;

    let engine = Engine::from_document(&document, &config)?;
    info!(
        input = %source.input.display(),
        records = engine.len(),
        "loaded records"
    );
    Ok(engine)
}

fn run_query(source: &Source, words: Vec<String>, all: bool, json: bool) -> Result<()> {
    let mut engine = load_engine(source)?;
    let outcome = engine.query(Query::from_words(words)).clone();

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome, engine.index(), all);
    }
    Ok(())
}

fn run_interactive(source: &Source, initial: Option<String>, all: bool) -> Result<()> {
    let mut engine = load_engine(source)?;

    if let Some(initial) = initial {
        let query = Query::parse(&initial);
        eprintln!("> {}", query.echo());
        let outcome = engine.query(query).clone();
        print_outcome(&outcome, engine.index(), all);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trigger = if line.is_empty() {
            Trigger::Cleared
        } else {
            Trigger::WordCompleted(line)
        };

        if let Some(outcome) = engine.handle(trigger).cloned() {
            print_outcome(&outcome, engine.index(), all);
        }
    }
    Ok(())
}
