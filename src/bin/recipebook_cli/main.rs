// ABOUTME: RecipeBook CLI - developer tool over the ingredient matching engine
// ABOUTME: Prices shopping items, buckets recipes, finds duplicates, and extracts fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 RecipeBook Contributors
//!
//! Usage:
//! ```bash
//! # Price a shopping list (name or name:quantity)
//! recipebook-cli price tomatoes "cherry tomatoes:2" xyzzy
//!
//! # Which recipes can I cook with what I have?
//! recipebook-cli match --recipes recipes.json --have eggs flour milk
//!
//! # Would this new recipe duplicate an existing one?
//! recipebook-cli similar --recipes recipes.json --ingredients eggs flour sugar
//!
//! # Show extracted calories and total time per recipe
//! recipebook-cli extract --recipes recipes.json
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use recipebook::intelligence::EngineConfig;
use recipebook::logging::{LogFormat, LoggingConfig};

#[derive(Parser)]
#[command(
    name = "recipebook-cli",
    about = "RecipeBook ingredient matching CLI",
    long_about = "Developer tool for the RecipeBook matching engine: price estimates, recipe recommendations, duplicate detection, and field extraction."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate prices for shopping items
    Price {
        /// Items as `name` or `name:quantity`
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// Bucket recipes into "can cook now" and "close match"
    Match {
        /// JSON file holding an array of recipes
        #[arg(long)]
        recipes: PathBuf,

        /// Ingredients you have
        #[arg(long, num_args = 1.., required = true)]
        have: Vec<String>,
    },

    /// Suggest existing recipes that look like duplicates
    Similar {
        /// JSON file holding an array of recipes
        #[arg(long)]
        recipes: PathBuf,

        /// Ingredients of the new recipe
        #[arg(long, num_args = 1.., required = true)]
        ingredients: Vec<String>,
    },

    /// Show calories and total time extracted from each recipe
    Extract {
        /// JSON file holding an array of recipes
        #[arg(long)]
        recipes: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
        logging.format = LogFormat::Pretty;
    }
    logging.init()?;

    let config = EngineConfig::global();

    match cli.command {
        Command::Price { items } => commands::price(&items, config, cli.json),
        Command::Match { recipes, have } => commands::recommend(&recipes, &have, config, cli.json),
        Command::Similar {
            recipes,
            ingredients,
        } => commands::similar(&recipes, &ingredients, config, cli.json),
        Command::Extract { recipes } => commands::extract(&recipes, cli.json),
    }
}
