use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "larder")]
#[command(
    author,
    version,
    about = "A CLI-based, flat-file recipe catalog manager"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the catalog file (overrides .larder.toml)
    #[arg(long, global = true, env = "LARDER_FILE")]
    pub file: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write structured logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a recipe to the catalog
    #[command(visible_alias = "a", visible_alias = "new")]
    Add {
        /// Recipe name
        name: String,

        /// Comma-separated ingredient list (e.g. "flour,sugar,eggs")
        #[arg(short, long, default_value = "")]
        ingredients: String,

        /// Preparation directions, a single line
        #[arg(short = 'd', long, default_value = "")]
        instructions: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all recipes in catalog order
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search recipes by name or ingredient (case-sensitive substring)
    Search {
        /// Keyword to look for
        keyword: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replace a recipe wholesale (first recipe with an exactly matching name)
    Update {
        /// Name of the recipe to replace
        name: String,

        /// New name (defaults to the current name)
        #[arg(long)]
        rename: Option<String>,

        /// New comma-separated ingredient list
        #[arg(short, long, default_value = "")]
        ingredients: String,

        /// New preparation directions, a single line
        #[arg(short = 'd', long, default_value = "")]
        instructions: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete every recipe with an exactly matching name
    #[command(visible_alias = "rm")]
    Delete {
        /// Name of the recipe(s) to delete
        name: String,
    },
}
