//! # Larder - A CLI-based, flat-file recipe catalog manager
//!
//! Larder keeps a personal recipe catalog in a single plain-text file and
//! provides a CLI for managing it: add, list, search, update, delete.
//!
//! ## File format
//!
//! Every recipe occupies exactly three lines in the catalog file: the name,
//! the comma-joined ingredient list (with a trailing comma), and the
//! instructions. See [`storage`] for the precise framing rules.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add a recipe
//! larder add "Pancakes" -i "flour,sugar,eggs" -n "Mix and cook"
//!
//! # List all recipes
//! larder list
//!
//! # Search by name or ingredient
//! larder search eggs
//!
//! # Replace a recipe
//! larder update Pancakes --name "Crepes" -i "flour,milk,eggs" -n "Mix thin and fry"
//!
//! # Remove a recipe
//! larder delete Crepes
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Recipe)
//! - [`storage`]: Flat-file store and line framing
//! - [`search`]: Keyword matching over recipes
//! - [`validation`]: Input validation utilities

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.larder.toml` configuration files and catalog path resolution.
pub mod config;

/// Error types and result aliases.
///
/// Defines `LarderError` enum and `Result<T>` type alias.
pub mod error;

/// Data models.
///
/// Includes `Recipe`.
pub mod model;

/// Flat-file storage layer.
///
/// Handles reading/writing the catalog as a line-framed text file.
pub mod storage;

/// Input validation utilities.
///
/// Rejects field content that cannot be represented in the line framing.
pub mod validation;

pub mod logging;
pub mod search;
