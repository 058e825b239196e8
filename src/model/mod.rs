//! Data models for larder.
//!
//! This module defines the core data structure:
//!
//! - [`Recipe`]: one catalog entry (name, ingredient list, instructions)

mod recipe;

pub use recipe::Recipe;
