//! Flat-file storage layer for larder.
//!
//! The whole catalog lives in one plain-text file. Every recipe occupies
//! exactly three physical lines:
//!
//! ```text
//! Pancakes
//! flour,sugar,eggs,
//! Mix and cook
//! ```
//!
//! Line 1 is the name, verbatim. Line 2 joins the ingredient tokens, each
//! token followed immediately by a comma — note the trailing comma after the
//! last token, and that an empty ingredient list is an empty line. Line 3 is
//! the instructions, verbatim. No header, no footer, no escaping: names and
//! instructions must not contain newlines, ingredient tokens must not
//! contain commas (enforced upstream by [`crate::validation`]).
//!
//! ## Components
//!
//! - [`RecipeStore`]: the in-memory catalog plus its backing file
//! - [`parse_catalog`]: decode file content into recipes
//! - [`render_catalog`]: encode recipes into file content

mod framing;
mod store;

pub use framing::{parse_catalog, render_catalog};
pub use store::RecipeStore;
