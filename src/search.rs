//! Keyword matching over recipes.
//!
//! Matching is deliberately plain: case-sensitive substring containment, no
//! normalization, no fuzzy matching. The name is checked first; the
//! ingredient scan only runs when the name misses, and a recipe matches at
//! most once however many ingredients contain the keyword.

use crate::model::Recipe;

/// True when `keyword` is a substring of the recipe name or of at least one
/// ingredient token. The empty keyword matches every recipe.
pub fn matches(keyword: &str, recipe: &Recipe) -> bool {
    if recipe.name.contains(keyword) {
        return true;
    }
    recipe
        .ingredients
        .iter()
        .any(|ingredient| ingredient.contains(keyword))
}
