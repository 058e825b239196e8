//! Input validation for recipe data.
//!
//! The line framing has no escaping, so a newline inside a name or the
//! instructions, or a comma inside an ingredient token, would corrupt the
//! catalog on the next save. These checks run at the input boundary, before
//! anything reaches the store; the store itself stays permissive.

use crate::error::{LarderError, Result};

/// Maximum allowed length for a recipe name.
pub const MAX_NAME_LENGTH: usize = 200;

/// Validates a recipe name.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(LarderError::Validation("Name cannot be empty".to_string()));
    }
    if name.len() > MAX_NAME_LENGTH {
        return Err(LarderError::Validation(format!(
            "Name exceeds maximum length of {} characters",
            MAX_NAME_LENGTH
        )));
    }
    if name.contains('\n') || name.contains('\r') {
        return Err(LarderError::Validation(
            "Name cannot contain line breaks".to_string(),
        ));
    }
    Ok(())
}

/// Validates an ingredient token.
pub fn validate_ingredient(ingredient: &str) -> Result<()> {
    if ingredient.contains(',') {
        return Err(LarderError::Validation(format!(
            "Ingredient '{}' cannot contain a comma",
            ingredient
        )));
    }
    if ingredient.contains('\n') || ingredient.contains('\r') {
        return Err(LarderError::Validation(
            "Ingredient cannot contain line breaks".to_string(),
        ));
    }
    Ok(())
}

/// Validates the instructions text.
pub fn validate_instructions(instructions: &str) -> Result<()> {
    if instructions.contains('\n') || instructions.contains('\r') {
        return Err(LarderError::Validation(
            "Instructions must be a single line".to_string(),
        ));
    }
    Ok(())
}
