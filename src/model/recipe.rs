use serde::{Deserialize, Serialize};

/// One catalog entry.
///
/// `name` acts as the lookup key for update and delete. Uniqueness is not
/// enforced: the catalog may hold several recipes with the same name, and
/// update/delete define their own tie-break rules over duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    /// Ordered ingredient tokens. May be empty.
    #[serde(default)]
    pub ingredients: Vec<String>,

    /// Free-form preparation text, a single line in the persisted form.
    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
        }
    }

    pub fn with_ingredients(mut self, ingredients: Vec<String>) -> Self {
        self.ingredients = ingredients;
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }
}
