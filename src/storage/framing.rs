use crate::model::Recipe;

/// Render the full catalog into its on-disk text form.
///
/// Three newline-terminated lines per recipe: name, comma-joined ingredients
/// (each token followed by a comma, so the line always ends in one when any
/// tokens exist), instructions.
pub fn render_catalog(recipes: &[Recipe]) -> String {
    let mut output = String::new();
    for recipe in recipes {
        output.push_str(&recipe.name);
        output.push('\n');
        for ingredient in &recipe.ingredients {
            output.push_str(ingredient);
            output.push(',');
        }
        output.push('\n');
        output.push_str(&recipe.instructions);
        output.push('\n');
    }
    output
}

/// Parse file content back into recipes.
///
/// Reads lines in groups of three. A name line with no following ingredient
/// or instruction line is a truncated record and is dropped silently; the
/// recipes read before it are kept.
pub fn parse_catalog(content: &str) -> Vec<Recipe> {
    let mut recipes = Vec::new();
    let mut lines = content.lines();

    while let Some(name) = lines.next() {
        let Some(ingredients_line) = lines.next() else {
            tracing::warn!(name, "Dropping truncated record at end of catalog");
            break;
        };
        let Some(instructions) = lines.next() else {
            tracing::warn!(name, "Dropping truncated record at end of catalog");
            break;
        };

        recipes.push(Recipe {
            name: name.to_string(),
            ingredients: split_ingredients(ingredients_line),
            instructions: instructions.to_string(),
        });
    }

    recipes
}

/// Split an ingredient line on commas, discarding the empty final segment
/// produced by the trailing comma. An empty line is an empty list.
fn split_ingredients(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = line.split(',').map(str::to_string).collect();
    if tokens.last().is_some_and(String::is_empty) {
        tokens.pop();
    }
    tokens
}
