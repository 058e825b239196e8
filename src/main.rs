use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use larder::cli::{Cli, Commands};
use larder::config::LarderConfig;
use larder::error::LarderError;
use larder::model::Recipe;
use larder::storage::RecipeStore;
use larder::validation;

fn main() -> Result<()> {
    let cli = Cli::parse();
    larder::logging::init(cli.verbose, cli.log_file.clone());

    let catalog_path = resolve_catalog_path(cli.file)?;

    match cli.command {
        Commands::Add {
            name,
            ingredients,
            instructions,
            json,
        } => {
            let recipe = build_recipe(name, &ingredients, instructions)?;
            let mut store = RecipeStore::load(&catalog_path)?;
            store.add(recipe.clone())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&recipe)?);
            } else {
                println!("{} {}", "Added".green(), recipe.name.cyan());
            }
            Ok(())
        }
        Commands::List { json } => {
            let store = RecipeStore::load(&catalog_path)?;
            let recipes: Vec<&Recipe> = store.list().collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&recipes)?);
            } else {
                print_recipe_list(&recipes);
            }
            Ok(())
        }
        Commands::Search { keyword, json } => {
            let store = RecipeStore::load(&catalog_path)?;
            let results: Vec<&Recipe> = store.search(&keyword).collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                println!("Found {} results for '{}':\n", results.len(), keyword);
                print_recipe_list(&results);
            }
            Ok(())
        }
        Commands::Update {
            name,
            rename,
            ingredients,
            instructions,
            json,
        } => {
            let new_name = rename.unwrap_or_else(|| name.clone());
            let recipe = build_recipe(new_name, &ingredients, instructions)?;
            let mut store = RecipeStore::load(&catalog_path)?;

            match store.update(&name, recipe.clone()) {
                Ok(()) => {
                    if json {
                        println!("{}", serde_json::to_string_pretty(&recipe)?);
                    } else {
                        println!("{} {}", "Updated".green(), recipe.name.cyan());
                    }
                    Ok(())
                }
                Err(LarderError::NotFound(_)) => not_found(&name),
                Err(e) => Err(e.into()),
            }
        }
        Commands::Delete { name } => {
            let mut store = RecipeStore::load(&catalog_path)?;

            match store.delete(&name) {
                Ok(removed) => {
                    println!("{} {} ({})", "Deleted".red(), name.cyan(), removed);
                    Ok(())
                }
                Err(LarderError::NotFound(_)) => not_found(&name),
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Explicit `--file` wins; otherwise the path comes from `.larder.toml`
/// (searched upward from the working directory) or its defaults.
fn resolve_catalog_path(file_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = file_override {
        return Ok(path);
    }
    let cwd = std::env::current_dir()?;
    let (config, root) = LarderConfig::load(&cwd)?;
    Ok(config.catalog_path(&root))
}

/// Split the raw comma-separated ingredient input into tokens and validate
/// every field before it reaches the store. The store never sees freeform
/// input.
fn build_recipe(name: String, raw_ingredients: &str, instructions: String) -> Result<Recipe> {
    let ingredients = split_ingredients(raw_ingredients);

    validation::validate_name(&name)?;
    for ingredient in &ingredients {
        validation::validate_ingredient(ingredient)?;
    }
    validation::validate_instructions(&instructions)?;

    Ok(Recipe::new(name)
        .with_ingredients(ingredients)
        .with_instructions(instructions))
}

/// Tokenize user input on commas. The final empty segment after a trailing
/// comma is discarded, so "a,b" and "a,b," mean the same list, and "" is an
/// empty list.
fn split_ingredients(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = raw.split(',').map(str::to_string).collect();
    if tokens.last().is_some_and(String::is_empty) {
        tokens.pop();
    }
    tokens
}

fn not_found(name: &str) -> Result<()> {
    eprintln!("{} {}", "Recipe not found:".red(), name);
    std::process::exit(1);
}

fn print_recipe_list(recipes: &[&Recipe]) {
    if recipes.is_empty() {
        println!("{}", "No recipes.".dimmed());
        return;
    }

    for recipe in recipes {
        println!("{} {}", "Name:".bold(), recipe.name.cyan());
        println!("{} {}", "Ingredients:".bold(), recipe.ingredients.join(", "));
        println!("{} {}", "Instructions:".bold(), recipe.instructions);
        println!("{}", "-------------------------".dimmed());
    }
}
