use super::framing::{parse_catalog, render_catalog};
use crate::error::{LarderError, Result};
use crate::model::Recipe;
use crate::search;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// The in-memory recipe catalog and its backing file.
///
/// The store is the only writer of the file: every mutating operation
/// rewrites the whole catalog from the in-memory sequence, so memory and
/// disk agree after each successful call. Insertion order is display order.
pub struct RecipeStore {
    path: PathBuf,
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Open the catalog at `path`, reading any existing content.
    ///
    /// A missing file is an empty catalog, not an error. A record truncated
    /// at the end of the file is dropped silently.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let recipes = match std::fs::read_to_string(&path) {
            Ok(content) => parse_catalog(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(path = %path.display(), count = recipes.len(), "Loaded catalog");

        Ok(Self { path, recipes })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Append a recipe and persist. Duplicate names are permitted.
    pub fn add(&mut self, recipe: Recipe) -> Result<()> {
        tracing::info!(name = %recipe.name, "Adding recipe");
        self.recipes.push(recipe);
        self.persist()
    }

    /// All recipes in insertion order. Read-only; restartable.
    pub fn list(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    /// Recipes matching `keyword` (see [`search::matches`]), in insertion
    /// order, each at most once. An empty keyword matches everything.
    pub fn search<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Recipe> {
        self.recipes
            .iter()
            .filter(move |recipe| search::matches(keyword, recipe))
    }

    /// Replace the FIRST recipe whose name equals `name` exactly, keeping
    /// its position, then persist. Later duplicates are untouched; delete
    /// intentionally differs and removes them all.
    pub fn update(&mut self, name: &str, new_recipe: Recipe) -> Result<()> {
        tracing::info!(name, "Updating recipe");

        match self.recipes.iter_mut().find(|r| r.name == name) {
            Some(slot) => {
                *slot = new_recipe;
                self.persist()
            }
            None => Err(LarderError::NotFound(name.to_string())),
        }
    }

    /// Remove EVERY recipe whose name equals `name` exactly, then persist.
    /// Returns how many were removed; `NotFound` leaves the file untouched.
    pub fn delete(&mut self, name: &str) -> Result<usize> {
        tracing::info!(name, "Deleting recipe");

        let before = self.recipes.len();
        self.recipes.retain(|r| r.name != name);
        let removed = before - self.recipes.len();

        if removed == 0 {
            return Err(LarderError::NotFound(name.to_string()));
        }

        self.persist()?;
        Ok(removed)
    }

    /// Rewrite the backing file from the in-memory sequence.
    ///
    /// Writes atomically: temp file in the target directory, then rename.
    /// Write failures surface as errors rather than silently leaving disk
    /// behind memory.
    fn persist(&self) -> Result<()> {
        let content = render_catalog(&self.recipes);

        // A bare relative filename has an empty parent.
        let target_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut temp_file = NamedTempFile::new_in(target_dir)
            .map_err(|e| LarderError::Storage(format!("Failed to create temp file: {}", e)))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| LarderError::Storage(format!("Failed to write to temp file: {}", e)))?;

        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| LarderError::Storage(format!("Failed to sync temp file: {}", e)))?;

        temp_file
            .persist(&self.path)
            .map_err(|e| LarderError::Storage(format!("Failed to persist temp file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_store() -> (RecipeStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecipeStore::load(temp_dir.path().join("recipes.txt")).unwrap();
        (store, temp_dir)
    }

    fn recipe(name: &str, ingredients: &[&str], instructions: &str) -> Recipe {
        Recipe::new(name)
            .with_ingredients(ingredients.iter().map(|s| s.to_string()).collect())
            .with_instructions(instructions)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (store, _temp_dir) = setup_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_then_list() {
        let (mut store, _temp_dir) = setup_store();
        let pancakes = recipe("Pancakes", &["flour", "sugar", "eggs"], "Mix and cook");

        store.add(pancakes.clone()).unwrap();

        let listed: Vec<_> = store.list().collect();
        assert_eq!(listed, vec![&pancakes]);
    }

    #[test]
    fn test_list_is_restartable() {
        let (mut store, _temp_dir) = setup_store();
        store.add(recipe("A", &[], "")).unwrap();
        store.add(recipe("B", &[], "")).unwrap();

        let first: Vec<_> = store.list().cloned().collect();
        let second: Vec<_> = store.list().cloned().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutations_survive_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recipes.txt");

        let mut store = RecipeStore::load(&path).unwrap();
        store
            .add(recipe("Pancakes", &["flour", "eggs"], "Mix and cook"))
            .unwrap();
        store.add(recipe("Toast", &[], "Toast the bread")).unwrap();

        let reloaded = RecipeStore::load(&path).unwrap();
        assert_eq!(
            reloaded.list().collect::<Vec<_>>(),
            store.list().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_persisted_bytes_match_framing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recipes.txt");

        let mut store = RecipeStore::load(&path).unwrap();
        store.add(recipe("R", &["x", "y"], "Do it")).unwrap();

        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, "R\nx,y,\nDo it\n");
    }

    #[test]
    fn test_search_matches_name_and_ingredients() {
        let (mut store, _temp_dir) = setup_store();
        store
            .add(recipe("Pancakes", &["flour", "sugar", "eggs"], "Mix and cook"))
            .unwrap();
        store
            .add(recipe("Omelet", &["eggs", "cheese"], "Whisk and fry"))
            .unwrap();

        let hits: Vec<_> = store.search("eggs").map(|r| r.name.as_str()).collect();
        assert_eq!(hits, vec!["Pancakes", "Omelet"]);

        let hits: Vec<_> = store.search("Pan").map(|r| r.name.as_str()).collect();
        assert_eq!(hits, vec!["Pancakes"]);

        assert_eq!(store.search("tofu").count(), 0);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let (mut store, _temp_dir) = setup_store();
        store.add(recipe("Pancakes", &["flour"], "")).unwrap();

        assert_eq!(store.search("pancakes").count(), 0);
        assert_eq!(store.search("Pancakes").count(), 1);
    }

    #[test]
    fn test_search_empty_keyword_matches_all() {
        let (mut store, _temp_dir) = setup_store();
        store.add(recipe("A", &[], "")).unwrap();
        store.add(recipe("B", &["b"], "")).unwrap();

        assert_eq!(store.search("").count(), 2);
    }

    #[test]
    fn test_update_replaces_first_match_only() {
        let (mut store, _temp_dir) = setup_store();
        store.add(recipe("A", &["one"], "first")).unwrap();
        store.add(recipe("B", &[], "")).unwrap();
        store.add(recipe("A", &["two"], "second")).unwrap();

        store
            .update("A", recipe("X", &["new"], "replaced"))
            .unwrap();

        let names: Vec<_> = store.list().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["X", "B", "A"]);

        // The later duplicate is untouched.
        let last = store.list().last().unwrap();
        assert_eq!(last.ingredients, vec!["two"]);
    }

    #[test]
    fn test_update_missing_name_is_not_found() {
        let (mut store, _temp_dir) = setup_store();
        store.add(recipe("A", &[], "")).unwrap();

        let result = store.update("Z", recipe("X", &[], ""));
        assert!(matches!(result, Err(LarderError::NotFound(_))));

        // No mutation happened.
        assert_eq!(store.list().next().unwrap().name, "A");
    }

    #[test]
    fn test_update_requires_exact_name() {
        let (mut store, _temp_dir) = setup_store();
        store.add(recipe("Pancakes", &[], "")).unwrap();

        // Substring or case variants do not match.
        assert!(store.update("Pan", recipe("X", &[], "")).is_err());
        assert!(store.update("pancakes", recipe("X", &[], "")).is_err());
    }

    #[test]
    fn test_delete_removes_all_matches() {
        let (mut store, _temp_dir) = setup_store();
        store.add(recipe("A", &[], "")).unwrap();
        store.add(recipe("B", &[], "")).unwrap();
        store.add(recipe("A", &[], "")).unwrap();

        let removed = store.delete("A").unwrap();
        assert_eq!(removed, 2);

        let names: Vec<_> = store.list().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_delete_missing_name_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recipes.txt");

        let mut store = RecipeStore::load(&path).unwrap();
        store.add(recipe("A", &["x"], "do")).unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let result = store.delete("Z");
        assert!(matches!(result, Err(LarderError::NotFound(_))));

        let after = std::fs::read_to_string(&path).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_then_delete_asymmetry() {
        let (mut store, _temp_dir) = setup_store();
        store.add(recipe("A", &[], "first")).unwrap();
        store.add(recipe("B", &[], "")).unwrap();
        store.add(recipe("A", &[], "second")).unwrap();

        // update patches the first A only...
        store.update("A", recipe("X", &[], "")).unwrap();
        let names: Vec<_> = store.list().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["X", "B", "A"]);

        // ...delete then removes every remaining A.
        store.delete("A").unwrap();
        let names: Vec<_> = store.list().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["X", "B"]);
    }

    #[test]
    fn test_reload_drops_truncated_tail() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("recipes.txt");

        std::fs::write(&path, "Pancakes\nflour,\nMix\nOmelet\neggs,\n").unwrap();

        let store = RecipeStore::load(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.list().next().unwrap().name, "Pancakes");
    }
}
