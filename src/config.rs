use crate::error::{LarderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = ".larder.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LarderConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Catalog file, relative to the directory holding the config file
    /// (or to the working directory when no config file exists).
    #[serde(default = "default_file")]
    pub file: String,
}

fn default_file() -> String {
    "recipes.txt".to_string()
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

impl LarderConfig {
    /// Load configuration by searching upward from `start_path` for a
    /// `.larder.toml`. A missing config file is not an error: the catalog
    /// is a single-user tool and runs with defaults anywhere.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => {
                let content = std::fs::read_to_string(&config_path)?;
                let config: LarderConfig = toml::from_str(&content)?;
                let root = config_path
                    .parent()
                    .ok_or_else(|| {
                        LarderError::Config("Config file has no parent directory".to_string())
                    })?
                    .to_path_buf();
                Ok((config, root))
            }
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn catalog_path(&self, root: &Path) -> PathBuf {
        root.join(&self.catalog.file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| LarderError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_no_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let (config, root) = LarderConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.catalog.file, "recipes.txt");
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_load_from_config_file() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[catalog]\nfile = \"meals.txt\"\n",
        )
        .unwrap();

        let (config, root) = LarderConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.catalog.file, "meals.txt");
        assert_eq!(config.catalog_path(&root), temp_dir.path().join("meals.txt"));
    }

    #[test]
    fn test_upward_search_finds_parent_config() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE),
            "[catalog]\nfile = \"meals.txt\"\n",
        )
        .unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, root) = LarderConfig::load(&nested).unwrap();
        assert_eq!(config.catalog.file, "meals.txt");
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_save_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);

        let mut config = LarderConfig::default();
        config.catalog.file = "pantry.txt".to_string();
        config.save(&path).unwrap();

        let (loaded, _) = LarderConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.catalog.file, "pantry.txt");
    }
}
