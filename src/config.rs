use crate::catalog::SampleDb;
use crate::core::{Result, SqlWalkError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration structure parsed from a TOML file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub databases: DatabasesConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            databases: DatabasesConfig::default(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Path to the file backing the given sample database.
    pub fn database_path(&self, db: SampleDb) -> &Path {
        match db {
            SampleDb::Animals => &self.databases.animals,
            SampleDb::Sales => &self.databases.sales,
        }
    }
}

/// Where the two sample database files live.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabasesConfig {
    #[serde(default = "default_animals_path")]
    pub animals: PathBuf,
    #[serde(default = "default_sales_path")]
    pub sales: PathBuf,
}

impl Default for DatabasesConfig {
    fn default() -> Self {
        DatabasesConfig {
            animals: default_animals_path(),
            sales: default_sales_path(),
        }
    }
}

/// Result rendering options.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Rows shown per example before the output is truncated for reading
    #[serde(default = "default_max_rows")]
    pub max_rows: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            max_rows: default_max_rows(),
        }
    }
}

fn default_animals_path() -> PathBuf {
    PathBuf::from(SampleDb::Animals.file_name())
}

fn default_sales_path() -> PathBuf {
    PathBuf::from(SampleDb::Sales.file_name())
}

fn default_max_rows() -> usize {
    20
}

/// Loads configuration from a TOML file at the given path.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| SqlWalkError::Config(e.to_string()))
}

/// Resolves the configuration for a run: `sqlwalk.toml` in the working
/// directory wins, then the platform config directory, then the defaults.
pub fn load_default() -> Result<Config> {
    let local = PathBuf::from("sqlwalk.toml");
    if local.exists() {
        return load_config(local);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let candidate = config_dir.join("sqlwalk").join("sqlwalk.toml");
        if candidate.exists() {
            return load_config(candidate);
        }
    }
    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CONFIG: &str = r#"
[databases]
animals = "data/animals.sqlite"
sales = "data/sales.sqlite"

[render]
max_rows = 5
"#;

    #[test]
    fn test_parse_full_config() {
        let config: Config = toml::from_str(SAMPLE_CONFIG).expect("Failed to parse sample config");
        assert_eq!(
            config.database_path(SampleDb::Animals),
            Path::new("data/animals.sqlite")
        );
        assert_eq!(
            config.database_path(SampleDb::Sales),
            Path::new("data/sales.sqlite")
        );
        assert_eq!(config.render.max_rows, 5);
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: Config = toml::from_str("").expect("Empty config should parse");
        assert_eq!(
            config.database_path(SampleDb::Animals),
            Path::new("animals.sqlite")
        );
        assert_eq!(config.render.max_rows, 20);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config("/nonexistent/sqlwalk.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "databases = 'not a table'").unwrap();
        match load_config(&path) {
            Err(SqlWalkError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
