use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings shared by the fetcher, the repository and the batch runner
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FinderConfig {
    /// SQLite database file
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Recipe site root, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Pause after every batch item in milliseconds
    #[serde(default = "default_request_delay_ms")]
    pub request_delay_ms: u64,
    /// Newline-delimited list of food names to ingest
    #[serde(default = "default_menu_path")]
    pub menu_path: PathBuf,
    /// Where names that failed to ingest are written
    #[serde(default = "default_failures_path")]
    pub failures_path: PathBuf,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            base_url: default_base_url(),
            timeout: default_timeout(),
            request_delay_ms: default_request_delay_ms(),
            menu_path: default_menu_path(),
            failures_path: default_failures_path(),
        }
    }
}

// Default value functions
fn default_database_path() -> PathBuf {
    PathBuf::from("recipes.db")
}

fn default_base_url() -> String {
    "https://www.10000recipe.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_request_delay_ms() -> u64 {
    1000
}

fn default_menu_path() -> PathBuf {
    PathBuf::from("menu.txt")
}

fn default_failures_path() -> PathBuf {
    PathBuf::from("failures.txt")
}

impl FinderConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__DATABASE_PATH
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }
}

/// Load configuration from `config.toml` (optional) and the environment
pub fn load_config() -> Result<FinderConfig, ConfigError> {
    build(File::with_name("config").required(false))
}

/// Load configuration from an explicit TOML file, still honouring the environment
pub fn load_config_from(path: &Path) -> Result<FinderConfig, ConfigError> {
    build(File::from(path).required(true))
}

fn build<T>(file: T) -> Result<FinderConfig, ConfigError>
where
    T: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(file)
        // Use double underscore as separator: RECIPE_FINDER__REQUEST_DELAY_MS
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}
