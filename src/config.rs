use crate::domain::entities::Theme;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Sqlite,
    File,
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sqlite" => Ok(StorageBackend::Sqlite),
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(ConfigError::InvalidBackend(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub storage_backend: StorageBackend,
    pub database_url: String,
    pub data_dir: PathBuf,
    pub storage_namespace: String,
    pub default_theme: Theme,
    pub seed_demo_data: bool,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::Sqlite,
            database_url: "sqlite://ticketdesk.db?mode=rwc".to_string(),
            data_dir: PathBuf::from("./data"),
            storage_namespace: String::new(),
            default_theme: Theme::Light,
            seed_demo_data: true,
            log_filter: "ticketdesk=info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any variable source; unset variables take their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let storage_backend = match lookup("STORAGE_BACKEND") {
            Some(value) => value.parse()?,
            None => defaults.storage_backend,
        };

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);

        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let storage_namespace = lookup("STORAGE_NAMESPACE")
            .map(|ns| ns.trim().to_string())
            .unwrap_or(defaults.storage_namespace);

        let default_theme = match lookup("DEFAULT_THEME") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidTheme(value.clone()))?,
            None => defaults.default_theme,
        };

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(value) => parse_bool(&value).ok_or(ConfigError::InvalidFlag {
                name: "SEED_DEMO_DATA",
                value,
            })?,
            None => defaults.seed_demo_data,
        };

        let log_filter = lookup("LOG_FILTER").unwrap_or(defaults.log_filter);

        Ok(Config {
            storage_backend,
            database_url,
            data_dir,
            storage_namespace,
            default_theme,
            seed_demo_data,
            log_filter,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid storage backend: {0} (expected sqlite, file or memory)")]
    InvalidBackend(String),

    #[error("Invalid theme: {0} (expected light or dark)")]
    InvalidTheme(String),

    #[error("Invalid value for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },
}
