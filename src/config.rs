use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "roadtrafficaccidentlocations.json";
pub const DATA_FILE_ENV: &str = "ACCIDENT_DATA_FILE";

/// Resolved once per process from the environment.
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config::from_lookup(|key| env::var(key).ok()));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
}

impl Config {
    /// Build from an environment-like lookup. Blank overrides are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Config {
        let data_path = lookup(DATA_FILE_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Config { data_path }
    }
}
