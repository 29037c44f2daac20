use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fs};

const DEFAULT_DATABASE_URL: &str = "sqlite://database/db.sqlite3";
const DEFAULT_LISTEN_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_MAX_POOL_SIZE: u32 = 5;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_database_url() -> String {
    DEFAULT_DATABASE_URL.to_owned()
}

fn default_listen_address() -> String {
    DEFAULT_LISTEN_ADDRESS.to_owned()
}

fn default_max_pool_size() -> u32 {
    DEFAULT_MAX_POOL_SIZE
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_owned()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: default_database_url(),
            listen_address: default_listen_address(),
            max_pool_size: default_max_pool_size(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(&path)
            .with_context(|| format!("Unable to read config file {:?}", path))?;
        Config::from_toml(&config)
    }

    pub fn from_toml(config: &str) -> Result<Config, anyhow::Error> {
        let config: Config = toml::from_str(config).with_context(|| "Unable to parse config")?;
        Ok(config)
    }

    /// Reads the configuration from environment variables, falling back to the defaults for any
    /// that are unset.
    pub fn from_env() -> Result<Config, anyhow::Error> {
        let mut config = Config::default();
        if let Some(database_url) = read_env("DATABASE_URL") {
            config.database_url = database_url;
        }
        if let Some(listen_address) = read_env("LISTEN_ADDRESS") {
            config.listen_address = listen_address;
        }
        if let Some(max_pool_size) = read_env("MAX_POOL_SIZE") {
            config.max_pool_size = max_pool_size
                .parse()
                .context("Unable to parse MAX_POOL_SIZE value")?;
        }
        if let Some(log_level) = read_env("LOG_LEVEL") {
            config.log_level = log_level;
        }
        Ok(config)
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}
