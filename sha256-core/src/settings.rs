use config::{Config, ConfigError, Environment, File};
use lazy_static::lazy_static;
use log::warn;
use serde::{Deserialize, Serialize};

lazy_static! {
    pub static ref SETTINGS: Settings = Settings::new().unwrap_or_else(|err| {
        warn!("invalid configuration, using defaults: {}", err);
        Settings::default()
    });
}

const SETTINGS_PATH: &str = "./sha256.config.toml";
const PREFIX: &str = "SHA256";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Batches with at least this many messages are hashed on the rayon thread pool.
    pub parallel_batch_threshold: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            parallel_batch_threshold: 16,
        }
    }
}

impl Settings {
    fn new() -> Result<Settings, ConfigError> {
        Config::builder()
            .add_source(File::with_name(SETTINGS_PATH).required(false))
            .add_source(Environment::with_prefix(PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()
    }
}
