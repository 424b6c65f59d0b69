use std::path::PathBuf;

use config::ConfigError;
use serde::Deserialize;

use crate::{core::state::feed::ITEMS_PER_PAGE, presentation::config::keybindings, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

const DEFAULT_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Where and how the feed API is reached
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Appended to every endpoint path (`.json` for Firebase)
    #[serde(default = "default_path_suffix")]
    pub path_suffix: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            path_suffix: default_path_suffix(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_path_suffix() -> String {
    ".json".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct FeedConfig {
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}

fn default_items_per_page() -> usize {
    ITEMS_PER_PAGE
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
}

impl Config {
    /// Load the embedded defaults, then any user config file on top.
    pub fn new() -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let data_dir = utils::get_data_dir();
        let config_dir = utils::get_config_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().to_string())?
            .set_default("_config_dir", config_dir.to_string_lossy().to_string())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        cfg.merge_defaults(default_config).validated()
    }

    /// The configuration shipped with the binary
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Fill in default keybindings the user did not override
    pub fn merge_defaults(mut self, defaults: Config) -> Self {
        for (key, action) in defaults.keybindings.iter() {
            self.keybindings.entry(*key).or_insert(*action);
        }
        self
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.feed.items_per_page == 0 {
            return Err(ConfigError::Message(String::from(
                "feed.items_per_page must be greater than zero",
            )));
        }
        if self.api.base_url.is_empty() {
            return Err(ConfigError::NotFound(String::from("api.base_url")));
        }
        Ok(self)
    }
}
