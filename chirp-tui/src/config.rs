use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_SERVER_URL: &str = "https://chirp-feed.fly.dev";

/// Server configuration stored locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub server_url: String,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            last_updated: chrono::Utc::now(),
        }
    }
}

/// Feed preferences stored locally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPreferences {
    pub username_filter: String,
}

/// Configuration manager for the .chirp directory
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager
    pub fn new() -> Result<Self> {
        Self::with_config_dir(Self::get_config_dir()?)
    }

    /// Create a config manager rooted at an explicit directory
    pub fn with_config_dir(config_dir: PathBuf) -> Result<Self> {
        // Create the directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).context("Failed to create config directory")?;
        }

        Ok(Self { config_dir })
    }

    /// Get the .chirp configuration directory path
    fn get_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home_dir.join(".chirp"))
    }

    /// Get the server config file path
    fn get_server_config_file(&self) -> PathBuf {
        self.config_dir.join("server_config.json")
    }

    /// Get the feed preferences file path
    fn get_preferences_file(&self) -> PathBuf {
        self.config_dir.join("preferences.json")
    }

    /// Save server configuration
    pub fn save_server_config(&self, config: &ServerConfig) -> Result<()> {
        let config_file = self.get_server_config_file();
        let json =
            serde_json::to_string_pretty(config).context("Failed to serialize server config")?;

        fs::write(&config_file, json).context("Failed to write server config file")?;

        Ok(())
    }

    /// Load server configuration
    pub fn load_server_config(&self) -> Result<Option<ServerConfig>> {
        let config_file = self.get_server_config_file();

        if !config_file.exists() {
            return Ok(None);
        }

        let json =
            fs::read_to_string(&config_file).context("Failed to read server config file")?;

        let config: ServerConfig =
            serde_json::from_str(&json).context("Failed to parse server config")?;

        Ok(Some(config))
    }

    /// Save the feed filter preference
    pub fn save_filter(&self, username_filter: &str) -> Result<()> {
        let prefs = FeedPreferences {
            username_filter: username_filter.to_string(),
        };
        let json =
            serde_json::to_string_pretty(&prefs).context("Failed to serialize preferences")?;

        fs::write(self.get_preferences_file(), json)
            .context("Failed to write preferences file")?;

        Ok(())
    }

    /// Load the saved feed filter preference
    pub fn load_filter(&self) -> Result<Option<String>> {
        let prefs_file = self.get_preferences_file();

        if !prefs_file.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&prefs_file).context("Failed to read preferences file")?;

        let prefs: FeedPreferences =
            serde_json::from_str(&json).context("Failed to parse preferences")?;

        Ok(Some(prefs.username_filter))
    }

    /// Determine the server URL to use based on priority:
    /// 1. CLI argument (highest priority)
    /// 2. Environment variable CHIRP_SERVER_URL
    /// 3. Saved configuration file
    /// 4. Built-in default (lowest priority)
    pub fn determine_server_url(&self, cli_override: Option<String>) -> Result<String> {
        // 1. CLI argument has highest priority
        if let Some(url) = cli_override {
            return Ok(url);
        }

        // 2. Environment variable
        if let Ok(url) = std::env::var("CHIRP_SERVER_URL") {
            return Ok(url);
        }

        // 3. Saved configuration file
        if let Some(config) = self.load_server_config()? {
            return Ok(config.server_url);
        }

        // 4. Built-in default
        Ok(DEFAULT_SERVER_URL.to_string())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new().expect("Failed to create config manager")
    }
}
