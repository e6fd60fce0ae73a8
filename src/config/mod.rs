use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_key;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Key sent in the `x-rapidapi-key` header of every fixture request.
    pub api_key: String,
    /// Base URL of the football data service. Should include https:// prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Value sent in the `x-rapidapi-host` header.
    #[serde(default = "default_api_host")]
    pub api_host: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Hosted database project URL. Mirroring is disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    /// Anonymous key for the hosted database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database_key: Option<String>,
    /// League ids listed first in the fixture list, in display order.
    #[serde(default = "default_priority_league_ids")]
    pub priority_league_ids: Vec<u32>,
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_api_host() -> String {
    constants::DEFAULT_API_HOST.to_string()
}

fn default_priority_league_ids() -> Vec<u32> {
    constants::DEFAULT_PRIORITY_LEAGUE_IDS.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            api_base_url: default_api_base_url(),
            api_host: default_api_host(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            database_url: None,
            database_key: None,
            priority_league_ids: default_priority_league_ids(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for the API key and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `KOORA_API_KEY` - Override API key
    /// - `KOORA_API_BASE_URL` - Override API base URL
    /// - `KOORA_LOG_FILE` - Override log file path
    /// - `KOORA_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `KOORA_DATABASE_URL` / `KOORA_DATABASE_KEY` - Hosted database mirror
    ///
    /// # Notes
    /// - Config file is stored in platform-specific config directory
    /// - Handles first-time setup with user prompts
    /// - Environment variables take precedence over config file
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            Config {
                api_key,
                ..Config::default()
            }
        } else {
            let api_key = prompt_for_api_key().await?;

            let config = Config {
                api_key,
                ..Config::default()
            };

            config.save().await?;
            config
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads the config file if one exists, applying environment overrides.
    ///
    /// Never prompts and never validates, so it is safe to call before
    /// logging is set up.
    pub async fn load_existing() -> Result<Option<Self>, AppError> {
        let config_path = get_config_path();
        if !Path::new(&config_path).exists() {
            return Ok(None);
        }
        let mut config = Self::load_from_path(&config_path).await?;
        config.apply_env_overrides();
        Ok(Some(config))
    }

    /// Existing config or defaults, with environment overrides; never prompts.
    ///
    /// For commands that only need the database settings.
    pub async fn load_without_prompt() -> Result<Self, AppError> {
        if let Some(config) = Self::load_existing().await? {
            return Ok(config);
        }
        let mut config = Self::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Overrides loaded values with any `KOORA_*` environment variables that are set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = base_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(database_url) = std::env::var(env_vars::DATABASE_URL) {
            self.database_url = Some(database_url);
        }

        if let Ok(database_key) = std::env::var(env_vars::DATABASE_KEY) {
            self.database_key = Some(database_key);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Returns true when both hosted database settings are present.
    pub fn has_database(&self) -> bool {
        matches!(
            (&self.database_url, &self.database_key),
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty()
        )
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// Keys are masked so the output can be pasted into bug reports.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("API Key:");
            println!("{}", mask_secret(&config.api_key));
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Priority Leagues:");
            println!("{:?}", config.priority_league_ids);
            println!("────────────────────────────────────");
            println!("Match Mirror:");
            match (&config.database_url, &config.database_key) {
                (Some(url), Some(key)) => println!("{url} (key {})", mask_secret(key)),
                _ => println!("(disabled)"),
            }
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/{}", constants::LOG_FILE_NAME);
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the API
    /// base URL has the https:// prefix.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: normalize_base_url(&self.api_base_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (no env overrides, no prompt).
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Forces an https:// scheme on a stored base URL.
fn normalize_base_url(base_url: &str) -> String {
    if base_url.starts_with("https://") {
        base_url.to_string()
    } else {
        format!("https://{}", base_url.trim_start_matches("http://"))
    }
}

/// Keeps the last four characters of a secret.
fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("{}{tail}", "*".repeat(count - 4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn test_config() -> Config {
        Config {
            api_key: "872ecb80abcd".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
api_key = "secret-key"
api_base_url = "https://api.example.com"
log_file_path = "/custom/log/path"
priority_league_ids = [39, 140]
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.api_key, "secret-key");
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.api_host, constants::DEFAULT_API_HOST);
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.priority_league_ids, vec![39, 140]);
        assert!(!config.has_database());
    }

    #[tokio::test]
    async fn test_config_defaults_for_missing_optional_fields() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "api_key = \"k\"\n").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config.api_base_url, constants::DEFAULT_API_BASE_URL);
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
        assert_eq!(
            config.priority_league_ids,
            constants::DEFAULT_PRIORITY_LEAGUE_IDS.to_vec()
        );
        assert_eq!(config.database_url, None);
    }

    #[tokio::test]
    async fn test_config_missing_required_field() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("incomplete_config.toml");

        let incomplete_content = r#"
# Missing api_key
log_file_path = "/some/path"
"#;
        tokio::fs::write(&config_path, incomplete_content)
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result.unwrap_err(), AppError::TomlDeserialize(_)));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            log_file_path: Some("/custom/log/path".to_string()),
            database_url: Some("https://project.supabase.co".to_string()),
            database_key: Some("anon-key".to_string()),
            ..test_config()
        };

        original_config.save_to_path(&config_path_str).await.unwrap();
        let loaded = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(loaded, original_config);
        assert!(loaded.has_database());
    }

    #[tokio::test]
    async fn test_config_save_forces_https() {
        for (input, expected) in [
            ("api.example.com", "https://api.example.com"),
            ("http://api.example.com", "https://api.example.com"),
            ("https://api.example.com", "https://api.example.com"),
        ] {
            let temp_dir = tempdir().unwrap();
            let config_path = temp_dir.path().join("config.toml");
            let config_path_str = config_path.to_string_lossy();
            let config = Config {
                api_base_url: input.to_string(),
                ..test_config()
            };

            config.save_to_path(&config_path_str).await.unwrap();
            let loaded = Config::load_from_path(&config_path_str).await.unwrap();
            assert_eq!(loaded.api_base_url, expected, "input: {input}");
        }
    }

    #[test]
    fn test_optional_fields_are_not_serialized_when_none() {
        let toml_string = toml::to_string_pretty(&test_config()).unwrap();
        assert!(!toml_string.contains("log_file_path"));
        assert!(!toml_string.contains("database_url"));
        assert!(toml_string.contains("api_key"));
    }

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcdefgh"), "****efgh");
        assert_eq!(mask_secret("abc"), "***");
        assert_eq!(mask_secret(""), "");
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        unsafe {
            std::env::set_var(env_vars::API_KEY, "env-key");
            std::env::set_var(env_vars::HTTP_TIMEOUT, "5");
            std::env::set_var(env_vars::DATABASE_URL, "https://env.supabase.co");
            std::env::set_var(env_vars::DATABASE_KEY, "env-anon");
        }

        let mut config = test_config();
        config.apply_env_overrides();

        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.http_timeout_seconds, 5);
        assert!(config.has_database());

        unsafe {
            std::env::remove_var(env_vars::API_KEY);
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
            std::env::remove_var(env_vars::DATABASE_URL);
            std::env::remove_var(env_vars::DATABASE_KEY);
        }
    }

    #[test]
    #[serial]
    fn test_invalid_timeout_env_is_ignored() {
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
        }

        let mut config = test_config();
        config.apply_env_overrides();
        assert_eq!(
            config.http_timeout_seconds,
            constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );

        unsafe {
            std::env::remove_var(env_vars::HTTP_TIMEOUT);
        }
    }

    #[tokio::test]
    #[serial]
    async fn test_load_without_prompt_uses_database_env() {
        unsafe {
            std::env::set_var(env_vars::DATABASE_URL, "https://mirror.supabase.co");
            std::env::set_var(env_vars::DATABASE_KEY, "mirror-key");
        }

        let config = Config::load_without_prompt().await.unwrap();
        assert!(config.has_database());
        assert_eq!(config.database_key.as_deref(), Some("mirror-key"));

        unsafe {
            std::env::remove_var(env_vars::DATABASE_URL);
            std::env::remove_var(env_vars::DATABASE_KEY);
        }
    }
}
