use crate::constants::env_vars;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration for the command line tool.
///
/// The API hosts are compile-time constants and never read from here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads the runtime configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    ///
    /// # Environment Variables
    /// - `BANGUMI_LOG_FILE` - Override log file path
    /// - `BANGUMI_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    pub async fn load() -> Result<Self, AppError> {
        Self::load_at(&get_config_path(), |key| std::env::var(key).ok()).await
    }

    /// Loads the stored config at `path`, then applies overrides from `lookup`
    /// and validates the result. Overrides only live in the returned value.
    pub async fn load_at<F>(path: &str, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::load_stored_at(path).await?;
        config.apply_env_overrides(lookup);
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file exactly as stored, without env overrides.
    /// A missing file yields defaults; every other failure is returned.
    pub async fn load_stored_at(path: &str) -> Result<Self, AppError> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Applies `change` to the stored config at the default location and saves it.
    pub async fn update<F>(change: F) -> Result<Self, AppError>
    where
        F: FnOnce(&mut Config),
    {
        Self::update_at(&get_config_path(), change).await
    }

    /// Read-modify-write of the stored config at `path`.
    ///
    /// Env overrides are never read here, so they cannot leak into the file.
    /// The file is left untouched when it cannot be parsed or the result is invalid.
    pub async fn update_at<F>(path: &str, change: F) -> Result<Self, AppError>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = Self::load_stored_at(path).await?;
        change(&mut config);
        config.validate()?;
        config.save_to_path(path).await?;
        Ok(config)
    }

    /// Applies overrides from a variable lookup. Unparseable timeouts are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(log_file_path) = lookup(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = lookup(env_vars::HTTP_TIMEOUT).and_then(|s| s.parse::<u64>().ok()) {
            self.http_timeout_seconds = timeout;
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self.http_timeout_seconds, &self.log_file_path)
    }

    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays the stored configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load_stored_at(&config_path).await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !Path::new(&config_path).exists() {
            println!("(Not created yet, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Hosts:");
        println!("{}", crate::constants::API_BASE_URL);
        println!("{}", crate::constants::NEXT_BASE_URL);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", crate::constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        let active_overrides: Vec<&str> = [env_vars::LOG_FILE, env_vars::HTTP_TIMEOUT]
            .into_iter()
            .filter(|key| std::env::var_os(key).is_some())
            .collect();
        if !active_overrides.is_empty() {
            println!("────────────────────────────────────");
            println!("Environment Overrides (not saved):");
            println!("{}", active_overrides.join(", "));
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent directory if needed.
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
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
log_file_path = "/custom/log/path"
http_timeout_seconds = 12
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.http_timeout_seconds, 12);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.http_timeout_seconds, 30);
    }

    #[tokio::test]
    async fn test_config_save_and_reload() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let config = Config {
            log_file_path: Some("/custom/log/path".to_string()),
            http_timeout_seconds: 45,
        };

        config.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("log_file_path") && content.contains("/custom/log/path"),
            "Content should contain log_file_path. Content: {content}"
        );

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded_config, config);
    }

    #[tokio::test]
    async fn test_config_save_omits_unset_log_path() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        Config::default()
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(!content.contains("log_file_path"));
        assert!(content.contains("http_timeout_seconds = 30"));
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "http_timeout_seconds = \"soon\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("BANGUMI_LOG_FILE", "/tmp/bangumi.log"),
            ("BANGUMI_HTTP_TIMEOUT", "5"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.log_file_path, Some("/tmp/bangumi.log".to_string()));
        assert_eq!(config.http_timeout_seconds, 5);
    }

    #[test]
    fn test_env_override_ignores_bad_timeout() {
        let mut config = Config::default();
        config.apply_env_overrides(|key| {
            (key == "BANGUMI_HTTP_TIMEOUT").then(|| "forever".to_string())
        });

        assert_eq!(config.http_timeout_seconds, 30);
        assert_eq!(config.log_file_path, None);
    }

    #[tokio::test]
    async fn test_env_overrides_are_not_persisted_by_update() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let stored_log = temp_dir.path().join("stored.log").to_string_lossy().to_string();
        let env_log = temp_dir.path().join("env.log").to_string_lossy().to_string();

        Config {
            log_file_path: Some(stored_log.clone()),
            http_timeout_seconds: 30,
        }
        .save_to_path(&config_path_str)
        .await
        .unwrap();

        let runtime = Config::load_at(&config_path_str, |key| {
            (key == "BANGUMI_LOG_FILE").then(|| env_log.clone())
        })
        .await
        .unwrap();
        assert_eq!(runtime.log_file_path, Some(env_log.clone()));

        let updated = Config::update_at(&config_path_str, |config| {
            config.http_timeout_seconds = 10;
        })
        .await
        .unwrap();
        assert_eq!(updated.log_file_path, Some(stored_log.clone()));

        let stored = Config::load_stored_at(&config_path_str).await.unwrap();
        assert_eq!(stored.log_file_path, Some(stored_log));
        assert_eq!(stored.http_timeout_seconds, 10);

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(!content.contains("env.log"), "Content: {content}");
    }

    #[tokio::test]
    async fn test_update_leaves_unparseable_file_alone() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let broken = "http_timeout_seconds = \"soon\"\nlog_file_path = \"/keep/me.log\"\n";
        tokio::fs::write(&config_path, broken).await.unwrap();

        let result = Config::update_at(&config_path.to_string_lossy(), |config| {
            config.http_timeout_seconds = 10;
        })
        .await;

        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert_eq!(content, broken);
    }

    #[tokio::test]
    async fn test_update_creates_missing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        Config::update_at(&config_path_str, |config| config.http_timeout_seconds = 15)
            .await
            .unwrap();

        assert!(config_path.exists());
        let stored = Config::load_stored_at(&config_path_str).await.unwrap();
        assert_eq!(stored.http_timeout_seconds, 15);
        assert_eq!(stored.log_file_path, None);
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_value_without_writing() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let result = Config::update_at(&config_path.to_string_lossy(), |config| {
            config.http_timeout_seconds = 0;
        })
        .await;

        assert!(matches!(result, Err(AppError::Config(_))));
        assert!(!config_path.exists());
    }

    #[tokio::test]
    async fn test_load_at_missing_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("absent.toml");

        let config = Config::load_at(&config_path.to_string_lossy(), |_| None)
            .await
            .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = Config {
            log_file_path: None,
            http_timeout_seconds: 0,
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
