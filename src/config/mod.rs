use crate::models::DashboardConfig;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration manager for loading and saving the dashboard YAML
/// configuration.
///
/// Manages a single file (`Ganttboard Config.yaml`) holding the library
/// source paths, environment mode, loading/retry parameters, error message
/// texts, and UI feedback settings. A missing file is not an error: every
/// section has safe defaults.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_dir: Utf8PathBuf,
    config_path: Utf8PathBuf,
}

impl ConfigManager {
    /// Create a new ConfigManager with the specified configuration directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing the configuration file (e.g., "Ganttboard Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            config_path: config_dir.join("Ganttboard Config.yaml"),
            config_dir,
        })
    }

    /// Load the dashboard configuration.
    ///
    /// # Returns
    /// The loaded DashboardConfig, or default if the file doesn't exist
    pub fn load_config(&self) -> Result<DashboardConfig> {
        if !self.config_path.exists() {
            tracing::warn!(
                "Config file not found at {}, using defaults",
                self.config_path
            );
            return Ok(DashboardConfig::default());
        }

        let file_contents = fs::read_to_string(&self.config_path)
            .with_context(|| format!("Failed to read config: {}", self.config_path))?;

        let config: DashboardConfig = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse config: {}", self.config_path))?;

        tracing::info!("Loaded config from {}", self.config_path);
        Ok(config)
    }

    /// Save the dashboard configuration.
    ///
    /// # Arguments
    /// * `config` - The DashboardConfig to save
    pub fn save_config(&self, config: &DashboardConfig) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(config).context("Failed to serialize config to YAML")?;

        fs::write(&self.config_path, yaml_string)
            .with_context(|| format!("Failed to write config: {}", self.config_path))?;

        tracing::info!("Saved config to {}", self.config_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the configuration file path.
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnvironmentMode;
    use tempfile::TempDir;

    fn create_test_config_manager() -> (ConfigManager, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let manager = ConfigManager::new(&config_path).unwrap();
        (manager, temp_dir)
    }

    #[test]
    fn test_create_config_manager() {
        let (manager, _temp_dir) = create_test_config_manager();
        assert!(manager.config_dir().exists());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();

        let config = manager.load_config().unwrap();
        assert_eq!(config.loading.timeout_ms, 10_000);
        assert_eq!(config.loading.retry_attempts, 2);
        assert_eq!(config.environment.mode, EnvironmentMode::Local);
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (manager, _temp_dir) = create_test_config_manager();

        let mut config = DashboardConfig::default();
        config.environment.mode = EnvironmentMode::Auto;
        config.loading.retry_attempts = 5;
        manager.save_config(&config).unwrap();

        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded.environment.mode, EnvironmentMode::Auto);
        assert_eq!(loaded.loading.retry_attempts, 5);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let (manager, _temp_dir) = create_test_config_manager();

        let yaml = "loading:\n  timeout_ms: 2500\n";
        fs::write(manager.config_path(), yaml).unwrap();

        let loaded = manager.load_config().unwrap();
        assert_eq!(loaded.loading.timeout_ms, 2500);
        // Untouched sections keep their defaults
        assert_eq!(loaded.library.id, "d3");
        assert!(loaded.environment.offline);
    }
}
