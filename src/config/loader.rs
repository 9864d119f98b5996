use super::types::Config;
use crate::types::BedwarsMode;
use crate::utils::exe_dir;
use anyhow::{Context, Result};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Owns `config.toml`: loads it once, hands out snapshots, and persists every change.
#[derive(Clone)]
pub struct SettingsStore {
    config_path: PathBuf,
    current: Arc<RwLock<Config>>,
}

impl SettingsStore {
    /// Loads `config.toml` next to the executable
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_config_path())
    }

    pub fn load_from(config_path: impl Into<PathBuf>) -> Result<Self> {
        let config_path = config_path.into();
        let config = Self::read_or_create(&config_path)?;
        Ok(Self {
            config_path,
            current: Arc::new(RwLock::new(config)),
        })
    }

    fn default_config_path() -> PathBuf {
        exe_dir().join("config.toml")
    }

    fn read_or_create(path: &Path) -> Result<Config> {
        if !path.exists() {
            info!("Config file not found, creating default config at {:?}", path);
            let config = Config::default();
            Self::write(path, &config)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&contents)
            .context("Failed to parse config file")?;

        info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    fn write(path: &Path, config: &Config) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(config)
            .context("Failed to serialize config")?;

        fs::write(path, toml_string)
            .context("Failed to write config file")?;

        info!("Saved configuration to {:?}", path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Copy of the current settings, taken at the start of a request
    pub fn snapshot(&self) -> Config {
        self.current.read().clone()
    }

    /// Applies `updater` and writes the file before returning
    pub fn update<F>(&self, updater: F) -> Result<()>
    where
        F: FnOnce(&mut Config),
    {
        let mut config = self.current.write();
        let mut updated = config.clone();
        updater(&mut updated);
        Self::write(&self.config_path, &updated)?;
        *config = updated;
        Ok(())
    }

    pub fn set_api_key(&self, api_key: &str) -> Result<()> {
        self.update(|c| c.api_key = api_key.trim().to_string())
    }

    pub fn set_my_nick(&self, nick: &str) -> Result<()> {
        self.update(|c| c.my_nick = nick.trim().to_string())
    }

    pub fn set_bedwars_mode(&self, mode: BedwarsMode) -> Result<()> {
        self.update(|c| c.bedwars_mode = mode)
    }

    pub fn set_send_to_bedwars_love(&self, enabled: bool) -> Result<()> {
        self.update(|c| c.send_to_bedwars_love = enabled)
    }

    pub fn set_bedwars_love_api_url(&self, url: &str) -> Result<()> {
        self.update(|c| c.bedwars_love_api_url = url.trim().to_string())
    }

    pub fn set_ingame_name(&self, name: Option<String>) -> Result<()> {
        self.update(|c| c.ingame_name = name.filter(|n| !n.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(test: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("bedwars_stats_{}_{}", test, uuid::Uuid::new_v4()))
            .join("config.toml")
    }

    #[test]
    fn test_default_path_is_next_to_executable() {
        let path = SettingsStore::default_config_path();
        assert_eq!(path.parent(), Some(exe_dir().as_path()));
        assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("config.toml"));
    }

    #[test]
    fn test_creates_default_file() {
        let path = temp_config_path("create");
        let store = SettingsStore::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.snapshot(), Config::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_setters_persist() {
        let path = temp_config_path("persist");
        let store = SettingsStore::load_from(&path).unwrap();

        store.set_api_key(" f7c77d99-9f15-4a66-a87d-c4a51ef30d19 ").unwrap();
        store.set_my_nick("SneakyNick").unwrap();
        store.set_bedwars_mode(BedwarsMode::Fours).unwrap();
        store.set_send_to_bedwars_love(true).unwrap();
        store.set_ingame_name(Some("  ".into())).unwrap();

        let reloaded = SettingsStore::load_from(&path).unwrap().snapshot();
        assert_eq!(reloaded.api_key, "f7c77d99-9f15-4a66-a87d-c4a51ef30d19");
        assert_eq!(reloaded.my_nick, "SneakyNick");
        assert_eq!(reloaded.bedwars_mode, BedwarsMode::Fours);
        assert!(reloaded.send_to_bedwars_love);
        assert_eq!(reloaded.ingame_name, None);
        assert_eq!(reloaded, store.snapshot());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let path = temp_config_path("snapshot");
        let store = SettingsStore::load_from(&path).unwrap();
        let before = store.snapshot();
        store.set_my_nick("Later").unwrap();
        assert_eq!(before.my_nick, "");
        assert_eq!(store.snapshot().my_nick, "Later");
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_rejects_broken_file() {
        let path = temp_config_path("broken");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "api_key = [").unwrap();
        assert!(SettingsStore::load_from(&path).is_err());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
