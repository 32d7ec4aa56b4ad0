use crate::errors::{YurisError, YurisResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Half-open range of the per-word delay while a reply is typed out, in ms.
    pub typing_delay_ms: (u64, u64),
    /// Half-open range of the per-word delay during the thinking trace, in ms.
    pub thinking_delay_ms: (u64, u64),
    /// Pause before playback starts and between thinking and typing, in ms.
    pub reply_pause_ms: u64,
    pub tick_rate_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            typing_delay_ms: (50, 150),
            thinking_delay_ms: (40, 120),
            reply_pause_ms: 500,
            tick_rate_ms: 250,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> YurisResult<()> {
    let config_path = get_config_path()?;

    // If config exists, load it
    if config_path.exists() {
        let config = load_config_from(&config_path)?;
        *CONFIG.write().unwrap() = config;
    } else {
        // Write defaults so the file is there to edit next time
        let config = Config::default();
        save_config_to(&config_path, &config)?;
        *CONFIG.write().unwrap() = config;
    }

    Ok(())
}

fn get_config_path() -> YurisResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| YurisError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("yuris").join("config.json"))
}

pub fn load_config_from(path: &Path) -> YurisResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| YurisError::config_error(format!("Failed to read config file: {}", e)))?;

    let config: Config = serde_json::from_str(&config_str)
        .map_err(|e| YurisError::config_error(format!("Failed to parse config: {}", e)))?;

    validate_config(&config)?;
    Ok(config)
}

pub fn save_config_to(path: &Path, config: &Config) -> YurisResult<()> {
    validate_config(config)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            YurisError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| YurisError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| YurisError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(())
}

fn validate_config(config: &Config) -> YurisResult<()> {
    let (typing_min, typing_max) = config.typing_delay_ms;
    if typing_min >= typing_max {
        return Err(YurisError::config_error(
            "typing_delay_ms must be an increasing (min, max) pair",
        ));
    }

    let (thinking_min, thinking_max) = config.thinking_delay_ms;
    if thinking_min >= thinking_max {
        return Err(YurisError::config_error(
            "thinking_delay_ms must be an increasing (min, max) pair",
        ));
    }

    if config.tick_rate_ms == 0 {
        return Err(YurisError::config_error("tick_rate_ms must be greater than 0"));
    }

    const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];
    if !LEVELS.contains(&config.log_level.as_str()) {
        return Err(YurisError::config_error(format!(
            "Unknown log level: {}",
            config.log_level
        )));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub fn update_config(updated_config: Config) -> YurisResult<()> {
    validate_config(&updated_config)?;

    let config_path = get_config_path()?;
    save_config_to(&config_path, &updated_config)?;

    *CONFIG.write().unwrap() = updated_config;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_inverted_typing_range() {
        let mut config = Config::default();
        config.typing_delay_ms = (150, 50);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_unknown_log_level() {
        let mut config = Config::default();
        config.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = Config::default();
        config.reply_pause_ms = 120;
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded.reply_pause_ms, 120);
        assert_eq!(loaded.typing_delay_ms, config.typing_delay_ms);
    }
}
