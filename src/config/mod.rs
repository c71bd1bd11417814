use crate::core::ensure_status_file;
use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, resolve_file};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "default_status_file")]
    pub status_file: String,
    #[serde(default = "default_duration_hours")]
    pub default_duration_hours: u32,
    #[serde(default = "default_icon")]
    pub default_icon: String,
    /// How many active statuses `now` prints before collapsing the rest.
    #[serde(default = "default_max_shown")]
    pub max_shown: usize,
}

fn default_status_file() -> String {
    Config::status_file_default().to_string_lossy().to_string()
}
fn default_duration_hours() -> u32 {
    8
}
fn default_icon() -> String {
    "📌".to_string()
}
fn default_max_shown() -> usize {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            status_file: default_status_file(),
            default_duration_hours: default_duration_hours(),
            default_icon: default_icon(),
            max_shown: default_max_shown(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rstatusboard")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rstatusboard")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rstatusboard.conf")
    }

    /// Return the default path of the JSON status file
    pub fn status_file_default() -> PathBuf {
        Self::config_dir().join("status.json")
    }

    /// Status file with `~/` expanded.
    pub fn status_path(&self) -> PathBuf {
        expand_tilde(&self.status_file)
    }

    /// Load configuration from file, or return defaults if not found.
    /// Keys missing from the file take their default value.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {}", path.display(), e)))?;

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml =
            serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| AppError::ConfigSave(format!("{}: {}", dir.display(), e)))?;
        }

        fs::write(path, yaml)
            .map_err(|e| AppError::ConfigSave(format!("{}: {}", path.display(), e)))
    }

    fn validate(&self) -> AppResult<()> {
        use crate::models::status::{MAX_DURATION_HOURS, MIN_DURATION_HOURS};

        if !(MIN_DURATION_HOURS..=MAX_DURATION_HOURS).contains(&self.default_duration_hours) {
            return Err(AppError::Config(format!(
                "default_duration_hours must be between {} and {}, got {}",
                MIN_DURATION_HOURS, MAX_DURATION_HOURS, self.default_duration_hours
            )));
        }
        if self.default_icon.trim().is_empty() {
            return Err(AppError::Config("default_icon must not be empty".into()));
        }
        Ok(())
    }

    /// Initialize configuration and status files.
    ///
    /// A relative `custom_file` is resolved against the current directory,
    /// like `--file` for every other command. In test mode the config file is
    /// left untouched.
    pub fn init_all(custom_file: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let status_path = match custom_file {
            Some(name) => resolve_file(&name),
            None => Self::status_file_default(),
        };

        let config = Config {
            status_file: status_path.to_string_lossy().to_string(),
            ..Config::load()?
        };

        if !is_test {
            config.save_to(&Self::config_file())?;
        }

        ensure_status_file(&status_path)?;

        Ok(config)
    }
}
