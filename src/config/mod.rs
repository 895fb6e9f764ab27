use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Forward window, in days, of `GET /api/v0/diet/` and `list`.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_bind() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8000
}
fn default_window_days() -> u32 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            bind: default_bind(),
            port: default_port(),
            window_days: default_window_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("dietlog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".dietlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("dietlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("diet.db")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let mut cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("failed to parse configuration: {}", e)))?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {}", e)))
    }

    /// `DIETLOG_PORT`, when set, wins over the file value.
    pub fn apply_env_overrides(&mut self) -> AppResult<()> {
        self.apply_port_override(env::var("DIETLOG_PORT").ok().as_deref())
    }

    pub fn apply_port_override(&mut self, port: Option<&str>) -> AppResult<()> {
        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| AppError::Config(format!("invalid DIETLOG_PORT: {}", port)))?;
        }
        Ok(())
    }

    /// Write the configuration file (unless `is_test`) and return its path.
    pub fn init_all(&self, is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            fs::write(&path, self.to_yaml()?)?;
        }
        Ok(path)
    }
}
