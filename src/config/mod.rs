use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Rows shown per page by the raw data viewer
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_divider_width")]
    pub divider_width: usize,
    /// Print "This took N seconds." under each statistics block
    #[serde(default = "default_show_timing")]
    pub show_timing: bool,
}

fn default_data_dir() -> String {
    "datasets".to_string()
}
fn default_page_size() -> usize {
    5
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_divider_width() -> usize {
    40
}
fn default_show_timing() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            page_size: default_page_size(),
            separator_char: default_separator_char(),
            divider_width: default_divider_width(),
            show_timing: default_show_timing(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bikeshare")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".bikeshare")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.conf")
    }

    /// Load configuration from the standard location, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if self.separator_char.is_empty() {
            return Err(AppError::Config("separator_char must not be empty".into()));
        }
        Ok(())
    }

    /// Line printed between report blocks.
    pub fn divider(&self) -> String {
        self.separator_char.repeat(self.divider_width)
    }

    /// Write the default configuration file (and its directory).
    ///
    /// Returns the path written. With `is_test` nothing touches the disk.
    pub fn init_file(is_test: bool) -> AppResult<PathBuf> {
        let path = Self::config_file();
        if is_test {
            return Ok(path);
        }

        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(&Config::default())?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(path)
    }
}
