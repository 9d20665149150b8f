//! Configuration of the input file locations

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Error, Result};

/// Icon table location, relative to the `tools` directory of a source checkout
pub const DEFAULT_ICON_TABLE_PATH: &str = "../data/kernel-module-icons.json";
/// Module list, one `kernel/...` path per line
pub const DEFAULT_MODULE_LIST_PATH: &str = "/tmp/module_list";

/// Input locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Existing icon table to merge into (default: ../data/kernel-module-icons.json)
    pub icon_table_path: PathBuf,
    /// Module path list (default: /tmp/module_list)
    pub module_list_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon_table_path: PathBuf::from(DEFAULT_ICON_TABLE_PATH),
            module_list_path: PathBuf::from(DEFAULT_MODULE_LIST_PATH),
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults.
    ///
    /// A file given explicitly must exist and parse. The default file is
    /// optional, and a broken one only produces a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let Some(config_path) = Self::get_config_path() else {
            debug!("No config directory, using defaults");
            return Ok(Self::default());
        };

        if !config_path.exists() {
            debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        match Self::load_from_file(&config_path) {
            Ok(config) => Ok(config),
            Err(e) => {
                warn!("{}", e);
                warn!("Using default configuration");
                Ok(Self::default())
            }
        }
    }

    /// Get the default configuration file path
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("hardinfo2").join("kmod-iconsrc"))
    }

    /// Replace the configured paths with the ones given on the command line
    pub fn with_overrides(mut self, icon_table: Option<PathBuf>, module_list: Option<PathBuf>) -> Self {
        if let Some(path) = icon_table {
            self.icon_table_path = path;
        }
        if let Some(path) = module_list {
            self.module_list_path = path;
        }
        self
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&contents).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse `key = value` lines on top of the defaults
    fn parse(contents: &str) -> std::result::Result<Self, String> {
        let mut config = Self::default();

        for (lineno, line) in contents.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                return Err(format!("line {}: expected `key = value`", lineno + 1));
            };
            let key = key.trim();
            let value = value.trim();

            if value.is_empty() {
                return Err(format!("line {}: empty value for {}", lineno + 1, key));
            }

            match key {
                "icon_table_path" => config.icon_table_path = PathBuf::from(value),
                "module_list_path" => config.module_list_path = PathBuf::from(value),
                _ => {
                    warn!("Unknown config key: {}", key);
                }
            }
        }

        Ok(config)
    }
}
