use crate::error::{AchqError, Result};
use crate::query::page::DEFAULT_PAGE_SIZE;
use crate::query::SortSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SORT: &str = "date_desc";

/// Configuration for achq, stored in <data dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AchqConfig {
    /// Rows per page when `--page-size` is not given
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Sort used when `--sort` is not given, as `<field>_<asc|desc>`
    #[serde(default = "default_sort")]
    pub default_sort: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Default for AchqConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_sort: default_sort(),
        }
    }
}

impl AchqConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AchqError::Io)?;
        let config: AchqConfig =
            serde_json::from_str(&content).map_err(AchqError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(AchqError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(AchqError::Serialization)?;
        fs::write(config_path, content).map_err(AchqError::Io)?;
        Ok(())
    }

    pub fn sort(&self) -> SortSpec {
        SortSpec::from(self.default_sort.as_str())
    }

    pub fn set_page_size(&mut self, value: &str) -> Result<()> {
        let size: usize = value
            .parse()
            .map_err(|_| AchqError::Api(format!("Invalid page size: {}", value)))?;
        if size == 0 {
            return Err(AchqError::InvalidPageSize);
        }
        self.page_size = size;
        Ok(())
    }

    /// Stores the normalized form, so `level` is saved as `level_desc`.
    pub fn set_default_sort(&mut self, value: &str) {
        self.default_sort = SortSpec::from(value).to_string();
    }
}
