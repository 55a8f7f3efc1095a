use crate::error::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Settings shared by every record query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    pub bucket: String,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub time_column: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            bucket: "instance".to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
            time_column: "_time".to_string(),
        }
    }
}

impl QueryConfig {
    /// Loads a JSON config file; missing keys take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| PlanError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| PlanError::ConfigParse {
            path: path.display().to_string(),
            source,
        })
    }

    /// `0` selects the default page size; larger requests are capped.
    pub fn page_size(&self, requested: usize) -> usize {
        match requested {
            0 => self.default_page_size,
            n if n > self.max_page_size => self.max_page_size,
            n => n,
        }
    }
}
