//! Configuration for comment tooling

use crate::comment::{CommentExpandOptions, CommentSortOrder};
use crate::error::{CommentsError, Result};
use crate::query::CommentQuery;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults applied to listing queries
    pub query: QueryConfig,
    /// Display settings
    pub output: OutputConfig,
}

/// Listing query defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryConfig {
    /// Page size; leave out of the file to use the service default
    pub top: Option<u32>,
    pub include_deleted: bool,
    /// Expand flag names, e.g. "reactions,children" or "all"
    pub expand: String,
    /// "asc" or "desc"
    pub order: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            top: None,
            include_deleted: false,
            expand: "reactions,renderedText".to_string(),
            order: "asc".to_string(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// "tree" or "json"
    pub format: String,
    /// Show deleted comments in tree output
    pub show_deleted: bool,
    /// Maximum characters of comment text per line in tree output
    pub max_text_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "tree".to_string(),
            show_deleted: false,
            max_text_width: 80,
        }
    }
}

impl Config {
    /// Load from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml(&content)?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load from a TOML file, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CommentsError::Toml(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CommentsError::Toml(e.to_string()))
    }

    /// Write to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_toml()?)?;
        debug!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Resolve the query defaults into a typed query
    pub fn query(&self) -> Result<CommentQuery> {
        let expand: CommentExpandOptions = self
            .query
            .expand
            .parse()
            .map_err(|e: CommentsError| CommentsError::Config(format!("query.expand: {}", e)))?;
        let order: CommentSortOrder = self
            .query
            .order
            .parse()
            .map_err(|e: CommentsError| CommentsError::Config(format!("query.order: {}", e)))?;

        let mut query = CommentQuery::new().expand(expand).order(order);
        query.top = self.query.top;
        if self.query.include_deleted {
            query = query.include_deleted(true);
        }
        Ok(query)
    }
}
