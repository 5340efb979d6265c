use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{KleioError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Tab-delimited annotation table ingested on first query
    #[serde(default = "default_annotation_table")]
    pub annotation_table: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Result cap for nearest-sample queries
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Result cap for descendant-subtree retrieval
    #[serde(default = "default_subtree_limit")]
    pub subtree_limit: usize,
    /// Drop modern reference-panel rows from sample results
    #[serde(default = "default_exclude_modern")]
    pub exclude_modern: bool,
}

fn default_annotation_table() -> String {
    "v62_0_HO_public.anno".to_string()
}

fn default_result_limit() -> usize {
    10
}

fn default_subtree_limit() -> usize {
    50
}

fn default_exclude_modern() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            annotation_table: default_annotation_table(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            result_limit: default_result_limit(),
            subtree_limit: default_subtree_limit(),
            exclude_modern: default_exclude_modern(),
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| KleioError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<()> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| KleioError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
