pub mod adna;
pub mod cli;
pub mod core;
pub mod ingest;
pub mod query;

pub use crate::adna::registry::CladeRegistry;
pub use crate::query::QueryEngine;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KleioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, KleioError>;
