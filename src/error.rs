use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::Repository;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(
        "Requested graph `{name}` is not available in the {repository} repository{}",
        suggestion_hint(.suggestion)
    )]
    UnknownGraph {
        name: String,
        repository: Repository,
        suggestion: Option<String>,
    },

    #[error("Version `{version}` of graph `{name}` is not available, choose one of: {}", .available.join(", "))]
    UnknownVersion {
        name: String,
        version: String,
        available: Vec<String>,
    },

    #[error("Unknown repository: {0}")]
    UnknownRepository(String),

    #[error("Preprocessing to the optimal edge list is not supported on this platform")]
    PreprocessingUnsupported,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Callback failed on {path}: {message}")]
    Callback { path: PathBuf, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Backend error: {0}")]
    Backend(#[source] anyhow::Error),
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(", did you mean `{}`?", name),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
