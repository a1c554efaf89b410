pub mod linqs;

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

/// Conversion run on the downloaded files before the graph is built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Callback {
    /// Cora and CiteSeer incidence matrix to node and edge lists
    LinqsIncidenceMatrix,
    /// PubMed Diabetes incidence matrix to node and edge lists
    LinqsPubmedIncidenceMatrix,
}

/// A callback with the arguments declared by its catalog row
#[derive(Debug, Clone, Copy)]
pub struct CallbackSpec {
    pub callback: Callback,
    pub arguments: &'static [(&'static str, &'static str)],
}

impl CallbackSpec {
    /// Resolve the arguments against the cache directory.
    ///
    /// Values of keys ending in `_path` are joined with `cache_directory`,
    /// every other value is kept as is.
    pub fn resolve(&self, cache_directory: &Path) -> CallbackArguments {
        let arguments = self
            .arguments
            .iter()
            .map(|(key, value)| {
                let value = if key.ends_with("_path") {
                    cache_directory.join(value).to_string_lossy().to_string()
                } else {
                    value.to_string()
                };
                (key.to_string(), value)
            })
            .collect();
        CallbackArguments(arguments)
    }
}

/// Resolved callback arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackArguments(pub BTreeMap<String, String>);

impl CallbackArguments {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn path(&self, key: &str) -> Result<PathBuf> {
        self.get(key).map(PathBuf::from).ok_or_else(|| {
            CatalogError::InvalidArgument(format!("callback argument `{}` is missing", key))
        })
    }
}

impl Callback {
    /// Run the callback on the blocking pool
    pub async fn run(&self, arguments: CallbackArguments) -> Result<()> {
        let callback = *self;
        tokio::task::spawn_blocking(move || callback.run_blocking(&arguments))
            .await
            .map_err(|e| CatalogError::Backend(anyhow::anyhow!("callback task failed: {}", e)))?
    }

    pub fn run_blocking(&self, arguments: &CallbackArguments) -> Result<()> {
        let paths = linqs::LinqsPaths::from_arguments(arguments)?;
        match self {
            Callback::LinqsIncidenceMatrix => linqs::parse_linqs_incidence_matrix(&paths),
            Callback::LinqsPubmedIncidenceMatrix => {
                linqs::parse_linqs_pubmed_incidence_matrix(&paths)
            }
        }
    }
}
