pub mod options;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::callbacks::{Callback, CallbackArguments};
use crate::catalog::{Catalog, GraphEntry, Repository};
use crate::error::{CatalogError, Result};

pub use options::{Preprocess, RetrievalOptions, DEFAULT_CACHE_SYSTEM_VARIABLE};

/// Graphs with fewer unique edges get the time-memory tradeoffs enabled
pub const TRADEOFFS_EDGES_THRESHOLD: u64 = 50_000_000;

/// Graph object produced by a backend
pub trait GraphHandle: Send {
    fn unique_edges_number(&self) -> u64;

    /// Enable the time-memory tradeoffs of the graph
    fn enable(&mut self) -> anyhow::Result<()>;
}

/// Downloads the files of a catalog graph and builds it.
///
/// The crate never touches the network or parses edge lists itself: both
/// steps are delegated to the backend, which receives the fully resolved
/// retrieval plan.
#[async_trait]
pub trait GraphBackend: Send + Sync {
    type Graph: GraphHandle;

    /// Fetch the raw files of the graph into its cache directory
    async fn download(&self, graph: &AutomaticallyRetrievedGraph) -> anyhow::Result<()>;

    /// Build the graph from the downloaded (and converted) files
    async fn build(&self, graph: &AutomaticallyRetrievedGraph) -> anyhow::Result<Self::Graph>;
}

/// A catalog graph bound to caller options, ready to be retrieved
#[derive(Debug, Clone)]
pub struct AutomaticallyRetrievedGraph {
    entry: &'static GraphEntry,
    version: String,
    options: RetrievalOptions,
    preprocess: bool,
    cache_directory: PathBuf,
}

impl AutomaticallyRetrievedGraph {
    /// Bind the catalog graph `name` of `repository` to the given options.
    ///
    /// Fails when the graph or the requested version is unknown, or when
    /// preprocessing is forced on a platform that does not support it.
    pub fn new(name: &str, repository: Repository, options: RetrievalOptions) -> Result<Self> {
        let catalog = Catalog::global();
        let entry = catalog.find(name, repository)?;
        let version = options
            .version
            .clone()
            .unwrap_or_else(|| entry.default_version.to_string());
        catalog.validate_graph_version(name, repository, &version)?;

        let preprocess = options.preprocess.resolve()?;
        let cache_directory = options
            .cache_root()
            .join(repository.as_str())
            .join(entry.name)
            .join(&version);

        Ok(Self {
            entry,
            version,
            options,
            preprocess,
            cache_directory,
        })
    }

    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    pub fn repository(&self) -> Repository {
        self.entry.repository
    }

    /// The dataset tag of the source repository
    pub fn dataset(&self) -> &'static str {
        self.entry.repository.as_str()
    }

    pub fn entry(&self) -> &'static GraphEntry {
        self.entry
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn options(&self) -> &RetrievalOptions {
        &self.options
    }

    pub fn directed(&self) -> bool {
        self.options.directed
    }

    pub fn verbose(&self) -> u8 {
        self.options.verbose
    }

    /// The cache path as given by the caller
    pub fn cache_path(&self) -> Option<&Path> {
        self.options.cache_path.as_deref()
    }

    pub fn additional_graph_kwargs(&self) -> &Map<String, Value> {
        &self.options.additional_graph_kwargs
    }

    pub fn preprocess(&self) -> bool {
        self.preprocess
    }

    /// Directory holding the files of this graph version
    pub fn cache_directory(&self) -> &Path {
        &self.cache_directory
    }

    /// Loader arguments: the catalog ones overridden by the caller kwargs.
    ///
    /// Edge type arguments of the catalog are dropped when edge types are
    /// not to be loaded.
    pub fn graph_arguments(&self) -> Map<String, Value> {
        let mut arguments: Map<String, Value> = self
            .entry
            .arguments_map()
            .into_iter()
            .filter(|(key, _)| self.options.load_edge_types || !key.contains("edge_type"))
            .collect();
        for (key, value) in &self.options.additional_graph_kwargs {
            arguments.insert(key.clone(), value.clone());
        }
        arguments
    }

    /// Join a `*_path` loader argument with the cache directory
    pub fn adjusted_path(&self, argument: &str) -> Option<PathBuf> {
        self.graph_arguments()
            .get(argument)
            .and_then(|value| value.as_str())
            .map(|path| self.cache_directory.join(path))
    }

    /// Directory of the preprocessed lists, one per instance hash
    pub fn preprocessed_directory(&self) -> PathBuf {
        self.cache_directory
            .join("preprocessed")
            .join(if self.directed() {
                "directed"
            } else {
                "undirected"
            })
            .join(self.instance_hash())
    }

    pub fn preprocessed_nodes_path(&self) -> PathBuf {
        self.preprocessed_directory().join("nodes.tsv")
    }

    pub fn preprocessed_node_types_path(&self) -> PathBuf {
        self.preprocessed_directory().join("node_types.tsv")
    }

    pub fn preprocessed_edges_path(&self) -> PathBuf {
        self.preprocessed_directory().join("edges.tsv")
    }

    pub fn preprocessed_edge_types_path(&self) -> PathBuf {
        self.preprocessed_directory().join("edge_types.tsv")
    }

    pub fn preprocessed_metadata_path(&self) -> PathBuf {
        self.preprocessed_directory().join("metadata.json")
    }

    /// Callbacks of the catalog row with their arguments resolved
    pub fn callbacks(&self) -> Vec<(Callback, CallbackArguments)> {
        self.entry
            .callbacks
            .iter()
            .map(|spec| (spec.callback, spec.resolve(&self.cache_directory)))
            .collect()
    }

    /// Stable SHA-256 digest identifying this retrieval configuration
    pub fn instance_hash(&self) -> String {
        let description = json!({
            "hash_seed": self.options.hash_seed,
            "name": self.entry.name,
            "repository": self.entry.repository,
            "version": self.version,
            "load_nodes": self.options.load_nodes,
            "load_node_types": self.options.load_node_types,
            "load_edge_types": self.options.load_edge_types,
            "load_edge_weights": self.options.load_edge_weights,
            "arguments": self.graph_arguments(),
        });
        let mut hasher = Sha256::new();
        hasher.update(description.to_string().as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Download, convert and build the graph through the backend.
    ///
    /// Without caching, preprocessed lists left by a previous retrieval are
    /// removed first.
    pub async fn retrieve<B>(&self, backend: &B) -> Result<B::Graph>
    where
        B: GraphBackend + ?Sized,
    {
        if !self.options.cache {
            self.clear_preprocessed().await?;
        }

        self.log_stage("Downloading");
        backend.download(self).await.map_err(CatalogError::Backend)?;

        for (callback, arguments) in self.callbacks() {
            self.log_stage(&format!("Running {:?} on", callback));
            callback.run(arguments).await?;
        }

        self.log_stage("Building");
        let mut graph = backend.build(self).await.map_err(CatalogError::Backend)?;

        if self.options.auto_enable_tradeoffs
            && graph.unique_edges_number() < TRADEOFFS_EDGES_THRESHOLD
        {
            debug!("Enabling time-memory tradeoffs for {}", self.entry.name);
            graph.enable().map_err(CatalogError::Backend)?;
        }

        Ok(graph)
    }

    async fn clear_preprocessed(&self) -> Result<()> {
        let directory = self.preprocessed_directory();
        if tokio::fs::try_exists(&directory).await? {
            debug!("Removing cached {}", directory.display());
            tokio::fs::remove_dir_all(&directory).await?;
        }
        Ok(())
    }

    fn log_stage(&self, stage: &str) {
        if self.options.verbose > 0 {
            info!(
                "{} {} {} from {}",
                stage, self.entry.name, self.version, self.entry.repository
            );
        } else {
            debug!(
                "{} {} {} from {}",
                stage, self.entry.name, self.version, self.entry.repository
            );
        }
    }
}

/// Construct the collaborator for a catalog graph and invoke it once
pub async fn retrieve_graph<B>(
    backend: &B,
    name: &str,
    repository: Repository,
    options: RetrievalOptions,
) -> Result<B::Graph>
where
    B: GraphBackend + ?Sized,
{
    AutomaticallyRetrievedGraph::new(name, repository, options)?
        .retrieve(backend)
        .await
}
