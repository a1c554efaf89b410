use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

/// Environment variable consulted for the cache root by default
pub const DEFAULT_CACHE_SYSTEM_VARIABLE: &str = "GRAPH_CACHE_DIR";

/// Whether to preprocess the downloaded lists into the optimal edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preprocess {
    /// Preprocess where the sorting step is available (Linux and macOS)
    #[default]
    Auto,
    Always,
    Never,
}

impl Preprocess {
    pub fn resolve(&self) -> Result<bool> {
        let supported = cfg!(any(target_os = "linux", target_os = "macos"));
        match self {
            Preprocess::Auto => Ok(supported),
            Preprocess::Always if !supported => Err(CatalogError::PreprocessingUnsupported),
            Preprocess::Always => Ok(true),
            Preprocess::Never => Ok(false),
        }
    }
}

/// Caller overrides accepted by every accessor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalOptions {
    pub directed: bool,
    pub verbose: u8,
    pub cache_path: Option<PathBuf>,
    pub cache_sys_var: String,
    /// Version to retrieve, the catalog default when unset
    pub version: Option<String>,
    pub preprocess: Preprocess,
    pub load_nodes: bool,
    pub load_node_types: bool,
    pub load_edge_types: bool,
    pub load_edge_weights: bool,
    /// Enable the time-memory tradeoffs on graphs with less than 50M edges
    pub auto_enable_tradeoffs: bool,
    pub sort_tmp_dir: Option<PathBuf>,
    /// Keep preprocessed lists across retrievals, cleared before download when unset
    pub cache: bool,
    pub hash_seed: Option<String>,
    /// Extra loader arguments forwarded verbatim to the backend
    pub additional_graph_kwargs: Map<String, Value>,
}

impl Default for RetrievalOptions {
    fn default() -> Self {
        Self {
            directed: false,
            verbose: 2,
            cache_path: None,
            cache_sys_var: DEFAULT_CACHE_SYSTEM_VARIABLE.to_string(),
            version: None,
            preprocess: Preprocess::Auto,
            load_nodes: true,
            load_node_types: true,
            load_edge_types: true,
            load_edge_weights: true,
            auto_enable_tradeoffs: true,
            sort_tmp_dir: None,
            cache: true,
            hash_seed: None,
            additional_graph_kwargs: Map::new(),
        }
    }
}

impl RetrievalOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a JSON document, omitted fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn cache_path(mut self, cache_path: impl Into<PathBuf>) -> Self {
        self.cache_path = Some(cache_path.into());
        self
    }

    pub fn cache_sys_var(mut self, variable: impl Into<String>) -> Self {
        self.cache_sys_var = variable.into();
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn preprocess(mut self, preprocess: Preprocess) -> Self {
        self.preprocess = preprocess;
        self
    }

    pub fn load_nodes(mut self, load_nodes: bool) -> Self {
        self.load_nodes = load_nodes;
        self
    }

    pub fn load_node_types(mut self, load_node_types: bool) -> Self {
        self.load_node_types = load_node_types;
        self
    }

    pub fn load_edge_types(mut self, load_edge_types: bool) -> Self {
        self.load_edge_types = load_edge_types;
        self
    }

    pub fn load_edge_weights(mut self, load_edge_weights: bool) -> Self {
        self.load_edge_weights = load_edge_weights;
        self
    }

    pub fn auto_enable_tradeoffs(mut self, enable: bool) -> Self {
        self.auto_enable_tradeoffs = enable;
        self
    }

    pub fn sort_tmp_dir(mut self, directory: impl Into<PathBuf>) -> Self {
        self.sort_tmp_dir = Some(directory.into());
        self
    }

    pub fn cache(mut self, cache: bool) -> Self {
        self.cache = cache;
        self
    }

    pub fn hash_seed(mut self, seed: impl Into<String>) -> Self {
        self.hash_seed = Some(seed.into());
        self
    }

    /// Add an extra loader argument
    pub fn graph_kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_graph_kwargs.insert(key.into(), value.into());
        self
    }

    /// Root of the cache: the explicit path, else the environment
    /// variable, else `graphs`
    pub fn cache_root(&self) -> PathBuf {
        if let Some(cache_path) = &self.cache_path {
            return cache_path.clone();
        }
        std::env::var_os(&self.cache_sys_var)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("graphs"))
    }
}
