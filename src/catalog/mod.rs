#[macro_use]
mod macros;

pub mod kghub;
pub mod kgobo;
pub mod linqs;
pub mod listing;
pub mod networkrepository;
pub mod pheknowlator;
pub mod string;
pub mod summary;
pub mod zenodo;

use once_cell::sync::Lazy;
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

use crate::callbacks::CallbackSpec;
use crate::error::{CatalogError, Result};

pub use listing::{format_entries, CatalogFormat};
pub use summary::{ComponentsSummary, GraphSummary};

/// Upstream repository a catalog graph is retrieved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repository {
    String,
    KgHub,
    Linqs,
    KgObo,
    Zenodo,
    NetworkRepository,
    PheKnowLatorKg,
}

impl Repository {
    pub fn all() -> &'static [Repository] {
        &[
            Repository::String,
            Repository::KgHub,
            Repository::Linqs,
            Repository::KgObo,
            Repository::Zenodo,
            Repository::NetworkRepository,
            Repository::PheKnowLatorKg,
        ]
    }

    /// The dataset tag of the repository
    pub fn as_str(&self) -> &'static str {
        match self {
            Repository::String => "string",
            Repository::KgHub => "kghub",
            Repository::Linqs => "linqs",
            Repository::KgObo => "kgobo",
            Repository::Zenodo => "zenodo",
            Repository::NetworkRepository => "networkrepository",
            Repository::PheKnowLatorKg => "pheknowlatorkg",
        }
    }

    /// Cache directory used when neither a cache path nor the cache
    /// environment variable is provided
    pub fn default_cache_path(&self) -> PathBuf {
        PathBuf::from("graphs").join(self.as_str())
    }

    fn entries(&self) -> &'static [GraphEntry] {
        match self {
            Repository::String => string::ENTRIES,
            Repository::KgHub => kghub::ENTRIES,
            Repository::Linqs => linqs::ENTRIES,
            Repository::KgObo => kgobo::ENTRIES,
            Repository::Zenodo => zenodo::ENTRIES,
            Repository::NetworkRepository => networkrepository::ENTRIES,
            Repository::PheKnowLatorKg => pheknowlator::ENTRIES,
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Repository {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Repository::all()
            .iter()
            .copied()
            .find(|repository| repository.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CatalogError::UnknownRepository(s.to_string()))
    }
}

/// Loader argument value stored in the catalog
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArgumentValue {
    Str(&'static str),
    Int(i64),
    Bool(bool),
}

impl ArgumentValue {
    pub fn to_json(&self) -> Value {
        match self {
            ArgumentValue::Str(s) => Value::from(*s),
            ArgumentValue::Int(i) => Value::from(*i),
            ArgumentValue::Bool(b) => Value::from(*b),
        }
    }
}

/// A row of the graph catalog
#[derive(Debug, Clone, Copy)]
pub struct GraphEntry {
    pub name: &'static str,
    pub repository: Repository,
    pub versions: &'static [&'static str],
    pub default_version: &'static str,
    pub description: &'static str,
    /// BibTeX entries to cite when using the graph
    pub citation: Option<&'static str>,
    pub summary: Option<GraphSummary>,
    pub arguments: &'static [(&'static str, ArgumentValue)],
    pub callbacks: &'static [CallbackSpec],
}

impl GraphEntry {
    pub fn has_version(&self, version: &str) -> bool {
        self.versions.iter().any(|v| *v == version)
    }

    pub fn default_cache_path(&self) -> PathBuf {
        self.repository.default_cache_path()
    }

    /// Loader arguments as a JSON object
    pub fn arguments_map(&self) -> serde_json::Map<String, Value> {
        self.arguments
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_json()))
            .collect()
    }

    /// Textual report of the snapshot statistics, if the row has any
    pub fn report(&self) -> Option<String> {
        self.summary
            .as_ref()
            .map(|summary| summary.render_report(self.name))
    }
}

/// Indexed view over every catalog row
pub struct Catalog {
    entries: Vec<&'static GraphEntry>,
    index: BTreeMap<Repository, HashMap<&'static str, &'static GraphEntry>>,
}

static CATALOG: Lazy<Catalog> = Lazy::new(|| {
    Catalog::from_entries(
        Repository::all()
            .iter()
            .flat_map(|repository| repository.entries().iter()),
    )
});

impl Catalog {
    /// The catalog of every graph known to the crate
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    fn from_entries(entries: impl Iterator<Item = &'static GraphEntry>) -> Self {
        let entries: Vec<&'static GraphEntry> = entries.collect();
        let mut index: BTreeMap<Repository, HashMap<&'static str, &'static GraphEntry>> =
            BTreeMap::new();
        for entry in &entries {
            index
                .entry(entry.repository)
                .or_default()
                .insert(entry.name, *entry);
        }
        Self { entries, index }
    }

    pub fn entries(&self) -> &[&'static GraphEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn repositories(&self) -> Vec<Repository> {
        let mut repositories: Vec<Repository> =
            self.entries.iter().map(|entry| entry.repository).collect();
        repositories.sort();
        repositories.dedup();
        repositories
    }

    pub fn graphs_in(&self, repository: Repository) -> Vec<&'static GraphEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.repository == repository)
            .copied()
            .collect()
    }

    /// Find a graph by exact name within a repository
    pub fn find(&self, name: &str, repository: Repository) -> Result<&'static GraphEntry> {
        self.index
            .get(&repository)
            .and_then(|graphs| graphs.get(name))
            .copied()
            .ok_or_else(|| CatalogError::UnknownGraph {
                name: name.to_string(),
                repository,
                suggestion: self.closest_name(name, repository),
            })
    }

    fn closest_name(&self, name: &str, repository: Repository) -> Option<String> {
        let lowercase = name.to_lowercase();
        self.graphs_in(repository)
            .into_iter()
            .map(|entry| {
                let score = strsim::jaro_winkler(&lowercase, &entry.name.to_lowercase());
                (score, entry.name)
            })
            .filter(|(score, _)| *score >= 0.7)
            .max_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, closest)| closest.to_string())
    }

    pub fn available_versions(
        &self,
        name: &str,
        repository: Repository,
    ) -> Result<&'static [&'static str]> {
        Ok(self.find(name, repository)?.versions)
    }

    /// Check that the given version of the graph exists
    pub fn validate_graph_version(
        &self,
        name: &str,
        repository: Repository,
        version: &str,
    ) -> Result<&'static GraphEntry> {
        let entry = self.find(name, repository)?;
        if !entry.has_version(version) {
            return Err(CatalogError::UnknownVersion {
                name: name.to_string(),
                version: version.to_string(),
                available: entry.versions.iter().map(|v| v.to_string()).collect(),
            });
        }
        Ok(entry)
    }

    /// Case-insensitive regex search over graph names and descriptions
    pub fn search(&self, pattern: &str) -> Result<Vec<&'static GraphEntry>> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| CatalogError::InvalidArgument(format!("invalid search pattern: {}", e)))?;

        Ok(self
            .entries
            .iter()
            .filter(|entry| regex.is_match(entry.name) || regex.is_match(entry.description))
            .copied()
            .collect())
    }
}
