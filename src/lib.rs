// Expose modules as public for use by other crates
pub mod callbacks;
pub mod catalog;
pub mod error;
pub mod logging;
pub mod retrieval;

// Re-export core types for convenience
pub use catalog::{
    format_entries, Catalog, CatalogFormat, ComponentsSummary, GraphEntry, GraphSummary,
    Repository,
};
pub use error::{CatalogError, Result};
pub use retrieval::{
    retrieve_graph, AutomaticallyRetrievedGraph, GraphBackend, GraphHandle, Preprocess,
    RetrievalOptions,
};
