use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use super::*;
use crate::catalog::{kghub, kgobo, string, zenodo};

#[derive(Debug, Clone, PartialEq)]
struct MockGraph {
    name: String,
    unique_edges: u64,
    enabled: bool,
}

impl GraphHandle for MockGraph {
    fn unique_edges_number(&self) -> u64 {
        self.unique_edges
    }

    fn enable(&mut self) -> anyhow::Result<()> {
        self.enabled = true;
        Ok(())
    }
}

/// Backend recording every plan it receives
#[derive(Default)]
struct RecordingBackend {
    unique_edges: u64,
    fail_download: bool,
    downloads: Mutex<Vec<AutomaticallyRetrievedGraph>>,
    builds: Mutex<Vec<AutomaticallyRetrievedGraph>>,
    /// Each stage with whether the edge list existed when it started
    stages: Mutex<Vec<(&'static str, bool)>>,
}

fn edge_list_exists(graph: &AutomaticallyRetrievedGraph) -> bool {
    graph
        .adjusted_path("edge_path")
        .map(|path| path.exists())
        .unwrap_or(false)
}

impl RecordingBackend {
    fn with_edges(unique_edges: u64) -> Self {
        Self {
            unique_edges,
            ..Default::default()
        }
    }

    fn single_build(&self) -> AutomaticallyRetrievedGraph {
        let builds = self.builds.lock().unwrap();
        assert_eq!(builds.len(), 1, "expected exactly one collaborator");
        builds[0].clone()
    }
}

#[async_trait]
impl GraphBackend for RecordingBackend {
    type Graph = MockGraph;

    async fn download(&self, graph: &AutomaticallyRetrievedGraph) -> anyhow::Result<()> {
        if self.fail_download {
            return Err(anyhow::anyhow!("connection refused"));
        }
        self.stages
            .lock()
            .unwrap()
            .push(("download", edge_list_exists(graph)));
        self.downloads.lock().unwrap().push(graph.clone());
        Ok(())
    }

    async fn build(&self, graph: &AutomaticallyRetrievedGraph) -> anyhow::Result<MockGraph> {
        self.stages
            .lock()
            .unwrap()
            .push(("build", edge_list_exists(graph)));
        self.builds.lock().unwrap().push(graph.clone());
        Ok(MockGraph {
            name: graph.name().to_string(),
            unique_edges: self.unique_edges,
            enabled: false,
        })
    }
}

fn isolated_options() -> RetrievalOptions {
    // Keep the tests independent of a GRAPH_CACHE_DIR set on the host.
    RetrievalOptions::new().cache_sys_var("GRAPH_CATALOG_TEST_UNSET_CACHE")
}

#[tokio::test]
async fn test_accessor_with_defaults_constructs_one_collaborator() {
    let backend = RecordingBackend::with_edges(10);

    let graph = kghub::kg_microbe(&backend, isolated_options()).await.unwrap();

    assert_eq!(graph.name, "KGMicrobe");
    assert_eq!(backend.downloads.lock().unwrap().len(), 1);

    let plan = backend.single_build();
    assert_eq!(plan.name(), "KGMicrobe");
    assert_eq!(plan.dataset(), "kghub");
    assert_eq!(plan.version(), "current");
    assert!(!plan.directed());
    assert_eq!(plan.verbose(), 2);
    assert!(plan.cache_path().is_none());
    assert!(plan.additional_graph_kwargs().is_empty());
    assert_eq!(
        plan.cache_directory(),
        plan.entry()
            .default_cache_path()
            .join("KGMicrobe")
            .join("current")
    );
}

#[tokio::test]
async fn test_accessor_returns_backend_graph() {
    let backend = RecordingBackend::with_edges(42);

    let graph = kghub::kg_onto_ml(&backend, isolated_options().preprocess(Preprocess::Never))
        .await
        .unwrap_or_else(|e| panic!("retrieval failed: {}", e));

    assert_eq!(
        graph,
        MockGraph {
            name: "KGOntoML".to_string(),
            unique_edges: 42,
            enabled: true,
        }
    );
}

#[tokio::test]
async fn test_overrides_are_forwarded_unchanged() {
    let backend = RecordingBackend::with_edges(10);
    let options = RetrievalOptions::new()
        .directed(true)
        .verbose(0)
        .cache_path("/srv/graphs")
        .graph_kwarg("edge_list_separator", ",")
        .graph_kwarg("nodes_number", 19_000);

    string::homo_sapiens(&backend, options.clone()).await.unwrap();

    let plan = backend.single_build();
    assert_eq!(plan.dataset(), "string");
    assert!(plan.directed());
    assert_eq!(plan.verbose(), 0);
    assert_eq!(plan.cache_path(), Some(PathBuf::from("/srv/graphs").as_path()));
    assert_eq!(plan.additional_graph_kwargs(), &options.additional_graph_kwargs);
    assert_eq!(plan.options(), &options);
    assert_eq!(
        plan.cache_directory(),
        PathBuf::from("/srv/graphs/string/HomoSapiens/links.v11.5")
    );
}

#[tokio::test]
async fn test_every_repository_accessor_uses_its_dataset_tag() {
    let backend = RecordingBackend::with_edges(1);
    let options = isolated_options().preprocess(Preprocess::Never);

    kgobo::mondo(&backend, options.clone()).await.unwrap();
    zenodo::wiki_link_it(&backend, options.clone()).await.unwrap();
    string::bacillus_sp_unc438cl73tsus30(&backend, options.clone())
        .await
        .unwrap();

    let tags: Vec<&str> = backend
        .builds
        .lock()
        .unwrap()
        .iter()
        .map(|plan| plan.dataset())
        .collect();
    assert_eq!(tags, vec!["kgobo", "zenodo", "string"]);
}

#[tokio::test]
async fn test_version_override() {
    let backend = RecordingBackend::with_edges(1);

    kghub::kg_covid19(&backend, isolated_options().version("20210101"))
        .await
        .unwrap();
    assert_eq!(backend.single_build().version(), "20210101");

    let result = kghub::kg_covid19(&backend, isolated_options().version("19700101")).await;
    assert!(matches!(result, Err(CatalogError::UnknownVersion { .. })));
}

#[tokio::test]
async fn test_tradeoffs_respect_threshold_and_flag() {
    let large = RecordingBackend::with_edges(TRADEOFFS_EDGES_THRESHOLD);
    let graph = kghub::eco_kg(&large, isolated_options()).await.unwrap();
    assert!(!graph.enabled);

    let small = RecordingBackend::with_edges(TRADEOFFS_EDGES_THRESHOLD - 1);
    let graph = kghub::eco_kg(&small, isolated_options().auto_enable_tradeoffs(false))
        .await
        .unwrap();
    assert!(!graph.enabled);
}

#[tokio::test]
async fn test_backend_failures_are_wrapped() {
    let backend = RecordingBackend {
        fail_download: true,
        ..Default::default()
    };

    let result = kghub::kg_idg(&backend, isolated_options()).await;

    match result {
        Err(CatalogError::Backend(error)) => assert!(error.to_string().contains("refused")),
        other => panic!("Expected backend error, got {:?}", other.map(|g| g.name)),
    }
    assert!(backend.builds.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_graph_never_reaches_backend() {
    let backend = RecordingBackend::default();

    let result = retrieve_graph(&backend, "Coraa", Repository::Linqs, isolated_options()).await;

    match result {
        Err(CatalogError::UnknownGraph { suggestion, .. }) => {
            assert_eq!(suggestion.as_deref(), Some("Cora"))
        }
        other => panic!("Expected UnknownGraph, got {:?}", other.map(|g| g.name)),
    }
    assert!(backend.downloads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_callbacks_run_between_download_and_build() {
    let dir = tempfile::tempdir().unwrap();
    let options = RetrievalOptions::new()
        .cache_path(dir.path())
        .preprocess(Preprocess::Never);
    let plan = AutomaticallyRetrievedGraph::new("Cora", Repository::Linqs, options).unwrap();

    let raw = plan.cache_directory().join("cora/cora");
    std::fs::create_dir_all(&raw).unwrap();
    std::fs::write(raw.join("cora.cites"), "1\t2\n").unwrap();
    std::fs::write(raw.join("cora.content"), "1\t1\tA\n2\t0\tB\n").unwrap();

    let backend = RecordingBackend::with_edges(2);
    plan.retrieve(&backend).await.unwrap();

    assert_eq!(
        *backend.stages.lock().unwrap(),
        vec![("download", false), ("build", true)]
    );

    let edges = std::fs::read_to_string(plan.cache_directory().join("edges.tsv")).unwrap();
    assert_eq!(
        edges,
        "subject\tobject\tedge_type\n1\t2\tPaper2Paper\n1\tword_0\tPaper2Word\n"
    );
    assert_eq!(plan.adjusted_path("node_path"), Some(plan.cache_directory().join("nodes.tsv")));
}

#[test]
fn test_graph_arguments_merge_and_edge_type_filter() {
    let options = isolated_options().graph_kwarg("edge_path", "custom.tsv");
    let plan = AutomaticallyRetrievedGraph::new("Cora", Repository::Linqs, options).unwrap();
    let arguments = plan.graph_arguments();
    assert_eq!(arguments["edge_path"], json!("custom.tsv"));
    assert!(arguments.contains_key("edge_list_edge_types_column"));

    let plan = AutomaticallyRetrievedGraph::new(
        "Cora",
        Repository::Linqs,
        isolated_options().load_edge_types(false),
    )
    .unwrap();
    assert!(!plan
        .graph_arguments()
        .keys()
        .any(|key| key.contains("edge_type")));
}

#[test]
fn test_preprocessed_paths() {
    let options = isolated_options().cache_path("cache").directed(true);
    let plan = AutomaticallyRetrievedGraph::new("KGIDG", Repository::KgHub, options).unwrap();

    let root = PathBuf::from("cache/kghub/KGIDG/current/preprocessed/directed")
        .join(plan.instance_hash());
    assert_eq!(plan.preprocessed_directory(), root);
    assert_eq!(plan.preprocessed_nodes_path(), root.join("nodes.tsv"));
    assert_eq!(plan.preprocessed_edges_path(), root.join("edges.tsv"));
    assert_eq!(plan.preprocessed_node_types_path(), root.join("node_types.tsv"));
    assert_eq!(plan.preprocessed_edge_types_path(), root.join("edge_types.tsv"));
    assert_eq!(plan.preprocessed_metadata_path(), root.join("metadata.json"));
}

#[test]
fn test_preprocessed_directory_depends_on_loaded_arguments() {
    let directory = |options: RetrievalOptions| {
        AutomaticallyRetrievedGraph::new("Cora", Repository::Linqs, options)
            .unwrap()
            .preprocessed_directory()
    };

    let default = directory(isolated_options());
    assert_eq!(default, directory(isolated_options()));
    assert_ne!(
        default,
        directory(
            isolated_options()
                .load_edge_types(false)
                .graph_kwarg("edge_path", "other.tsv")
        )
    );
    assert_ne!(default, directory(isolated_options().hash_seed("42")));
    assert_ne!(default, directory(isolated_options().load_node_types(false)));
    assert!(default.starts_with("graphs/linqs/Cora/latest/preprocessed/undirected"));
}

#[tokio::test]
async fn test_disabled_cache_clears_preprocessed_lists() {
    let dir = tempfile::tempdir().unwrap();
    let make = |cache: bool| {
        let options = RetrievalOptions::new()
            .cache_path(dir.path())
            .preprocess(Preprocess::Never)
            .cache(cache);
        AutomaticallyRetrievedGraph::new("KGIDG", Repository::KgHub, options).unwrap()
    };

    let cached = make(true);
    std::fs::create_dir_all(cached.preprocessed_directory()).unwrap();
    std::fs::write(cached.preprocessed_edges_path(), "stale").unwrap();

    let backend = RecordingBackend::with_edges(1);
    cached.retrieve(&backend).await.unwrap();
    assert!(cached.preprocessed_edges_path().exists());

    let uncached = make(false);
    assert_eq!(uncached.preprocessed_directory(), cached.preprocessed_directory());
    uncached.retrieve(&backend).await.unwrap();
    assert!(!uncached.preprocessed_directory().exists());
}

#[test]
fn test_instance_hash_is_stable_and_seeded() {
    let make = |options: RetrievalOptions| {
        AutomaticallyRetrievedGraph::new("CiteSeer", Repository::Linqs, options)
            .unwrap()
            .instance_hash()
    };

    let first = make(isolated_options());
    assert_eq!(first.len(), 64);
    assert_eq!(first, make(isolated_options()));
    assert_ne!(first, make(isolated_options().hash_seed("42")));
    assert_ne!(first, make(isolated_options().graph_kwarg("nodes_number", 1)));
}

#[test]
fn test_shared_backend_across_threads() {
    let backend = Arc::new(RecordingBackend::with_edges(3));
    let runtime = tokio::runtime::Runtime::new().unwrap();

    runtime.block_on(async {
        let handles: Vec<_> = ["KGMicrobe", "KGIDG", "EcoKG"]
            .into_iter()
            .map(|name| {
                let backend = Arc::clone(&backend);
                tokio::spawn(async move {
                    retrieve_graph(backend.as_ref(), name, Repository::KgHub, isolated_options())
                        .await
                        .map(|graph| graph.name)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.await.unwrap().is_ok());
        }
    });

    assert_eq!(backend.builds.lock().unwrap().len(), 3);
}
