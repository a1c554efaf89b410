//! Citation networks distributed by the LINQS group.
//!
//! The raw archives ship incidence matrices rather than edge lists, so every
//! row declares the callback converting them into `nodes.tsv` and `edges.tsv`.

use super::{ArgumentValue::Str, GraphSummary, Repository};
use crate::callbacks::{Callback, CallbackSpec};

const GETOOR_SEN_CITATION: &str = r#"@incollection{getoor2005link,
  title={Link-based classification},
  author={Getoor, Lise},
  booktitle={Advanced methods for knowledge discovery from complex data},
  pages={189--207},
  year={2005},
  publisher={Springer}
}

@article{sen2008collective,
  title={Collective classification in network data},
  author={Sen, Prithviraj and Namata, Galileo and Bilgic, Mustafa and Getoor, Lise and Galligher, Brian and Eliassi-Rad, Tina},
  journal={AI magazine},
  volume={29},
  number={3},
  pages={93--93},
  year={2008}
}"#;

graph_catalog! {
    repository: Repository::Linqs;

    /// Retrieve the PubMed Diabetes citation network.
    ///
    /// 19717 publications on diabetes classified into one of three classes,
    /// linked by 44338 citations, each described by a TF/IDF weighted word
    /// vector over 500 unique words.
    pub_med_diabetes => {
        name: "PubMedDiabetes",
        versions: ["latest"],
        default_version: "latest",
        description: "The Pubmed Diabetes dataset consists of 19717 scientific publications from PubMed database pertaining to diabetes classified into one of three classes. The citation network consists of 44338 links. Each publication in the dataset is described by a TF/IDF weighted word vector from a dictionary which consists of 500 unique words.",
        citation: r#"@inproceedings{namata2012query,
  title={Query-driven active surveying for collective classification},
  author={Namata, Galileo and London, Ben and Getoor, Lise and Huang, Bert and EDU, UMD},
  booktitle={10th International Workshop on Mining and Learning with Graphs},
  volume={8},
  year={2012}
}"#,
        summary: GraphSummary::counts(19_717, 44_338, false),
        arguments: [
            ("node_path", Str("nodes.tsv")),
            ("nodes_column", Str("id")),
            ("node_list_node_types_column", Str("node_type")),
            ("edge_path", Str("edges.tsv")),
            ("sources_column", Str("subject")),
            ("destinations_column", Str("object")),
            ("edge_list_edge_types_column", Str("edge_type")),
            ("weights_column", Str("weight")),
        ],
        callbacks: [
            CallbackSpec {
                callback: Callback::LinqsPubmedIncidenceMatrix,
                arguments: &[
                    ("cites_path", "Pubmed-Diabetes/Pubmed-Diabetes/data/Pubmed-Diabetes.DIRECTED.cites.tab"),
                    ("content_path", "Pubmed-Diabetes/Pubmed-Diabetes/data/Pubmed-Diabetes.NODE.paper.tab"),
                    ("node_path", "nodes.tsv"),
                    ("edge_path", "edges.tsv"),
                ],
            },
        ],
    }

    /// Retrieve the Cora citation network.
    ///
    /// 2708 publications in seven classes linked by 5429 citations, each
    /// described by a binary word vector over 1433 unique words.
    cora => {
        name: "Cora",
        versions: ["latest"],
        default_version: "latest",
        description: "The Cora dataset consists of 2708 scientific publications classified into one of seven classes. The citation network consists of 5429 links. Each publication in the dataset is described by a 0/1-valued word vector indicating the absence/presence of the corresponding word from the dictionary. The dictionary consists of 1433 unique words.",
        citation: GETOOR_SEN_CITATION,
        summary: GraphSummary::counts(2_708, 5_429, false),
        arguments: [
            ("node_path", Str("nodes.tsv")),
            ("nodes_column", Str("id")),
            ("node_list_node_types_column", Str("node_type")),
            ("edge_path", Str("edges.tsv")),
            ("sources_column", Str("subject")),
            ("destinations_column", Str("object")),
            ("edge_list_edge_types_column", Str("edge_type")),
        ],
        callbacks: [
            CallbackSpec {
                callback: Callback::LinqsIncidenceMatrix,
                arguments: &[
                    ("cites_path", "cora/cora/cora.cites"),
                    ("content_path", "cora/cora/cora.content"),
                    ("node_path", "nodes.tsv"),
                    ("edge_path", "edges.tsv"),
                ],
            },
        ],
    }

    /// Retrieve the CiteSeer citation network.
    ///
    /// 3312 publications in six classes linked by 4732 citations, each
    /// described by a binary word vector over 3703 unique words.
    cite_seer => {
        name: "CiteSeer",
        versions: ["latest"],
        default_version: "latest",
        description: "The CiteSeer dataset consists of 3312 scientific publications classified into one of six classes. The citation network consists of 4732 links. Each publication in the dataset is described by a 0/1-valued word vector indicating the absence/presence of the corresponding word from the dictionary. The dictionary consists of 3703 unique words.",
        citation: GETOOR_SEN_CITATION,
        summary: GraphSummary::counts(3_312, 4_732, false),
        arguments: [
            ("node_path", Str("nodes.tsv")),
            ("nodes_column", Str("id")),
            ("node_list_node_types_column", Str("node_type")),
            ("edge_path", Str("edges.tsv")),
            ("sources_column", Str("subject")),
            ("destinations_column", Str("object")),
            ("edge_list_edge_types_column", Str("edge_type")),
        ],
        callbacks: [
            CallbackSpec {
                callback: Callback::LinqsIncidenceMatrix,
                arguments: &[
                    ("cites_path", "citeseer/citeseer/citeseer.cites"),
                    ("content_path", "citeseer/citeseer/citeseer.content"),
                    ("node_path", "nodes.tsv"),
                    ("edge_path", "edges.tsv"),
                ],
            },
        ],
    }
}
