//! Graphs mirrored from the Network Data Repository.
//!
//! The repository publishes a single release of each graph, cataloged as
//! `latest`.

use super::{ComponentsSummary, GraphSummary, Repository};

const NETWORK_REPOSITORY_CITATION: &str = r#"@inproceedings{nr,
  title={The Network Data Repository with Interactive Graph Analytics and Visualization},
  author={Ryan A. Rossi and Nesreen K. Ahmed},
  booktitle={AAAI},
  url={http://networkrepository.com},
  year={2015}
}"#;

const fn snapshot(
    nodes_number: u64,
    edges_number: u64,
    components: ComponentsSummary,
    top_degree_nodes: &'static [(&'static str, u64)],
) -> GraphSummary {
    GraphSummary {
        nodes_number,
        edges_number,
        directed: false,
        components: Some(components),
        top_degree_nodes,
    }
}

const fn connected(nodes_number: u64) -> ComponentsSummary {
    ComponentsSummary {
        components_number: 1,
        largest_component_size: nodes_number,
        smallest_component_size: nodes_number,
        singleton_nodes_number: 0,
    }
}

graph_catalog! {
    repository: Repository::NetworkRepository;

    /// Retrieve the `rt-retweet` graph.
    rt_retweet => {
        name: "RtRetweet",
        versions: ["latest"],
        default_version: "latest",
        description: "rt-retweet: Retweet network of political hashtags on Twitter.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            96,
            117,
            connected(96),
            &[
                ("54", 17),
                ("45", 11),
                ("72", 9),
                ("89", 9),
                ("93", 8),
            ],
        ),
    }

    /// Retrieve the `rt-retweet-crawl` graph.
    rt_retweet_crawl => {
        name: "RtRetweetCrawl",
        versions: ["latest"],
        default_version: "latest",
        description: "rt-retweet-crawl: Large crawl of Twitter retweet interactions.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            1_112_702,
            2_278_852,
            connected(1_112_702),
            &[
                ("508794", 5_070),
                ("27351", 4_634),
                ("390165", 4_342),
                ("208853", 1_673),
                ("1095919", 1_658),
            ],
        ),
    }

    /// Retrieve the `socfb-Auburn71` graph.
    socfb_auburn71 => {
        name: "SocfbAuburn71",
        versions: ["latest"],
        default_version: "latest",
        description: "socfb-Auburn71: Facebook friendship network of Auburn University.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            18_448,
            973_918,
            connected(18_448),
            &[
                ("5472", 5_160),
                ("10626", 3_439),
                ("14497", 3_267),
                ("12499", 2_857),
                ("7194", 2_495),
            ],
        ),
    }

    /// Retrieve the `socfb-Bucknell39` graph.
    socfb_bucknell39 => {
        name: "SocfbBucknell39",
        versions: ["latest"],
        default_version: "latest",
        description: "socfb-Bucknell39: Facebook friendship network of Bucknell University.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            3_826,
            158_864,
            ComponentsSummary {
                components_number: 2,
                largest_component_size: 3_824,
                smallest_component_size: 2,
                singleton_nodes_number: 0,
            },
            &[
                ("2874", 506),
                ("572", 429),
                ("534", 417),
                ("2025", 405),
                ("865", 399),
            ],
        ),
    }

    /// Retrieve the `socfb-UCLA` graph.
    socfb_ucla => {
        name: "SocfbUcla",
        versions: ["latest"],
        default_version: "latest",
        description: "socfb-UCLA: Facebook friendship network of the University of California, Los Angeles.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            20_453,
            747_604,
            connected(20_453),
            &[
                ("715", 1_180),
                ("8866", 868),
                ("1951", 831),
                ("384", 795),
                ("12100", 795),
            ],
        ),
    }

    /// Retrieve the `socfb-Wellesley22` graph.
    socfb_wellesley22 => {
        name: "SocfbWellesley22",
        versions: ["latest"],
        default_version: "latest",
        description: "socfb-Wellesley22: Facebook friendship network of Wellesley College.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            2_970,
            94_899,
            connected(2_970),
            &[
                ("157", 746),
                ("2958", 403),
                ("1136", 394),
                ("1731", 385),
                ("2659", 383),
            ],
        ),
    }

    /// Retrieve the `tech-RL-caida` graph.
    tech_rl_caida => {
        name: "TechRlCaida",
        versions: ["latest"],
        default_version: "latest",
        description: "tech-RL-caida: Router level internet topology collected by CAIDA.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            190_914,
            607_610,
            connected(190_914),
            &[
                ("1731", 1_071),
                ("8414", 841),
                ("1301", 802),
                ("7", 780),
                ("867", 742),
            ],
        ),
    }

    /// Retrieve the `web-indochina-2004` graph.
    web_indochina2004 => {
        name: "WebIndochina2004",
        versions: ["latest"],
        default_version: "latest",
        description: "web-indochina-2004: Hyperlink graph of a crawl of the Indochina web domains.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            11_358,
            47_606,
            connected(11_358),
            &[
                ("545", 199),
                ("7429", 181),
                ("11322", 161),
                ("543", 154),
                ("7416", 135),
            ],
        ),
    }

    /// Retrieve the `web-indochina-2004-all` graph.
    web_indochina2004_all => {
        name: "WebIndochina2004All",
        versions: ["latest"],
        default_version: "latest",
        description: "web-indochina-2004-all: Complete hyperlink graph of the 2004 crawl of the Indochina web domains.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            7_414_768,
            153_487_303,
            ComponentsSummary {
                components_number: 197,
                largest_component_size: 7_320_539,
                smallest_component_size: 1,
                singleton_nodes_number: 10,
            },
            &[
                ("7030320", 256_425),
                ("7188998", 179_322),
                ("7188997", 178_021),
                ("7188996", 176_801),
                ("6968455", 154_370),
            ],
        ),
    }

    /// Retrieve the `web-sk-2005-all` graph.
    web_sk2005_all => {
        name: "WebSk2005All",
        versions: ["latest"],
        default_version: "latest",
        description: "web-sk-2005-all: Complete hyperlink graph of the 2005 crawl of the .sk web domain.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            50_636_073,
            1_829_182_983,
            ComponentsSummary {
                components_number: 45,
                largest_component_size: 50_634_118,
                smallest_component_size: 1,
                singleton_nodes_number: 14,
            },
            &[
                ("42265166", 8_563_817),
                ("17866473", 2_874_442),
                ("29511208", 2_466_089),
                ("50284701", 1_582_409),
                ("48932213", 1_367_113),
            ],
        ),
    }

    /// Retrieve the `web-uk-2002-all` graph.
    web_uk2002_all => {
        name: "WebUk2002All",
        versions: ["latest"],
        default_version: "latest",
        description: "web-uk-2002-all: Complete hyperlink graph of the 2002 crawl of the .uk web domain.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            18_484_117,
            267_657_357,
            ComponentsSummary {
                components_number: 1_990,
                largest_component_size: 18_459_128,
                smallest_component_size: 1,
                singleton_nodes_number: 931,
            },
            &[
                ("17159800", 194_955),
                ("13118356", 102_239),
                ("15237350", 83_861),
                ("8504955", 73_231),
                ("6748292", 41_933),
            ],
        ),
    }

    /// Retrieve the `web-uk-2005` graph.
    web_uk2005 => {
        name: "WebUk2005",
        versions: ["latest"],
        default_version: "latest",
        description: "web-uk-2005: Hyperlink graph of a 2005 crawl of the .uk web domain.",
        citation: NETWORK_REPOSITORY_CITATION,
        summary: snapshot(
            129_632,
            11_744_049,
            connected(129_632),
            &[
                ("86952", 850),
                ("101504", 500),
                ("83192", 500),
                ("102003", 499),
                ("102002", 499),
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_row_has_a_snapshot() {
        for entry in ENTRIES {
            let summary = entry.summary.unwrap();
            let components = summary.components.unwrap();
            assert!(components.largest_component_size <= summary.nodes_number);
            assert!(components.singleton_nodes_number < components.components_number);
            assert_eq!(summary.top_degree_nodes.len(), 5, "{}", entry.name);
        }
    }

    #[test]
    fn test_report_of_connected_graph() {
        let entry = ENTRIES.iter().find(|entry| entry.name == "RtRetweet").unwrap();
        let report = entry.report().unwrap();

        assert!(report.starts_with("The undirected graph RtRetweet has 96 nodes and 117 edges"));
        assert!(report.contains("The graph is connected"));
        assert!(report.ends_with("93 (degree 8)."));
    }

    #[test]
    fn test_report_counts_disconnected_nodes() {
        let entry = ENTRIES
            .iter()
            .find(|entry| entry.name == "WebUk2002All")
            .unwrap();
        let report = entry.report().unwrap();

        assert!(report.contains(
            "The graph contains 1.99K connected components (of which 931 are disconnected nodes)"
        ));
        assert!(report.contains("the smallest one containing a single node"));
    }
}
