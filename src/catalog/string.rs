//! Protein-protein association networks from the STRING database.
//!
//! Every species is published in the same six flavours, the full
//! association network of release 11.5 being the default.

use super::{ComponentsSummary, GraphSummary, Repository};

const STRING_CITATION: &str = r#"@article{szklarczyk2019string,
  title={STRING v11: protein--protein association networks with increased coverage, supporting functional discovery in genome-wide experimental datasets},
  author={Szklarczyk, Damian and Gable, Annika L and Lyon, David and Junge, Alexander and Wyder, Stefan and Huerta-Cepas, Jaime and Simonovic, Milan and Doncheva, Nadezhda T and Morris, John H and Bork, Peer and others},
  journal={Nucleic acids research},
  volume={47},
  number={D1},
  pages={D607--D613},
  year={2019},
  publisher={Oxford University Press}
}"#;

/// Snapshot of a STRING network, always undirected and free of singletons
const fn snapshot(
    nodes_number: u64,
    edges_number: u64,
    components_number: u64,
    largest_component_size: u64,
    smallest_component_size: u64,
    top_degree_nodes: &'static [(&'static str, u64)],
) -> GraphSummary {
    GraphSummary {
        nodes_number,
        edges_number,
        directed: false,
        components: Some(ComponentsSummary {
            components_number,
            largest_component_size,
            smallest_component_size,
            singleton_nodes_number: 0,
        }),
        top_degree_nodes,
    }
}

graph_catalog! {
    repository: Repository::String;

    /// Retrieve the protein network of Homo sapiens.
    homo_sapiens => {
        name: "HomoSapiens",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Homo sapiens from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Mus musculus.
    mus_musculus => {
        name: "MusMusculus",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Mus musculus from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Rattus norvegicus.
    rattus_norvegicus => {
        name: "RattusNorvegicus",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Rattus norvegicus from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Danio rerio.
    danio_rerio => {
        name: "DanioRerio",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Danio rerio from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Drosophila melanogaster.
    drosophila_melanogaster => {
        name: "DrosophilaMelanogaster",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Drosophila melanogaster from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Caenorhabditis elegans.
    caenorhabditis_elegans => {
        name: "CaenorhabditisElegans",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Caenorhabditis elegans from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Saccharomyces cerevisiae.
    saccharomyces_cerevisiae => {
        name: "SaccharomycesCerevisiae",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Saccharomyces cerevisiae from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Arabidopsis thaliana.
    arabidopsis_thaliana => {
        name: "ArabidopsisThaliana",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Arabidopsis thaliana from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Acholeplasma modicum.
    acholeplasma_modicum => {
        name: "AcholeplasmaModicum",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Acholeplasma modicum from the STRING repository.",
        citation: STRING_CITATION,
        summary: snapshot(1_135, 67_836, 2, 1_132, 3, &[
            ("1408417.JHYB01000002_gene354", 587),
            ("1408417.JHYB01000007_gene1112", 494),
            ("1408417.JHYB01000004_gene848", 461),
            ("1408417.JHYB01000002_gene484", 431),
            ("1408417.JHYB01000004_gene956", 420),
        ]),
    }

    /// Retrieve the protein network of Acinetobacter towneri.
    acinetobacter_towneri => {
        name: "AcinetobacterTowneri",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Acinetobacter towneri from the STRING repository.",
        citation: STRING_CITATION,
        summary: snapshot(2_579, 208_187, 6, 2_568, 2, &[
            ("202956.BBNL01000006_gene1942", 1_001),
            ("202956.BBNL01000017_gene383", 897),
            ("202956.BBNL01000004_gene1484", 848),
            ("202956.BBNL01000001_gene1504", 831),
            ("202956.BBNL01000005_gene2047", 826),
        ]),
    }

    /// Retrieve the protein network of Alicyclobacillus herbarius.
    alicyclobacillus_herbarius => {
        name: "AlicyclobacillusHerbarius",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Alicyclobacillus herbarius from the STRING repository.",
        citation: STRING_CITATION,
        summary: snapshot(3_052, 269_003, 9, 3_034, 2, &[
            ("1120972.AUMH01000004_gene1395", 1_209),
            ("1120972.AUMH01000037_gene785", 1_019),
            ("1120972.AUMH01000001_gene1248", 929),
            ("1120972.AUMH01000026_gene2829", 905),
            ("1120972.AUMH01000025_gene2513", 882),
        ]),
    }

    /// Retrieve the protein network of Bacillus psychrosaccharolyticus.
    bacillus_psychrosaccharolyticus => {
        name: "BacillusPsychrosaccharolyticus",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Bacillus psychrosaccharolyticus from the STRING repository.",
        citation: STRING_CITATION,
        summary: snapshot(4_749, 557_180, 28, 4_686, 2, &[
            ("1174504.AJTN02000257_gene1531", 1_638),
            ("1174504.AJTN02000173_gene3994", 1_381),
            ("1174504.AJTN02000162_gene1587", 1_333),
            ("1174504.AJTN02000155_gene1993", 1_309),
            ("1174504.AJTN02000241_gene4330", 1_296),
        ]),
    }

    /// Retrieve the protein network of Bacillus sp. UNC438CL73TsuS30.
    bacillus_sp_unc438cl73tsus30 => {
        name: "BacillusSp.Unc438cl73tsus30",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Bacillus sp. UNC438CL73TsuS30 from the STRING repository.",
        citation: STRING_CITATION,
    }

    /// Retrieve the protein network of Saccharomonospora glauca.
    saccharomonospora_glauca => {
        name: "SaccharomonosporaGlauca",
        versions: [
            "homology.v11.0", "homology.v11.5", "physical.links.v11.0",
            "physical.links.v11.5", "links.v11.0", "links.v11.5",
        ],
        default_version: "links.v11.5",
        description: "Protein-protein association network of Saccharomonospora glauca from the STRING repository.",
        citation: STRING_CITATION,
        summary: snapshot(4_213, 396_459, 15, 4_179, 2, &[
            ("928724.SacglDRAFT_03059", 1_396),
            ("928724.SacglDRAFT_02904", 1_313),
            ("928724.SacglDRAFT_00581", 1_290),
            ("928724.SacglDRAFT_00798", 1_161),
            ("928724.SacglDRAFT_03529", 1_159),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_share_release_layout() {
        for entry in ENTRIES {
            assert_eq!(entry.versions.len(), 6, "{}", entry.name);
            assert_eq!(entry.default_version, "links.v11.5");
            assert_eq!(entry.citation, Some(STRING_CITATION));
        }
    }

    #[test]
    fn test_snapshot_report() {
        let entry = ENTRIES
            .iter()
            .find(|entry| entry.name == "AcholeplasmaModicum")
            .unwrap();
        let report = entry.report().unwrap();

        assert!(report.starts_with("The undirected graph AcholeplasmaModicum has "));
        assert!(report.contains(" nodes and 67.84K edges"));
        assert!(report.contains("The graph contains 2 connected components"));
        assert!(report.contains("1408417.JHYB01000002_gene354 (degree 587)"));
    }

    #[test]
    fn test_snapshots_are_plausible() {
        for entry in ENTRIES {
            if let Some(summary) = entry.summary {
                let components = summary.components.unwrap();
                assert!(components.largest_component_size <= summary.nodes_number);
                assert!(summary.density() > 0.0 && summary.density() < 1.0);
                assert!(summary.top_degree_nodes.windows(2).all(|w| w[0].1 >= w[1].1));
            }
        }
    }
}
