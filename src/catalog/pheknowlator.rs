//! The PheKnowLator biomedical knowledge graph.
//!
//! Each release is built in several flavours: instance or subclass
//! construction, relations only or with inverse relations, and OWL or
//! OWL-NETS output, the latter optionally purified.

use super::Repository;

graph_catalog! {
    repository: Repository::PheKnowLatorKg;

    /// Retrieve the PheKnowLator knowledge graph.
    ///
    /// Defaults to the purified OWL-NETS subclass build with relations only
    /// of the 2021-10-18 release.
    pheknowlator => {
        name: "PheKnowLator",
        versions: [
            "v2.0.0-2020-5-10.instance-inverseRelations-owl",
            "v2.0.0-2020-5-10.instance-inverseRelations-owlnets",
            "v2.0.0-2020-5-10.instance-relationsOnly-owl",
            "v2.0.0-2020-5-10.instance-relationsOnly-owlnets",
            "v2.0.0-2020-5-10.subclass-inverseRelations-owl",
            "v2.0.0-2020-5-10.subclass-inverseRelations-owlnets",
            "v2.0.0-2020-5-10.subclass-relationsOnly-owl",
            "v2.0.0-2020-5-10.subclass-relationsOnly-owlnets",
            "v2.0.0-2021-1-25.instance-inverseRelations-owl",
            "v2.0.0-2021-1-25.instance-inverseRelations-owlnets",
            "v2.0.0-2021-1-25.instance-inverseRelations-owlnets-purified",
            "v2.0.0-2021-1-25.instance-relationsOnly-owl",
            "v2.0.0-2021-1-25.instance-relationsOnly-owlnets",
            "v2.0.0-2021-1-25.instance-relationsOnly-owlnets-purified",
            "v2.0.0-2021-1-25.subclass-inverseRelations-owl",
            "v2.0.0-2021-1-25.subclass-inverseRelations-owlnets",
            "v2.0.0-2021-1-25.subclass-inverseRelations-owlnets-purified",
            "v2.0.0-2021-1-25.subclass-relationsOnly-owl",
            "v2.0.0-2021-1-25.subclass-relationsOnly-owlnets",
            "v2.0.0-2021-1-25.subclass-relationsOnly-owlnets-purified",
            "v2.0.0-2021-2-11.instance-inverseRelations-owl",
            "v2.0.0-2021-2-11.instance-inverseRelations-owlnets",
            "v2.0.0-2021-2-11.instance-inverseRelations-owlnets-purified",
            "v2.0.0-2021-2-11.instance-relationsOnly-owl",
            "v2.0.0-2021-2-11.instance-relationsOnly-owlnets",
            "v2.0.0-2021-2-11.instance-relationsOnly-owlnets-purified",
            "v2.0.0-2021-2-11.subclass-inverseRelations-owl",
            "v2.0.0-2021-2-11.subclass-inverseRelations-owlnets",
            "v2.0.0-2021-2-11.subclass-inverseRelations-owlnets-purified",
            "v2.0.0-2021-2-11.subclass-relationsOnly-owl",
            "v2.0.0-2021-2-11.subclass-relationsOnly-owlnets",
            "v2.0.0-2021-2-11.subclass-relationsOnly-owlnets-purified",
            "v2.1.0-2021-5-01.instance-inverseRelations-owl",
            "v2.1.0-2021-5-01.instance-inverseRelations-owlnets",
            "v2.1.0-2021-5-01.instance-inverseRelations-owlnets-purified",
            "v2.1.0-2021-5-01.instance-relationsOnly-owl",
            "v2.1.0-2021-5-01.instance-relationsOnly-owlnets",
            "v2.1.0-2021-5-01.instance-relationsOnly-owlnets-purified",
            "v2.1.0-2021-5-01.subclass-inverseRelations-owl",
            "v2.1.0-2021-5-01.subclass-inverseRelations-owlnets",
            "v2.1.0-2021-5-01.subclass-inverseRelations-owlnets-purified",
            "v2.1.0-2021-5-01.subclass-relationsOnly-owl",
            "v2.1.0-2021-5-01.subclass-relationsOnly-owlnets",
            "v2.1.0-2021-5-01.subclass-relationsOnly-owlnets-purified",
            "v2.1.0-2021-6-01.instance-inverseRelations-owl",
            "v2.1.0-2021-6-01.instance-inverseRelations-owlnets",
            "v2.1.0-2021-6-01.instance-inverseRelations-owlnets-purified",
            "v2.1.0-2021-6-01.instance-relationsOnly-owl",
            "v2.1.0-2021-6-01.instance-relationsOnly-owlnets",
            "v2.1.0-2021-6-01.instance-relationsOnly-owlnets-purified",
            "v2.1.0-2021-6-01.subclass-inverseRelations-owl",
            "v2.1.0-2021-6-01.subclass-inverseRelations-owlnets",
            "v2.1.0-2021-6-01.subclass-inverseRelations-owlnets-purified",
            "v2.1.0-2021-6-01.subclass-relationsOnly-owl",
            "v2.1.0-2021-6-01.subclass-relationsOnly-owlnets",
            "v2.1.0-2021-6-01.subclass-relationsOnly-owlnets-purified",
            "v2.1.0-2021-7-06.instance-inverseRelations-owl",
            "v2.1.0-2021-7-06.instance-inverseRelations-owlnets",
            "v2.1.0-2021-7-06.instance-inverseRelations-owlnets-purified",
            "v2.1.0-2021-7-06.instance-relationsOnly-owl",
            "v2.1.0-2021-7-06.instance-relationsOnly-owlnets",
            "v2.1.0-2021-7-06.instance-relationsOnly-owlnets-purified",
            "v2.1.0-2021-7-06.subclass-inverseRelations-owl",
            "v2.1.0-2021-7-06.subclass-inverseRelations-owlnets",
            "v2.1.0-2021-7-06.subclass-inverseRelations-owlnets-purified",
            "v2.1.0-2021-7-06.subclass-relationsOnly-owl",
            "v2.1.0-2021-7-06.subclass-relationsOnly-owlnets",
            "v2.1.0-2021-7-06.subclass-relationsOnly-owlnets-purified",
            "v2.1.0-2021-8-01.instance-inverseRelations-owl",
            "v2.1.0-2021-8-01.instance-inverseRelations-owlnets",
            "v2.1.0-2021-8-01.instance-inverseRelations-owlnets-purified",
            "v2.1.0-2021-8-01.instance-relationsOnly-owl",
            "v2.1.0-2021-8-01.instance-relationsOnly-owlnets",
            "v2.1.0-2021-8-01.instance-relationsOnly-owlnets-purified",
            "v2.1.0-2021-8-01.subclass-inverseRelations-owl",
            "v2.1.0-2021-8-01.subclass-inverseRelations-owlnets",
            "v2.1.0-2021-8-01.subclass-inverseRelations-owlnets-purified",
            "v2.1.0-2021-8-01.subclass-relationsOnly-owl",
            "v2.1.0-2021-8-01.subclass-relationsOnly-owlnets",
            "v2.1.0-2021-8-01.subclass-relationsOnly-owlnets-purified",
            "v2.1.0-2021-9-01.instance-inverseRelations-owl",
            "v2.1.0-2021-9-01.instance-inverseRelations-owlnets",
            "v2.1.0-2021-9-01.instance-inverseRelations-owlnets-purified",
            "v2.1.0-2021-9-01.instance-relationsOnly-owl",
            "v2.1.0-2021-9-01.instance-relationsOnly-owlnets",
            "v2.1.0-2021-9-01.instance-relationsOnly-owlnets-purified",
            "v2.1.0-2021-9-01.subclass-inverseRelations-owl",
            "v2.1.0-2021-9-01.subclass-inverseRelations-owlnets",
            "v2.1.0-2021-9-01.subclass-inverseRelations-owlnets-purified",
            "v2.1.0-2021-9-01.subclass-relationsOnly-owl",
            "v2.1.0-2021-9-01.subclass-relationsOnly-owlnets",
            "v2.1.0-2021-9-01.subclass-relationsOnly-owlnets-purified",
            "v3.0.2-2021-1-01.instance-inverseRelations-owl",
            "v3.0.2-2021-1-01.instance-inverseRelations-owlnets",
            "v3.0.2-2021-1-01.instance-inverseRelations-owlnets-purified",
            "v3.0.2-2021-1-01.instance-relationsOnly-owl",
            "v3.0.2-2021-1-01.instance-relationsOnly-owlnets",
            "v3.0.2-2021-1-01.instance-relationsOnly-owlnets-purified",
            "v3.0.2-2021-1-01.subclass-inverseRelations-owl",
            "v3.0.2-2021-1-01.subclass-inverseRelations-owlnets",
            "v3.0.2-2021-1-01.subclass-inverseRelations-owlnets-purified",
            "v3.0.2-2021-1-01.subclass-relationsOnly-owl",
            "v3.0.2-2021-1-01.subclass-relationsOnly-owlnets",
            "v3.0.2-2021-1-01.subclass-relationsOnly-owlnets-purified",
            "v3.0.2-2021-10-18.instance-inverseRelations-owl",
            "v3.0.2-2021-10-18.instance-inverseRelations-owlnets",
            "v3.0.2-2021-10-18.instance-inverseRelations-owlnets-purified",
            "v3.0.2-2021-10-18.instance-relationsOnly-owl",
            "v3.0.2-2021-10-18.instance-relationsOnly-owlnets",
            "v3.0.2-2021-10-18.instance-relationsOnly-owlnets-purified",
            "v3.0.2-2021-10-18.subclass-inverseRelations-owl",
            "v3.0.2-2021-10-18.subclass-inverseRelations-owlnets",
            "v3.0.2-2021-10-18.subclass-inverseRelations-owlnets-purified",
            "v3.0.2-2021-10-18.subclass-relationsOnly-owl",
            "v3.0.2-2021-10-18.subclass-relationsOnly-owlnets",
            "v3.0.2-2021-10-18.subclass-relationsOnly-owlnets-purified",
        ],
        default_version: "v3.0.2-2021-10-18.subclass-relationsOnly-owlnets-purified",
        description: "PheKnowLator: heterogeneous large-scale biomedical knowledge graph built from ontologies and linked open data.",
        citation: r#"@article{callahan2020framework,
  title={A Framework for Automated Construction of Heterogeneous Large-Scale Biomedical Knowledge Graphs},
  author={Callahan, Tiffany J and Tripodi, Ignacio J and Hunter, Lawrence E and Baumgartner, William A},
  journal={bioRxiv},
  year={2020},
  publisher={Cold Spring Harbor Laboratory}
}"#,
    }
}
