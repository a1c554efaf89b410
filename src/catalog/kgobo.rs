//! OBO Foundry ontologies converted to graphs by KG-OBO.
//!
//! Release tags are the upstream ones, which follow no common format.

use super::Repository;

graph_catalog! {
    repository: Repository::KgObo;

    /// Retrieve the Protein Modification ontology.
    r#mod => {
        name: "MOD",
        versions: ["1.031.4", "10-03-2021-14-36"],
        default_version: "10-03-2021-14-36",
        description: "Protein modification ontology.",
    }

    /// Retrieve the Drosophila gross anatomy ontology.
    fbbt => {
        name: "FBBT",
        versions: ["2022-02-24", "2021-09-01", "2021-10-14", "2021-12-09", "2022-01-27"],
        default_version: "2022-01-27",
        description: "Drosophila gross anatomy ontology.",
    }

    /// Retrieve the BRENDA tissue ontology.
    bto => {
        name: "BTO",
        versions: ["2021-10-26", "2021-04-27"],
        default_version: "2021-04-27",
        description: "BRENDA tissue and enzyme source ontology.",
    }

    /// Retrieve the Chemical Methods Ontology.
    chmo => {
        name: "CHMO",
        versions: ["2022-02-17", "no_version"],
        default_version: "no_version",
        description: "Chemical methods ontology.",
    }

    /// Retrieve the Ontology of Biological Attributes.
    oba => {
        name: "OBA",
        versions: ["2022-01-19", "13-11-2015-10-21", "2021-12-03"],
        default_version: "2021-12-03",
        description: "Ontology of biological attributes.",
    }

    pso => {
        name: "PSO",
        versions: ["2020-05-19"],
        default_version: "2020-05-19",
        description: "Plant stress ontology.",
    }

    ogsf => {
        name: "OGSF",
        versions: ["11-22-2014"],
        default_version: "11-22-2014",
        description: "Ontology of genetic susceptibility factor.",
    }

    mco => {
        name: "MCO",
        versions: ["2019-05-15"],
        default_version: "2019-05-15",
        description: "Microbial conditions ontology.",
    }

    opmi => {
        name: "OPMI",
        versions: ["Vision-Release--1.0.130"],
        default_version: "Vision-Release--1.0.130",
        description: "Ontology of precision medicine and investigation.",
    }

    /// Retrieve the Drosophila development ontology.
    fbdv => {
        name: "FBDV",
        versions: ["2022-02-25", "2021-09-01", "2021-10-13", "2021-12-06", "2022-01-24"],
        default_version: "2022-01-24",
        description: "Drosophila development ontology.",
    }

    ceph => {
        name: "CEPH",
        versions: ["2016-01-12"],
        default_version: "2016-01-12",
        description: "Cephalopod anatomy ontology.",
    }

    mpath => {
        name: "MPATH",
        versions: ["2020-05-19"],
        default_version: "2020-05-19",
        description: "Mouse pathology ontology.",
    }

    spd => {
        name: "SPD",
        versions: ["1.0"],
        default_version: "1.0",
        description: "Spider anatomy ontology.",
    }

    omit => {
        name: "OMIT",
        versions: ["dev"],
        default_version: "dev",
        description: "Ontology for microRNA targets.",
    }

    /// Retrieve the Chemical Entities of Biological Interest ontology.
    chebi => {
        name: "CHEBI",
        versions: ["209", "203", "204", "205", "206", "207", "208"],
        default_version: "208",
        description: "Chemical entities of biological interest.",
    }

    /// Retrieve the Uberon multi-species anatomy ontology.
    uberon => {
        name: "UBERON",
        versions: ["2022-02-21", "2021-10-01", "2021-11-28"],
        default_version: "2021-11-28",
        description: "Uberon multi-species anatomy ontology.",
    }

    /// Retrieve the Mondo disease ontology.
    mondo => {
        name: "MONDO",
        versions: [
            "2022-03-01", "2021-09-01", "2021-10-01", "2021-11-01",
            "2021-12-01", "2021-12-30", "2022-02-04",
        ],
        default_version: "2022-02-04",
        description: "Mondo disease ontology.",
    }

    /// Retrieve the Gene Ontology.
    go => {
        name: "GO",
        versions: ["2022-03-10", "2021-09-01", "2021-10-26", "2021-11-16", "2021-12-15", "2022-01-13"],
        default_version: "2022-01-13",
        description: "Gene ontology.",
    }

    /// Retrieve the Human Phenotype Ontology.
    hp => {
        name: "HP",
        versions: ["2022-02-14", "2021-08-02", "2021-10-10"],
        default_version: "2021-10-10",
        description: "Human phenotype ontology.",
    }
}
