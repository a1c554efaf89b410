//! Knowledge graphs built by the KG-Hub projects.

use super::Repository;

graph_catalog! {
    repository: Repository::KgHub;

    /// Retrieve the KG-Microbe knowledge graph.
    kg_microbe => {
        name: "KGMicrobe",
        versions: [
            "20210422", "20210517", "20210608", "20210615",
            "20210617", "20210622", "20210715", "current",
        ],
        default_version: "current",
        description: "KG-Microbe: a reference knowledge-graph and platform for harmonized microbial information.",
        citation: r#"@article{joachimiakkg,
  title={KG-Microbe: a reference knowledge-graph and platform for harmonized microbial information},
  author={Joachimiak, Marcin P and Reese, Justin T and Hegde, Harshad and Cappelletti, Luca and Mungall, Christopher J and Duncan, William D and Thessen, Anne E}
}"#,
    }

    /// Retrieve the KG-OntoML knowledge graph.
    ///
    /// Defaults to the `placeholder` release, the one published first.
    kg_onto_ml => {
        name: "KGOntoML",
        versions: ["20220304", "current", "placeholder"],
        default_version: "placeholder",
        description: "KG-OntoML: ontologies merged for machine learning.",
    }

    /// Retrieve the KG-IDG knowledge graph of the Illuminating the Druggable Genome program.
    kg_idg => {
        name: "KGIDG",
        versions: [
            "20211029", "20211101", "20211112", "20211123", "20211201",
            "20211202", "20211207", "20211210", "20211213", "20211215",
            "20211221", "20211223", "20220101", "20220106", "20220107",
            "20220119", "20220201", "20220203", "20220204", "20220216",
            "20220223", "20220303", "current",
        ],
        default_version: "current",
        description: "KG-IDG: knowledge graph of the Illuminating the Druggable Genome program.",
    }

    /// Retrieve the KG-COVID-19 knowledge graph.
    kg_covid19 => {
        name: "KGCOVID19",
        versions: [
            "20200925", "20200927", "20200929", "20201001", "20201012",
            "20201101", "20201202", "20210101", "20210128", "20210201",
            "20210218", "20210301", "20210412", "20210725", "20210726",
            "20210727", "20210823", "20210902", "20211002", "20211102",
            "20211202", "20220102", "20220202", "20220217", "20220223",
            "20220225", "20220228", "current",
        ],
        default_version: "current",
        description: "KG-COVID-19: a framework to produce customized knowledge graphs for COVID-19 response.",
        citation: r#"@article{reese2021kg,
  title={KG-COVID-19: a framework to produce customized knowledge graphs for COVID-19 response},
  author={Reese, Justin T and Unni, Deepak and Callahan, Tiffany J and Cappelletti, Luca and Ravanmehr, Vida and Carbon, Seth and Shefchek, Kent A and Good, Benjamin M and Balhoff, James P and Fontana, Tommaso and others},
  journal={Patterns},
  volume={2},
  number={1},
  pages={100155},
  year={2021},
  publisher={Elsevier}
}"#,
    }

    /// Retrieve the eco-KG knowledge graph.
    eco_kg => {
        name: "EcoKG",
        versions: ["20211025", "20211102"],
        default_version: "20211102",
        description: "eco-KG: knowledge graph of plant traits and ecological interactions.",
    }
}
