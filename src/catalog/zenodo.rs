//! Graphs deposited on Zenodo.
//!
//! The WikiLink rows hold one yearly snapshot of a Wikipedia edition per
//! version, taken on March 1st.

use super::Repository;

const WIKILINK_CITATION: &str = r#"@inproceedings{consonni2019wikilinkgraphs,
  title={WikiLinkGraphs: a complete, longitudinal and multi-language dataset of the Wikipedia link networks},
  author={Consonni, Cristian and Laniado, David and Montresor, Alberto},
  booktitle={Proceedings of the International AAAI Conference on Web and Social Media},
  volume={13},
  pages={598--607},
  year={2019}
}"#;

graph_catalog! {
    repository: Repository::Zenodo;

    /// Retrieve the WikiLink graph of the Italian Wikipedia.
    wiki_link_it => {
        name: "WikiLinkIT",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the Italian Wikipedia.",
        citation: WIKILINK_CITATION,
    }

    /// Retrieve the WikiLink graph of the French Wikipedia.
    wiki_link_fr => {
        name: "WikiLinkFR",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the French Wikipedia.",
        citation: WIKILINK_CITATION,
    }

    /// Retrieve the GIANT-TN tissue-naive gene interaction network.
    giant_tn => {
        name: "GiantTN",
        versions: ["latest"],
        default_version: "latest",
        description: "GIANT-TN: tissue-naive functional gene interaction network used for network-based gene classification.",
        citation: r#"@article{liu2020supervised,
  title={Supervised learning is an accurate method for network-based gene classification},
  author={Liu, Renming and Mancuso, Christopher A and Yannakopoulos, Anna and Johnson, Kayla A and Krishnan, Arjun},
  journal={Bioinformatics},
  volume={36},
  number={11},
  pages={3457--3465},
  year={2020},
  publisher={Oxford University Press}
}"#,
    }

    /// Retrieve the WikiLink graph of the German Wikipedia.
    wiki_link_de => {
        name: "WikiLinkDE",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the German Wikipedia.",
        citation: WIKILINK_CITATION,
    }

    /// Retrieve the WikiLink graph of the Dutch Wikipedia.
    wiki_link_nl => {
        name: "WikiLinkNL",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the Dutch Wikipedia.",
        citation: WIKILINK_CITATION,
    }

    /// Retrieve the WikiLink graph of the Swedish Wikipedia.
    wiki_link_sv => {
        name: "WikiLinkSV",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the Swedish Wikipedia.",
        citation: WIKILINK_CITATION,
    }

    /// Retrieve the WikiLink graph of the Polish Wikipedia.
    wiki_link_pl => {
        name: "WikiLinkPL",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the Polish Wikipedia.",
        citation: WIKILINK_CITATION,
    }

    /// Retrieve the WikiLink graph of the Spanish Wikipedia.
    wiki_link_es => {
        name: "WikiLinkES",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the Spanish Wikipedia.",
        citation: WIKILINK_CITATION,
    }

    /// Retrieve the WikiLink graph of the English Wikipedia.
    wiki_link_en => {
        name: "WikiLinkEN",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the English Wikipedia.",
        citation: WIKILINK_CITATION,
    }

    /// Retrieve the WikiLink graph of the Russian Wikipedia.
    wiki_link_ru => {
        name: "WikiLinkRU",
        versions: [
            "2001", "2002", "2003", "2004", "2005", "2006", "2007", "2008", "2009",
            "2010", "2011", "2012", "2013", "2014", "2015", "2016", "2017", "2018",
        ],
        default_version: "2018",
        description: "WikiLinkGraphs snapshot of the links between articles of the Russian Wikipedia.",
        citation: WIKILINK_CITATION,
    }
}
