use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::CallbackArguments;
use crate::error::{CatalogError, Result};

const PUBMED_LABELS: [&str; 3] = [
    "Diabetes Mellitus, Experimental",
    "Diabetes Mellitus Type 1",
    "Diabetes Mellitus Type 2",
];

static PAPER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"paper:(\d+)").unwrap());
static NODE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+label=(\d+)").unwrap());
static WORD_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"w-(\w+)=(\S+)").unwrap());

/// Input and output files of a LINQS conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinqsPaths {
    pub cites_path: PathBuf,
    pub content_path: PathBuf,
    pub node_path: PathBuf,
    pub edge_path: PathBuf,
}

impl LinqsPaths {
    pub fn from_arguments(arguments: &CallbackArguments) -> Result<Self> {
        Ok(Self {
            cites_path: arguments.path("cites_path")?,
            content_path: arguments.path("content_path")?,
            node_path: arguments.path("node_path")?,
            edge_path: arguments.path("edge_path")?,
        })
    }

    fn already_converted(&self) -> bool {
        self.node_path.exists() && self.edge_path.exists()
    }

    fn create_output_directories(&self) -> Result<()> {
        for path in [&self.node_path, &self.edge_path] {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}

fn callback_error(path: &Path, message: impl Into<String>) -> CatalogError {
    CatalogError::Callback {
        path: path.to_path_buf(),
        message: message.into(),
    }
}

fn tsv_reader(path: &Path) -> Result<csv::Reader<fs::File>> {
    Ok(ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?)
}

fn tsv_writer(path: &Path) -> Result<csv::Writer<fs::File>> {
    Ok(WriterBuilder::new().delimiter(b'\t').from_path(path)?)
}

fn record_line(record: &StringRecord) -> u64 {
    record.position().map(|p| p.line()).unwrap_or_default()
}

/// Convert the Cora or CiteSeer incidence matrix into node and edge lists.
///
/// Every content row is `paper, w_0 .. w_n, label`; every cites row is a
/// pair of paper ids. Word columns set to 1 become `Paper2Word` edges
/// towards `word_<i>` nodes, papers only referenced by citations get the
/// `Unknown` node type.
pub fn parse_linqs_incidence_matrix(paths: &LinqsPaths) -> Result<()> {
    if paths.already_converted() {
        debug!(
            "Skipping LINQS conversion, {} already exists",
            paths.edge_path.display()
        );
        return Ok(());
    }
    paths.create_output_directories()?;

    let mut papers: Vec<(String, String, Vec<usize>)> = Vec::new();
    let mut words_number = 0;

    for record in tsv_reader(&paths.content_path)?.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(callback_error(
                &paths.content_path,
                format!("line {} has fewer than two columns", record_line(&record)),
            ));
        }
        let paper = record[0].to_string();
        let label = record[record.len() - 1].to_string();
        let mut words = Vec::new();
        for (word_index, value) in record.iter().skip(1).take(record.len() - 2).enumerate() {
            let flag: u8 = value.trim().parse().map_err(|_| {
                callback_error(
                    &paths.content_path,
                    format!(
                        "line {} has non binary value `{}` in word column {}",
                        record_line(&record),
                        value,
                        word_index
                    ),
                )
            })?;
            if flag == 1 {
                words.push(word_index);
                words_number = words_number.max(word_index + 1);
            }
        }
        papers.push((paper, label, words));
    }

    let mut citations: Vec<(String, String)> = Vec::new();
    for record in tsv_reader(&paths.cites_path)?.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(callback_error(
                &paths.cites_path,
                format!("line {} is not a citation pair", record_line(&record)),
            ));
        }
        citations.push((record[0].to_string(), record[1].to_string()));
    }

    let known_papers: HashSet<&str> = papers.iter().map(|(paper, _, _)| paper.as_str()).collect();
    let unknown_papers: BTreeSet<&str> = citations
        .iter()
        .flat_map(|(subject, object)| [subject.as_str(), object.as_str()])
        .filter(|paper| !known_papers.contains(paper))
        .collect();

    let mut nodes = tsv_writer(&paths.node_path)?;
    nodes.write_record(["id", "node_type"])?;
    for (paper, label, _) in &papers {
        nodes.write_record([paper.as_str(), label.as_str()])?;
    }
    for word_index in 0..words_number {
        nodes.write_record([format!("word_{}", word_index).as_str(), "Word"])?;
    }
    for paper in &unknown_papers {
        nodes.write_record([*paper, "Unknown"])?;
    }
    nodes.flush()?;

    let mut edges = tsv_writer(&paths.edge_path)?;
    edges.write_record(["subject", "object", "edge_type"])?;
    for (subject, object) in &citations {
        edges.write_record([subject.as_str(), object.as_str(), "Paper2Paper"])?;
    }
    for (paper, _, words) in &papers {
        for word_index in words {
            edges.write_record([
                paper.as_str(),
                format!("word_{}", word_index).as_str(),
                "Paper2Word",
            ])?;
        }
    }
    edges.flush()?;

    info!(
        "Converted LINQS incidence matrix: {} papers, {} words, {} citations",
        papers.len(),
        words_number,
        citations.len()
    );

    Ok(())
}

/// Convert the PubMed Diabetes incidence matrix into node and edge lists.
///
/// Both files start with two header lines. Parsing of the content file
/// stops at the first line without exactly one `<id> label=<k>` match.
/// Labels run from 1 to 3, anything else is rejected.
pub fn parse_linqs_pubmed_incidence_matrix(paths: &LinqsPaths) -> Result<()> {
    if paths.already_converted() {
        debug!(
            "Skipping PubMed conversion, {} already exists",
            paths.edge_path.display()
        );
        return Ok(());
    }
    paths.create_output_directories()?;

    let cites = fs::read_to_string(&paths.cites_path)?;
    let content = fs::read_to_string(&paths.content_path)?;

    let mut edges = tsv_writer(&paths.edge_path)?;
    let mut nodes = tsv_writer(&paths.node_path)?;
    edges.write_record(["subject", "object", "edge_type", "weight"])?;
    nodes.write_record(["id", "node_type"])?;

    // The trailing line of the cites file is not a citation.
    let cites_lines: Vec<&str> = cites.split('\n').collect();
    let citation_lines = cites_lines
        .get(2..cites_lines.len().saturating_sub(1))
        .unwrap_or_default();

    let mut citations_number = 0;
    for line in citation_lines {
        let papers: Vec<&str> = PAPER_REGEX
            .captures_iter(line)
            .filter_map(|captures| captures.get(1).map(|m| m.as_str()))
            .collect();
        if let [subject, object] = papers.as_slice() {
            edges.write_record([*subject, *object, "Paper2Paper", ""])?;
            citations_number += 1;
        }
    }

    let mut unique_words: BTreeSet<String> = BTreeSet::new();
    let mut papers_number = 0;
    for (line_number, line) in content.split('\n').enumerate().skip(2) {
        let matches: Vec<(&str, &str)> = NODE_REGEX
            .captures_iter(line)
            .filter_map(|captures| Some((captures.get(1)?.as_str(), captures.get(2)?.as_str())))
            .collect();
        let (paper, label) = match matches.as_slice() {
            [single] => *single,
            _ => break,
        };

        let label = label
            .parse::<usize>()
            .ok()
            .and_then(|label| label.checked_sub(1))
            .and_then(|index| PUBMED_LABELS.get(index))
            .ok_or_else(|| {
                callback_error(
                    &paths.content_path,
                    format!("line {} has unknown label `{}`", line_number + 1, label),
                )
            })?;
        nodes.write_record([paper, *label])?;
        papers_number += 1;

        for captures in WORD_REGEX.captures_iter(line) {
            let (word, weight) = (&captures[1], &captures[2]);
            edges.write_record([paper, word, "Paper2Word", weight])?;
            unique_words.insert(word.to_string());
        }
    }

    for word in &unique_words {
        nodes.write_record([word.as_str(), "Word"])?;
    }

    nodes.flush()?;
    edges.flush()?;

    info!(
        "Converted PubMed incidence matrix: {} papers, {} words, {} citations",
        papers_number,
        unique_words.len(),
        citations_number
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use tempfile::tempdir;

    fn paths_in(root: &Path) -> LinqsPaths {
        LinqsPaths {
            cites_path: root.join("raw/graph.cites"),
            content_path: root.join("raw/graph.content"),
            node_path: root.join("nodes.tsv"),
            edge_path: root.join("edges.tsv"),
        }
    }

    fn write_inputs(paths: &LinqsPaths, cites: &str, content: &str) {
        fs::create_dir_all(paths.cites_path.parent().unwrap()).unwrap();
        fs::write(&paths.cites_path, cites).unwrap();
        fs::write(&paths.content_path, content).unwrap();
    }

    #[test]
    fn test_incidence_matrix_conversion() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        write_inputs(
            &paths,
            "35\t1033\n35\t103482\n99\t35\n",
            "35\t0\t1\t0\tGenetic_Algorithms\n1033\t1\t0\t0\tTheory\n103482\t0\t0\t0\tTheory\n",
        );

        parse_linqs_incidence_matrix(&paths).unwrap();

        let nodes = fs::read_to_string(&paths.node_path).unwrap();
        assert_eq!(
            nodes,
            indoc! {"
                id\tnode_type
                35\tGenetic_Algorithms
                1033\tTheory
                103482\tTheory
                word_0\tWord
                word_1\tWord
                99\tUnknown
            "}
        );

        let edges = fs::read_to_string(&paths.edge_path).unwrap();
        assert_eq!(
            edges,
            indoc! {"
                subject\tobject\tedge_type
                35\t1033\tPaper2Paper
                35\t103482\tPaper2Paper
                99\t35\tPaper2Paper
                35\tword_1\tPaper2Word
                1033\tword_0\tPaper2Word
            "}
        );
    }

    #[test]
    fn test_incidence_matrix_rejects_non_binary_values() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        write_inputs(&paths, "1\t2\n", "1\t0\tx\tTheory\n");

        match parse_linqs_incidence_matrix(&paths) {
            Err(CatalogError::Callback { path, message }) => {
                assert_eq!(path, paths.content_path);
                assert!(message.contains("`x`"));
            }
            other => panic!("Expected callback error, got {:?}", other),
        }
    }

    #[test]
    fn test_existing_outputs_are_kept() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        fs::write(&paths.node_path, "cached nodes").unwrap();
        fs::write(&paths.edge_path, "cached edges").unwrap();

        // Inputs do not exist, so any parsing attempt would fail.
        parse_linqs_incidence_matrix(&paths).unwrap();
        parse_linqs_pubmed_incidence_matrix(&paths).unwrap();

        assert_eq!(fs::read_to_string(&paths.node_path).unwrap(), "cached nodes");
    }

    #[test]
    fn test_pubmed_conversion() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        write_inputs(
            &paths,
            indoc! {"
                DIRECTED\tcites
                NO_FEATURES
                33824\tpaper:19127292\t|\tpaper:17363749
                33825\tpaper:19668377\t|\tpaper:17293876
                broken line
            "},
            indoc! {"
                NODE\tpaper
                cat=1,2,3:label\tnumeric:w-rat:0.0
                12187484\tlabel=1\tw-rat=0.0939\tw-common=0.028\tsummary=w-rat,w-common
                2344352\tlabel=3\tw-rat=0.0234\tsummary=w-rat
                garbage
                999\tlabel=2\tw-late=0.5
            "},
        );

        parse_linqs_pubmed_incidence_matrix(&paths).unwrap();

        let nodes = fs::read_to_string(&paths.node_path).unwrap();
        assert_eq!(
            nodes,
            indoc! {"
                id\tnode_type
                12187484\tDiabetes Mellitus, Experimental
                2344352\tDiabetes Mellitus Type 2
                common\tWord
                rat\tWord
            "}
        );

        let edges = fs::read_to_string(&paths.edge_path).unwrap();
        assert_eq!(
            edges,
            indoc! {"
                subject\tobject\tedge_type\tweight
                19127292\t17363749\tPaper2Paper\t
                19668377\t17293876\tPaper2Paper\t
                12187484\trat\tPaper2Word\t0.0939
                12187484\tcommon\tPaper2Word\t0.028
                2344352\trat\tPaper2Word\t0.0234
            "}
        );
    }

    #[test]
    fn test_pubmed_unknown_label() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        write_inputs(&paths, "a\nb\n", "h1\nh2\n1\tlabel=7\tw-x=1\n");

        assert!(matches!(
            parse_linqs_pubmed_incidence_matrix(&paths),
            Err(CatalogError::Callback { .. })
        ));
    }

    #[test]
    fn test_pubmed_labels_are_one_based() {
        let dir = tempdir().unwrap();
        let paths = paths_in(dir.path());
        write_inputs(&paths, "a\nb\n", "h1\nh2\n1\tlabel=0\tw-x=1\n");

        match parse_linqs_pubmed_incidence_matrix(&paths) {
            Err(CatalogError::Callback { message, .. }) => {
                assert_eq!(message, "line 3 has unknown label `0`")
            }
            other => panic!("Expected callback error, got {:?}", other),
        }
    }
}
