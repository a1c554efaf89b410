use serde_json::{json, Value};

use super::GraphEntry;
use crate::error::{CatalogError, Result};

/// Supported listing formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for CatalogFormat {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            _ => Ok(CatalogFormat::Text),
        }
    }
}

/// Render catalog rows in the given format
pub fn format_entries(entries: &[&GraphEntry], format: CatalogFormat) -> Result<String> {
    match format {
        CatalogFormat::Text => Ok(format_text(entries)),
        CatalogFormat::Json => format_json(entries),
        CatalogFormat::Csv => format_csv(entries),
    }
}

fn format_text(entries: &[&GraphEntry]) -> String {
    if entries.is_empty() {
        return "No graphs found".to_string();
    }

    let mut result = String::new();
    for entry in entries {
        result.push_str(&format!(
            "{} ({}) [{}; {} versions]",
            entry.name,
            entry.repository,
            entry.default_version,
            entry.versions.len()
        ));
        if let Some(summary) = &entry.summary {
            result.push_str(&format!(
                " {} nodes, {} edges",
                summary.nodes_number, summary.edges_number
            ));
        }
        result.push('\n');
    }
    result
}

fn format_json(entries: &[&GraphEntry]) -> Result<String> {
    let rows: Vec<Value> = entries
        .iter()
        .map(|entry| {
            let mut row = serde_json::Map::new();
            row.insert("name".to_string(), json!(entry.name));
            row.insert("repository".to_string(), json!(entry.repository));
            row.insert("default_version".to_string(), json!(entry.default_version));
            row.insert("versions".to_string(), json!(entry.versions));
            row.insert("description".to_string(), json!(entry.description));

            if let Some(summary) = &entry.summary {
                row.insert("summary".to_string(), json!(summary));
            }

            Value::Object(row)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&rows)?)
}

fn format_csv(entries: &[&GraphEntry]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "name",
        "repository",
        "default_version",
        "versions",
        "nodes",
        "edges",
    ])?;

    for entry in entries {
        let (nodes, edges) = entry
            .summary
            .map(|summary| {
                (
                    summary.nodes_number.to_string(),
                    summary.edges_number.to_string(),
                )
            })
            .unwrap_or_default();
        writer.write_record([
            entry.name,
            entry.repository.as_str(),
            entry.default_version,
            entry.versions.len().to_string().as_str(),
            nodes.as_str(),
            edges.as_str(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| CatalogError::InvalidArgument(e.to_string()))
}
