use serde::Serialize;

/// Connected component statistics captured when the catalog row was recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentsSummary {
    pub components_number: u64,
    pub largest_component_size: u64,
    pub smallest_component_size: u64,
    pub singleton_nodes_number: u64,
}

/// Snapshot statistics of a catalog graph
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GraphSummary {
    pub nodes_number: u64,
    pub edges_number: u64,
    pub directed: bool,
    pub components: Option<ComponentsSummary>,
    pub top_degree_nodes: &'static [(&'static str, u64)],
}

impl GraphSummary {
    /// Summary with only the node and edge counts known
    pub const fn counts(nodes_number: u64, edges_number: u64, directed: bool) -> Self {
        Self {
            nodes_number,
            edges_number,
            directed,
            components: None,
            top_degree_nodes: &[],
        }
    }

    pub fn density(&self) -> f64 {
        if self.nodes_number < 2 {
            return 0.0;
        }
        let n = self.nodes_number as f64;
        let possible_edges = n * (n - 1.0);
        if self.directed {
            self.edges_number as f64 / possible_edges
        } else {
            2.0 * self.edges_number as f64 / possible_edges
        }
    }

    /// Render the plain-text report of the snapshot.
    ///
    /// Empty graphs and graphs without edges get a one line report, the
    /// others describe counts, density, components and the most central nodes.
    pub fn render_report(&self, name: &str) -> String {
        if self.nodes_number == 0 {
            return format!(
                "The graph {} is empty, that is, it has neither nodes nor edges.",
                name
            );
        }

        let nodes = format!("{} nodes", to_human_readable_high_integer(self.nodes_number));

        if self.edges_number == 0 {
            return format!("The graph {} contains {} and no edges.", name, nodes);
        }

        let mut report = vec![format!(
            "The {} graph {} has {} and {} edges, with a density of {:.6}.",
            if self.directed { "directed" } else { "undirected" },
            name,
            nodes,
            to_human_readable_high_integer(self.edges_number),
            self.density()
        )];

        if let Some(components) = &self.components {
            report.push(components_report(components));
        }

        if !self.top_degree_nodes.is_empty() {
            let central_nodes: Vec<String> = self
                .top_degree_nodes
                .iter()
                .map(|(node_name, degree)| {
                    format!("{} (degree {})", node_name, to_human_readable_high_integer(*degree))
                })
                .collect();
            report.push(format!(
                "The nodes with highest degree centrality are: {}.",
                formatted_list(&central_nodes)
            ));
        }

        report.join(" ")
    }
}

fn components_report(components: &ComponentsSummary) -> String {
    if components.components_number == 1 {
        return "The graph is connected, that is, it is composed of a single connected component that includes all nodes and edges.".to_string();
    }

    format!(
        "The graph contains {} connected components{}, with the largest one containing {} nodes and the smallest one containing {}.",
        to_human_readable_high_integer(components.components_number),
        match components.singleton_nodes_number {
            0 => String::new(),
            singletons => format!(
                " (of which {} are disconnected nodes)",
                to_human_readable_high_integer(singletons)
            ),
        },
        to_human_readable_high_integer(components.largest_component_size),
        if components.smallest_component_size == 1 {
            "a single node".to_string()
        } else {
            format!(
                "{} nodes",
                to_human_readable_high_integer(components.smallest_component_size)
            )
        }
    )
}

/// Format a count with a K/M/G/T suffix above one thousand
pub fn to_human_readable_high_integer(number: u64) -> String {
    let (exponent, unit) = match number {
        0..=999 => return number.to_string(),
        1_000..=999_999 => (1, "K"),
        1_000_000..=999_999_999 => (2, "M"),
        1_000_000_000..=999_999_999_999 => (3, "G"),
        _ => (4, "T"),
    };
    format!("{:.2}{}", number as f64 / 1000f64.powi(exponent), unit)
}

fn formatted_list(elements: &[String]) -> String {
    match elements {
        [] => String::new(),
        [single] => single.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_readable_integers() {
        assert_eq!(to_human_readable_high_integer(0), "0");
        assert_eq!(to_human_readable_high_integer(999), "999");
        assert_eq!(to_human_readable_high_integer(2708), "2.71K");
        assert_eq!(to_human_readable_high_integer(44_338), "44.34K");
        assert_eq!(to_human_readable_high_integer(1_500_000), "1.50M");
        assert_eq!(to_human_readable_high_integer(2_000_000_000), "2.00G");
    }

    #[test]
    fn test_density() {
        let undirected = GraphSummary::counts(4, 3, false);
        assert!((undirected.density() - 0.5).abs() < 1e-12);

        let directed = GraphSummary::counts(4, 3, true);
        assert!((directed.density() - 0.25).abs() < 1e-12);

        assert_eq!(GraphSummary::counts(1, 0, false).density(), 0.0);
    }

    #[test]
    fn test_report_of_empty_graph() {
        let report = GraphSummary::counts(0, 0, false).render_report("Empty");
        assert_eq!(
            report,
            "The graph Empty is empty, that is, it has neither nodes nor edges."
        );
    }

    #[test]
    fn test_report_without_edges() {
        let report = GraphSummary::counts(12, 0, false).render_report("Isolated");
        assert_eq!(report, "The graph Isolated contains 12 nodes and no edges.");
    }

    #[test]
    fn test_full_report() {
        let summary = GraphSummary {
            nodes_number: 2708,
            edges_number: 5429,
            directed: false,
            components: Some(ComponentsSummary {
                components_number: 78,
                largest_component_size: 2490,
                smallest_component_size: 1,
                singleton_nodes_number: 0,
            }),
            top_degree_nodes: &[("35", 168), ("6213", 78), ("1365", 74)],
        };

        let report = summary.render_report("Cora");
        assert!(report.starts_with("The undirected graph Cora has 2.71K nodes and 5.43K edges"));
        assert!(report.contains(
            "The graph contains 78 connected components, with the largest one containing 2.49K nodes and the smallest one containing a single node."
        ));
        assert!(report.ends_with(
            "The nodes with highest degree centrality are: 35 (degree 168), 6213 (degree 78) and 1365 (degree 74)."
        ));
    }

    #[test]
    fn test_connected_report() {
        let summary = GraphSummary {
            components: Some(ComponentsSummary {
                components_number: 1,
                largest_component_size: 3,
                smallest_component_size: 3,
                singleton_nodes_number: 0,
            }),
            ..GraphSummary::counts(3, 2, true)
        };
        let report = summary.render_report("Path");
        assert!(report.starts_with("The directed graph Path"));
        assert!(report.contains("The graph is connected"));
    }
}
