//! Graphviz DOT export implementation.

use super::{Exporter, RenderData};
use std::io::{self, Write};

/// DOT exporter implementation.
pub struct DotExporter;

fn quote(label: &str) -> String {
    format!("\"{}\"", label.replace('\\', "\\\\").replace('"', "\\\""))
}

impl Exporter for DotExporter {
    fn export<W: Write>(&self, data: &RenderData, writer: &mut W) -> io::Result<()> {
        let (keyword, arrow) = if data.directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        writeln!(writer, "{} G {{", keyword)?;
        for node in &data.nodes {
            writeln!(writer, "    {};", quote(node))?;
        }
        for edge in data.unique_edges() {
            writeln!(
                writer,
                "    {} {} {} [label=\"{}\"];",
                quote(&edge.from),
                arrow,
                quote(&edge.to),
                edge.weight
            )?;
        }
        writeln!(writer, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{export_to_string, ExportFormat};
    use crate::graph::Graph;

    #[test]
    fn test_dot_directed() {
        let mut graph = Graph::directed();
        graph.add_node("E").unwrap();
        graph.add_node("T").unwrap();
        graph.add_weighted_edge("E", "T", 2.0).unwrap();

        let dot = export_to_string(ExportFormat::Dot, &graph.render_data()).unwrap();
        assert_eq!(
            dot,
            "digraph G {\n    \"E\";\n    \"T\";\n    \"E\" -> \"T\" [label=\"2\"];\n}\n"
        );
    }

    #[test]
    fn test_dot_undirected() {
        let mut graph = Graph::undirected();
        graph.add_node("+").unwrap();
        graph.add_node("*").unwrap();
        graph.add_edge("+", "*").unwrap();

        let dot = export_to_string(ExportFormat::Dot, &graph.render_data()).unwrap();
        assert!(dot.starts_with("graph G {"));
        assert_eq!(dot.matches("--").count(), 1);
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
    }
}
