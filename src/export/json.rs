//! JSON export implementation.
//!
//! Exports a graph in JSON format for machine-readable output.

use super::{Exporter, RenderData};
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Summary statistics for JSON output.
#[derive(Serialize)]
struct JsonSummary {
    nodes: usize,
    edges: usize,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    summary: JsonSummary,
    #[serde(flatten)]
    graph: &'a RenderData,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, data: &RenderData, writer: &mut W) -> io::Result<()> {
        let export = JsonExport {
            summary: JsonSummary {
                nodes: data.nodes.len(),
                edges: data.unique_edges().count(),
            },
            graph: data,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeMode, Graph, GraphKind};

    fn export_json(graph: &Graph) -> serde_json::Value {
        let mut output = Vec::new();
        JsonExporter.export(&graph.render_data(), &mut output).unwrap();

        let json_str = String::from_utf8(output).unwrap();
        serde_json::from_str(&json_str).unwrap()
    }

    #[test]
    fn test_json_export_basic() {
        let graph = Graph::from_interval("a-c", EdgeMode::Circular, GraphKind::Directed).unwrap();
        let parsed = export_json(&graph);

        assert_eq!(parsed["directed"], true);
        assert_eq!(parsed["summary"]["nodes"], 3);
        assert_eq!(parsed["summary"]["edges"], 3);
        assert_eq!(parsed["nodes"], serde_json::json!(["a", "b", "c"]));
    }

    #[test]
    fn test_json_export_edges() {
        let mut graph = Graph::directed();
        graph.add_node("v1").unwrap();
        graph.add_node("v3").unwrap();
        graph.add_weighted_edge("v1", "v3", 5.0).unwrap();

        let parsed = export_json(&graph);
        let edges = parsed["edges"].as_array().unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0]["from"], "v1");
        assert_eq!(edges[0]["to"], "v3");
        assert_eq!(edges[0]["weight"], 5.0);
    }

    #[test]
    fn test_json_export_undirected_lists_both_directions() {
        let mut graph = Graph::undirected();
        graph.add_node("a").unwrap();
        graph.add_node("b").unwrap();
        graph.add_edge("a", "b").unwrap();

        let parsed = export_json(&graph);
        assert_eq!(parsed["directed"], false);
        assert_eq!(parsed["edges"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["summary"]["edges"], 1);
    }
}
