//! CSV export implementation.
//!
//! Exports the edge list in CSV format for spreadsheet use.

use super::{Exporter, RenderData};
use std::io::{self, Write};

/// CSV exporter implementation.
pub struct CsvExporter;

impl CsvExporter {
    /// Escape a field value for CSV format.
    ///
    /// Wraps the value in quotes if it contains commas, quotes, or newlines.
    fn escape_field(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}

impl Exporter for CsvExporter {
    fn export<W: Write>(&self, data: &RenderData, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "from,to,weight")?;

        for edge in data.unique_edges() {
            writeln!(
                writer,
                "{},{},{}",
                Self::escape_field(&edge.from),
                Self::escape_field(&edge.to),
                edge.weight
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_csv_export_basic() {
        let mut graph = Graph::directed();
        for v in ["v1", "v2", "v3"] {
            graph.add_node(v).unwrap();
        }
        graph.add_weighted_edge("v1", "v3", 5.0).unwrap();
        graph.add_weighted_edge("v3", "v2", 10.5).unwrap();

        let mut output = Vec::new();
        CsvExporter.export(&graph.render_data(), &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = csv_str.lines().collect();

        assert_eq!(lines, vec!["from,to,weight", "v1,v3,5", "v3,v2,10.5"]);
    }

    #[test]
    fn test_csv_export_undirected_once() {
        let mut graph = Graph::undirected();
        graph.add_node("a").unwrap();
        graph.add_node("b").unwrap();
        graph.add_edge("b", "a").unwrap();

        let mut output = Vec::new();
        CsvExporter.export(&graph.render_data(), &mut output).unwrap();

        let csv_str = String::from_utf8(output).unwrap();
        assert_eq!(csv_str.lines().count(), 2);
        assert_eq!(csv_str.lines().nth(1), Some("a,b,1"));
    }

    #[test]
    fn test_csv_escape_field() {
        assert_eq!(CsvExporter::escape_field("simple"), "simple");
        assert_eq!(CsvExporter::escape_field("with,comma"), "\"with,comma\"");
        assert_eq!(
            CsvExporter::escape_field("with\"quote"),
            "\"with\"\"quote\""
        );
    }
}
