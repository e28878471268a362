//! Markdown export implementation.
//!
//! Exports a graph in Markdown format for documentation and reporting.

use super::{Exporter, RenderData};
use std::io::{self, Write};

/// Markdown exporter implementation.
pub struct MarkdownExporter;

impl Exporter for MarkdownExporter {
    fn export<W: Write>(&self, data: &RenderData, writer: &mut W) -> io::Result<()> {
        let kind = if data.directed { "Directed" } else { "Undirected" };

        writeln!(writer, "# {} Graph", kind)?;
        writeln!(writer)?;

        writeln!(writer, "## Summary")?;
        writeln!(writer)?;
        writeln!(writer, "| Metric | Count |")?;
        writeln!(writer, "|--------|-------|")?;
        writeln!(writer, "| Nodes | {} |", data.nodes.len())?;
        writeln!(writer, "| Edges | {} |", data.unique_edges().count())?;
        writeln!(writer)?;

        writeln!(writer, "## Nodes")?;
        writeln!(writer)?;
        if data.nodes.is_empty() {
            writeln!(writer, "_No nodes._")?;
        } else {
            let nodes: Vec<String> = data.nodes.iter().map(|n| format!("`{}`", n)).collect();
            writeln!(writer, "{}", nodes.join(", "))?;
        }
        writeln!(writer)?;

        writeln!(writer, "## Edges")?;
        writeln!(writer)?;
        let arrow = if data.directed { "→" } else { "—" };
        let mut edges = data.unique_edges().peekable();
        if edges.peek().is_none() {
            writeln!(writer, "_No edges._")?;
            return Ok(());
        }

        writeln!(writer, "| Edge | Weight |")?;
        writeln!(writer, "|------|--------|")?;
        for edge in edges {
            writeln!(
                writer,
                "| {} {} {} | {} |",
                edge.from, arrow, edge.to, edge.weight
            )?;
        }

        Ok(())
    }
}
