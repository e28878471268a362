//! Export functionality for graphs.
//!
//! This module hands a graph's nodes and weighted edges to renderers. The
//! core only exposes [`RenderData`]; the exporters turn it into JSON, CSV,
//! Markdown or Graphviz DOT.

pub mod csv;
pub mod dot;
pub mod json;
pub mod markdown;

use crate::graph::{Graph, WeightedEdge};
use serde::Serialize;
use std::collections::HashMap;
use std::io::{self, Write};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON format - machine-readable, full data
    Json,
    /// CSV format - one edge per row
    Csv,
    /// Markdown format - documentation/reporting
    Markdown,
    /// Graphviz DOT format - for drawing
    Dot,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "dot" | "graphviz" => Ok(ExportFormat::Dot),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: json, csv, markdown, dot",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Markdown => write!(f, "markdown"),
            ExportFormat::Dot => write!(f, "dot"),
        }
    }
}

/// Everything a renderer needs to draw a graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderData {
    /// Node labels in insertion order
    pub nodes: Vec<String>,
    /// Stored edges with their weights (both directions for undirected graphs)
    pub edges: Vec<WeightedEdge>,
    /// Whether edges should be drawn with arrows
    pub directed: bool,
}

impl RenderData {
    /// Collects the render data of a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph.edges(),
            directed: graph.is_directed(),
        }
    }

    /// Edges with each undirected pair listed once.
    ///
    /// For directed graphs this is every edge.
    pub fn unique_edges(&self) -> impl Iterator<Item = &WeightedEdge> {
        let directed = self.directed;
        let position: HashMap<&str, usize> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, label)| (label.as_str(), i))
            .collect();
        self.edges.iter().filter(move |e| {
            directed
                || e.from == e.to
                || position.get(e.from.as_str()) < position.get(e.to.as_str())
        })
    }
}

impl Graph {
    /// Returns the nodes and weighted edges for a renderer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// graph.add_node("v1").unwrap();
    /// graph.add_node("v2").unwrap();
    /// graph.add_weighted_edge("v1", "v2", 6.0).unwrap();
    ///
    /// let data = graph.render_data();
    /// assert_eq!(data.nodes, ["v1", "v2"]);
    /// assert_eq!(data.edges[0].weight, 6.0);
    /// assert!(data.directed);
    /// ```
    pub fn render_data(&self) -> RenderData {
        RenderData::from_graph(self)
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the data to the given writer.
    fn export<W: Write>(&self, data: &RenderData, writer: &mut W) -> io::Result<()>;
}

/// A destination that draws or stores a graph.
pub trait RenderSink {
    /// Consume the graph's render data.
    fn render(&mut self, data: &RenderData) -> io::Result<()>;
}

/// A [`RenderSink`] that writes one export format to a writer.
pub struct WriterSink<W: Write> {
    format: ExportFormat,
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Creates a sink writing `format` to `writer`.
    pub fn new(format: ExportFormat, writer: W) -> Self {
        Self { format, writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RenderSink for WriterSink<W> {
    fn render(&mut self, data: &RenderData) -> io::Result<()> {
        export(self.format, data, &mut self.writer)
    }
}

/// Export data in the specified format.
pub fn export<W: Write>(
    format: ExportFormat,
    data: &RenderData,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Json => json::JsonExporter.export(data, writer),
        ExportFormat::Csv => csv::CsvExporter.export(data, writer),
        ExportFormat::Markdown => markdown::MarkdownExporter.export(data, writer),
        ExportFormat::Dot => dot::DotExporter.export(data, writer),
    }
}

/// Export data to a string.
pub fn export_to_string(format: ExportFormat, data: &RenderData) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, data, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
