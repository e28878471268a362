//! graphkit - in-memory weighted graphs with classical graph algorithms
//!
//! This crate provides a directed/undirected graph keyed by string labels,
//! with depth-first and breadth-first search, connectivity and cycle tests,
//! Eulerian classification, greedy coloring, transposition and
//! Floyd-Warshall shortest paths. Graphs can be built from intervals such as
//! `"a-z"` and exported for rendering.

pub mod error;
pub mod export;
pub mod graph;
pub mod interval;

pub use error::{GraphError, GraphResult};
pub use graph::{EdgeMode, Graph, GraphKind};
