//! Graph module: weighted directed/undirected graphs and their algorithms.
//!
//! This module provides the [`Graph`] struct for building graphs keyed by
//! node labels, together with traversal, connectivity, cycle detection,
//! Eulerian classification, greedy coloring and all-pairs shortest paths.
//!
//! # Example
//!
//! ```rust
//! use graphkit::graph::{EdgeMode, EulerianKind, Graph, GraphKind};
//!
//! let graph = Graph::from_interval("a-d", EdgeMode::Circular, GraphKind::Undirected).unwrap();
//!
//! assert_eq!(graph.node_count(), 4);
//! assert!(graph.is_connected());
//! assert!(graph.is_cyclic());
//! assert_eq!(graph.eulerian(), EulerianKind::Eulerian);
//! ```

mod coloring;
mod cycle;
mod euler;
mod generate;
mod shortest_path;
mod storage;
mod traversal;

pub use self::coloring::Coloring;
pub use self::euler::EulerianKind;
pub use self::generate::EdgeMode;
pub use self::shortest_path::DistanceMatrix;
pub use self::storage::{Graph, GraphKind, WeightedEdge, DEFAULT_WEIGHT};
pub use self::traversal::DepthFirstSearch;
