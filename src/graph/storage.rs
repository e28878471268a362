//! Graph storage and mutation.
//!
//! Provides a weighted graph keyed by string labels, backed by petgraph's
//! `StableDiGraph`. Undirected graphs store every edge in both directions,
//! so the algorithms in the sibling modules only ever deal with ordered pairs.

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::error::{GraphError, GraphResult};

/// Weight given to edges added without an explicit cost.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Whether a graph's edges have a direction.
///
/// Fixed when the graph is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// `(u, v)` and `(v, u)` are independent edges
    #[default]
    Directed,
    /// Adding `(u, v)` also adds `(v, u)` with the same weight
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => write!(f, "directed"),
            Self::Undirected => write!(f, "undirected"),
        }
    }
}

/// An edge together with its weight, as handed to renderers and exporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedEdge {
    /// Source node label
    pub from: String,
    /// Target node label
    pub to: String,
    /// Edge cost
    pub weight: f64,
}

impl WeightedEdge {
    /// Creates a new weighted edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

/// A weighted graph whose nodes are identified by their labels.
///
/// Nodes keep their insertion order, which some algorithms rely on (the
/// first node seeds connectivity checks and always receives color 0).
/// Cloning a graph produces a fully independent copy.
///
/// # Example
///
/// ```rust
/// use graphkit::graph::Graph;
///
/// let mut graph = Graph::undirected();
/// graph.add_node("h").unwrap();
/// graph.add_node("y").unwrap();
/// graph.add_node("j").unwrap();
///
/// graph.add_edge("h", "j").unwrap();
/// graph.add_weighted_edge("j", "y", 5.0).unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 4); // both directions are stored
/// assert_eq!(graph.weight("y", "j").unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    /// The underlying directed graph; node weights are labels, edge weights are costs
    pub(super) graph: StableDiGraph<String, f64>,
    /// Maps labels to their node indices for O(1) lookup
    pub(super) node_indices: HashMap<String, NodeIndex>,
    /// Labels in insertion order
    pub(super) order: Vec<String>,
    kind: GraphKind,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphKind::Directed)
    }
}

impl Graph {
    /// Creates a new empty graph of the given kind.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::{Graph, GraphKind};
    ///
    /// let graph = Graph::new(GraphKind::Undirected);
    /// assert!(!graph.is_directed());
    /// assert_eq!(graph.node_count(), 0);
    /// ```
    pub fn new(kind: GraphKind) -> Self {
        Self {
            graph: StableDiGraph::new(),
            node_indices: HashMap::new(),
            order: Vec::new(),
            kind,
        }
    }

    /// Creates a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Creates a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Creates a graph with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `kind` - Directed or undirected
    /// * `nodes` - Expected number of nodes
    /// * `edges` - Expected number of stored edges
    pub fn with_capacity(kind: GraphKind, nodes: usize, edges: usize) -> Self {
        Self {
            graph: StableDiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
            order: Vec::with_capacity(nodes),
            kind,
        }
    }

    /// Returns whether the graph is directed or undirected.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Returns `true` for directed graphs.
    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Appends a node to the graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateNode`] if a node with the same label exists.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// graph.add_node("a").unwrap();
    /// assert!(graph.add_node("a").is_err());
    /// assert_eq!(graph.nodes(), ["a"]);
    /// ```
    pub fn add_node(&mut self, label: &str) -> GraphResult<()> {
        if self.node_indices.contains_key(label) {
            return Err(GraphError::DuplicateNode(label.to_string()));
        }

        let idx = self.graph.add_node(label.to_string());
        self.node_indices.insert(label.to_string(), idx);
        self.order.push(label.to_string());
        tracing::debug!(node = label, "added node");
        Ok(())
    }

    /// Removes a node and every edge incident to it.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node does not exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// for v in ["v1", "v2", "v3"] {
    ///     graph.add_node(v).unwrap();
    /// }
    /// graph.add_edge("v1", "v2").unwrap();
    /// graph.add_edge("v3", "v1").unwrap();
    ///
    /// graph.remove_node("v1").unwrap();
    /// assert_eq!(graph.nodes(), ["v2", "v3"]);
    /// assert_eq!(graph.edge_count(), 0);
    /// ```
    pub fn remove_node(&mut self, label: &str) -> GraphResult<()> {
        let idx = self.index(label)?;

        // Collect first; removing while walking the adjacency lists would skip edges.
        let mut incident: Vec<EdgeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .chain(self.graph.edges_directed(idx, Direction::Incoming))
            .map(|edge| edge.id())
            .collect();
        incident.sort();
        incident.dedup();

        for edge in &incident {
            self.graph.remove_edge(*edge);
        }
        self.graph.remove_node(idx);
        self.node_indices.remove(label);
        self.order.retain(|node| node != label);

        tracing::debug!(node = label, edges = incident.len(), "removed node");
        Ok(())
    }

    /// Adds an edge with the default weight of 1.
    ///
    /// See [`add_weighted_edge`](Self::add_weighted_edge).
    pub fn add_edge(&mut self, from: &str, to: &str) -> GraphResult<()> {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT)
    }

    /// Adds an edge from `from` to `to` with the given cost.
    ///
    /// For undirected graphs the mirrored edge is added as well; either both
    /// directions are stored or neither is.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if either endpoint does not exist
    /// - [`GraphError::DuplicateEdge`] if the edge is already present
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// graph.add_node("a").unwrap();
    /// graph.add_node("b").unwrap();
    ///
    /// graph.add_weighted_edge("a", "b", 2.5).unwrap();
    /// assert!(graph.has_edge("a", "b"));
    /// assert!(!graph.has_edge("b", "a"));
    ///
    /// assert!(graph.add_edge("a", "b").is_err()); // already present
    /// assert!(graph.add_edge("a", "zzz").is_err()); // unknown endpoint
    /// ```
    pub fn add_weighted_edge(&mut self, from: &str, to: &str, cost: f64) -> GraphResult<()> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;

        if self.graph.contains_edge(from_idx, to_idx) {
            return Err(GraphError::duplicate_edge(from, to));
        }

        self.graph.add_edge(from_idx, to_idx, cost);
        if self.kind == GraphKind::Undirected && from_idx != to_idx {
            self.graph.add_edge(to_idx, from_idx, cost);
        }

        tracing::debug!(from, to, cost, "added edge");
        Ok(())
    }

    /// Removes the edge from `from` to `to`, and its mirror for undirected graphs.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if either endpoint does not exist
    /// - [`GraphError::EdgeNotFound`] if there is no such edge
    pub fn remove_edge(&mut self, from: &str, to: &str) -> GraphResult<()> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;

        let edge = self
            .graph
            .find_edge(from_idx, to_idx)
            .ok_or_else(|| GraphError::edge_not_found(from, to))?;
        self.graph.remove_edge(edge);

        if self.kind == GraphKind::Undirected {
            if let Some(mirror) = self.graph.find_edge(to_idx, from_idx) {
                self.graph.remove_edge(mirror);
            }
        }

        tracing::debug!(from, to, "removed edge");
        Ok(())
    }

    /// Updates the weight of an existing edge (and its mirror for undirected graphs).
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if either endpoint does not exist
    /// - [`GraphError::EdgeNotFound`] if there is no such edge
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::{EdgeMode, Graph, GraphKind};
    ///
    /// let mut graph = Graph::from_interval("a-d", EdgeMode::Circular, GraphKind::Directed).unwrap();
    /// graph.set_weight("c", "d", 6.0).unwrap();
    /// assert_eq!(graph.weight("c", "d").unwrap(), 6.0);
    /// ```
    pub fn set_weight(&mut self, from: &str, to: &str, cost: f64) -> GraphResult<()> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;

        let edge = self
            .graph
            .find_edge(from_idx, to_idx)
            .ok_or_else(|| GraphError::edge_not_found(from, to))?;
        self.graph[edge] = cost;

        if self.kind == GraphKind::Undirected {
            if let Some(mirror) = self.graph.find_edge(to_idx, from_idx) {
                self.graph[mirror] = cost;
            }
        }

        Ok(())
    }

    /// Returns the weight of the edge from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if either endpoint does not exist
    /// - [`GraphError::EdgeNotFound`] if there is no such edge
    pub fn weight(&self, from: &str, to: &str) -> GraphResult<f64> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;

        self.graph
            .find_edge(from_idx, to_idx)
            .map(|edge| self.graph[edge])
            .ok_or_else(|| GraphError::edge_not_found(from, to))
    }

    /// Checks if the edge from `from` to `to` exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.node_indices.get(from), self.node_indices.get(to)) {
            (Some(&from_idx), Some(&to_idx)) => self.graph.contains_edge(from_idx, to_idx),
            _ => false,
        }
    }

    /// Checks if a node exists in the graph.
    pub fn contains(&self, label: &str) -> bool {
        self.node_indices.contains_key(label)
    }

    /// Gets the nodes reachable from `label` through a single edge.
    ///
    /// The set is ordered by label, which fixes the visiting order of the
    /// traversals. Unknown nodes have no neighbors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::undirected();
    /// for v in ["a", "b", "c"] {
    ///     graph.add_node(v).unwrap();
    /// }
    /// graph.add_edge("b", "c").unwrap();
    /// graph.add_edge("b", "a").unwrap();
    ///
    /// assert_eq!(graph.adjacent("b").into_iter().collect::<Vec<_>>(), ["a", "c"]);
    /// assert!(graph.adjacent("a").contains("b"));
    /// ```
    pub fn adjacent(&self, label: &str) -> BTreeSet<&str> {
        let Some(&idx) = self.node_indices.get(label) else {
            return BTreeSet::new();
        };

        self.graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    /// Returns the number of distinct neighbors of a node.
    pub fn rank(&self, label: &str) -> usize {
        self.adjacent(label).len()
    }

    /// Returns the smallest rank over all nodes, or `None` for an empty graph.
    pub fn min_rank(&self) -> Option<usize> {
        self.order.iter().map(|v| self.rank(v)).min()
    }

    /// Returns the largest rank over all nodes, or `None` for an empty graph.
    pub fn max_rank(&self) -> Option<usize> {
        self.order.iter().map(|v| self.rank(v)).max()
    }

    /// Checks if every node has the same rank.
    pub fn is_regular(&self) -> bool {
        self.min_rank() == self.max_rank()
    }

    /// Returns a new graph with every edge reversed.
    ///
    /// Weights, node order and graph kind are preserved.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// graph.add_node("0").unwrap();
    /// graph.add_node("1").unwrap();
    /// graph.add_weighted_edge("1", "0", 3.0).unwrap();
    ///
    /// let reversed = graph.transpose();
    /// assert!(reversed.has_edge("0", "1"));
    /// assert!(!reversed.has_edge("1", "0"));
    /// assert_eq!(reversed.weight("0", "1").unwrap(), 3.0);
    /// ```
    pub fn transpose(&self) -> Graph {
        let mut transposed =
            Graph::with_capacity(self.kind, self.node_count(), self.edge_count());

        for label in &self.order {
            let idx = transposed.graph.add_node(label.clone());
            transposed.node_indices.insert(label.clone(), idx);
            transposed.order.push(label.clone());
        }

        for edge in self.graph.edge_references() {
            let from = &self.graph[edge.target()];
            let to = &self.graph[edge.source()];
            if let (Some(&from_idx), Some(&to_idx)) = (
                transposed.node_indices.get(from),
                transposed.node_indices.get(to),
            ) {
                transposed.graph.add_edge(from_idx, to_idx, *edge.weight());
            }
        }

        transposed
    }

    /// Returns the node labels in insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.order
    }

    /// Returns every stored edge.
    ///
    /// Edges are grouped by source in node order, then ordered by target
    /// label. Undirected graphs list both directions.
    pub fn edges(&self) -> Vec<WeightedEdge> {
        let mut edges = Vec::with_capacity(self.edge_count());

        for label in &self.order {
            let Some(&idx) = self.node_indices.get(label) else {
                continue;
            };
            let mut outgoing: Vec<WeightedEdge> = self
                .graph
                .edges_directed(idx, Direction::Outgoing)
                .map(|edge| {
                    WeightedEdge::new(label.as_str(), self.graph[edge.target()].as_str(), *edge.weight())
                })
                .collect();
            outgoing.sort_by(|a, b| a.to.cmp(&b.to));
            edges.extend(outgoing);
        }

        edges
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of stored edges.
    ///
    /// An undirected edge between two distinct nodes counts twice.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if any edge has a negative weight.
    pub fn has_negative_weight(&self) -> bool {
        self.graph.edge_references().any(|edge| *edge.weight() < 0.0)
    }

    pub(super) fn index(&self, label: &str) -> GraphResult<NodeIndex> {
        self.node_indices
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(label.to_string()))
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "nodes: {{{}}}", self.order.join(", "))?;
        writeln!(f, "edges: {{")?;
        for edge in self.edges() {
            writeln!(f, "    ({}, {}) weight: {}", edge.from, edge.to, edge.weight)?;
        }
        write!(f, "}}")
    }
}
