//! Greedy (first-fit) vertex coloring.
//!
//! Coloring works on the undirected shadow of the graph. For directed graphs
//! the missing reverse edges are installed by [`UndirectedShadow`] and removed
//! again when the guard is dropped, on every exit path.

use petgraph::stable_graph::EdgeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::collections::{BTreeSet, HashMap};
use std::ops::Deref;

use super::{Graph, DEFAULT_WEIGHT};

/// Color assignment produced by [`Graph::greedy_coloring`].
///
/// Colors are small non-negative integers; entries follow the graph's node order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Coloring {
    assignments: Vec<(String, usize)>,
}

impl Coloring {
    /// Returns the color assigned to `label`.
    pub fn color_of(&self, label: &str) -> Option<usize> {
        self.assignments
            .iter()
            .find(|(node, _)| node == label)
            .map(|&(_, color)| color)
    }

    /// Returns the number of distinct colors used.
    pub fn color_count(&self) -> usize {
        self.assignments
            .iter()
            .map(|&(_, color)| color)
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// Iterates over `(label, color)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.assignments
            .iter()
            .map(|(node, color)| (node.as_str(), *color))
    }

    /// Returns the number of colored nodes.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns true if no node was colored.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Scoped guard that makes a graph temporarily undirected.
///
/// Every edge `(u, v)` without a matching `(v, u)` gets a weight-1 reverse
/// edge. Dropping the guard removes exactly those edges, leaving the graph
/// as it was.
pub(super) struct UndirectedShadow<'g> {
    graph: &'g mut Graph,
    added: Vec<EdgeIndex>,
}

impl<'g> UndirectedShadow<'g> {
    pub(super) fn new(graph: &'g mut Graph) -> Self {
        let missing: Vec<_> = graph
            .graph
            .edge_references()
            .filter(|edge| !graph.graph.contains_edge(edge.target(), edge.source()))
            .map(|edge| (edge.target(), edge.source()))
            .collect();

        let added = missing
            .into_iter()
            .map(|(from, to)| graph.graph.add_edge(from, to, DEFAULT_WEIGHT))
            .collect::<Vec<_>>();

        tracing::debug!(added = added.len(), "installed undirected shadow");
        Self { graph, added }
    }
}

impl Deref for UndirectedShadow<'_> {
    type Target = Graph;

    fn deref(&self) -> &Graph {
        self.graph
    }
}

impl Drop for UndirectedShadow<'_> {
    fn drop(&mut self) {
        for edge in self.added.drain(..) {
            self.graph.graph.remove_edge(edge);
        }
        tracing::debug!("removed undirected shadow");
    }
}

impl Graph {
    /// Colors the nodes so that no two neighbors share a color.
    ///
    /// Nodes are processed in insertion order: the first node gets color 0,
    /// every later node the smallest color not used by an already-colored
    /// neighbor. Edge direction is ignored. The result is not guaranteed to
    /// use the minimum number of colors.
    ///
    /// The graph is borrowed mutably because reverse edges are added for the
    /// duration of the call; it is unchanged once this returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// for v in ["0", "1", "2"] {
    ///     graph.add_node(v).unwrap();
    /// }
    /// graph.add_edge("0", "1").unwrap();
    /// graph.add_edge("1", "2").unwrap();
    /// graph.add_edge("2", "0").unwrap();
    ///
    /// let coloring = graph.greedy_coloring();
    /// assert_eq!(coloring.color_of("0"), Some(0));
    /// assert_eq!(coloring.color_count(), 3);
    /// assert_eq!(graph.edge_count(), 3);
    /// ```
    pub fn greedy_coloring(&mut self) -> Coloring {
        let shadow = UndirectedShadow::new(self);

        let mut colors: HashMap<&str, usize> = HashMap::with_capacity(shadow.node_count());
        let mut assignments = Vec::with_capacity(shadow.node_count());

        for node in shadow.nodes() {
            let taken: BTreeSet<usize> = shadow
                .adjacent(node)
                .into_iter()
                .filter_map(|neighbor| colors.get(neighbor).copied())
                .collect();
            let color = (0..).find(|c| !taken.contains(c)).unwrap_or(0);

            tracing::trace!(node = node.as_str(), color, "colored node");
            colors.insert(node.as_str(), color);
            assignments.push((node.clone(), color));
        }

        Coloring { assignments }
    }
}
