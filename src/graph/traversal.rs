//! Depth-first and breadth-first traversal, and connectivity.
//!
//! All traversals visit neighbors in the order returned by
//! [`Graph::adjacent`], so results are deterministic for a given graph.

use std::collections::{HashSet, VecDeque};

use super::Graph;
use crate::error::GraphResult;

impl Graph {
    /// Returns the nodes reachable from `source` in depth-first preorder.
    ///
    /// Uses an explicit stack, so deep graphs cannot overflow the call stack;
    /// the order matches a recursive traversal.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`](crate::GraphError::UnknownNode) if
    /// `source` does not exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// for v in ["a", "b", "c", "d"] {
    ///     graph.add_node(v).unwrap();
    /// }
    /// graph.add_edge("a", "c").unwrap();
    /// graph.add_edge("a", "b").unwrap();
    /// graph.add_edge("b", "d").unwrap();
    ///
    /// assert_eq!(graph.dfs("a").unwrap(), ["a", "b", "d", "c"]);
    /// ```
    pub fn dfs(&self, source: &str) -> GraphResult<Vec<String>> {
        self.index(source)?;
        Ok(self.preorder(source))
    }

    // `source` must be a node of the graph.
    fn preorder(&self, source: &str) -> Vec<String> {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut order = Vec::new();
        let mut stack = vec![source];

        while let Some(node) = stack.pop() {
            if !visited.insert(node) {
                continue;
            }
            tracing::trace!(node, "dfs visit");
            order.push(node.to_string());

            // Reverse so the smallest neighbor is popped first.
            stack.extend(
                self.adjacent(node)
                    .into_iter()
                    .rev()
                    .filter(|next| !visited.contains(next)),
            );
        }

        order
    }

    /// Returns the nodes reachable from `source` in breadth-first order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`](crate::GraphError::UnknownNode) if
    /// `source` does not exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// for v in ["a", "b", "c", "d"] {
    ///     graph.add_node(v).unwrap();
    /// }
    /// graph.add_edge("a", "c").unwrap();
    /// graph.add_edge("a", "b").unwrap();
    /// graph.add_edge("b", "d").unwrap();
    ///
    /// assert_eq!(graph.bfs("a").unwrap(), ["a", "b", "c", "d"]);
    /// ```
    pub fn bfs(&self, source: &str) -> GraphResult<Vec<String>> {
        self.index(source)?;

        let mut discovered: HashSet<&str> = HashSet::from([source]);
        let mut order = Vec::new();
        let mut queue = VecDeque::from([source]);

        while let Some(node) = queue.pop_front() {
            tracing::trace!(node, "bfs visit");
            order.push(node.to_string());

            for next in self.adjacent(node) {
                if discovered.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        Ok(order)
    }

    /// Checks if every node with at least one outgoing edge is reachable
    /// from the first such node.
    ///
    /// Isolated nodes are ignored. A graph without edges is connected.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::{EdgeMode, Graph, GraphKind};
    ///
    /// let mut graph = Graph::from_interval("a-f", EdgeMode::Circular, GraphKind::Directed).unwrap();
    /// assert!(graph.is_connected());
    ///
    /// graph.remove_edge("b", "c").unwrap();
    /// graph.remove_edge("d", "e").unwrap();
    /// assert!(!graph.is_connected());
    /// ```
    pub fn is_connected(&self) -> bool {
        let Some(seed) = self.order.iter().find(|v| self.rank(v) > 0) else {
            return true;
        };

        let reached: HashSet<String> = self.preorder(seed).into_iter().collect();
        self.order
            .iter()
            .filter(|v| self.rank(v) > 0)
            .all(|v| reached.contains(v))
    }
}

/// Reachability from a fixed source node.
///
/// Records which nodes have a path from the source and how many there are.
///
/// # Example
///
/// ```rust
/// use graphkit::graph::{DepthFirstSearch, Graph};
///
/// let mut graph = Graph::directed();
/// for v in ["1", "2", "3"] {
///     graph.add_node(v).unwrap();
/// }
/// graph.add_edge("1", "2").unwrap();
///
/// let search = DepthFirstSearch::new(&graph, "1").unwrap();
/// assert!(search.marked("2"));
/// assert!(!search.marked("3"));
/// assert_eq!(search.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    source: String,
    marked: HashSet<String>,
    order: Vec<String>,
}

impl DepthFirstSearch {
    /// Runs a depth-first search from `source`.
    pub fn new(graph: &Graph, source: &str) -> GraphResult<Self> {
        let order = graph.dfs(source)?;
        let marked = order.iter().cloned().collect();

        Ok(Self {
            source: source.to_string(),
            marked,
            order,
        })
    }

    /// The node the search started from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Checks if there is a path from the source to `label`.
    pub fn marked(&self, label: &str) -> bool {
        self.marked.contains(label)
    }

    /// Number of nodes reachable from the source, the source included.
    pub fn count(&self) -> usize {
        self.marked.len()
    }

    /// Reachable nodes in visitation order.
    pub fn reached(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
