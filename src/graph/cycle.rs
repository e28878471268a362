//! Cycle detection.

use std::collections::btree_set;
use std::collections::HashMap;

use super::{Graph, GraphKind};

/// Visitation state of a node during cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

type Frame<'a> = (&'a str, Option<&'a str>, btree_set::IntoIter<&'a str>);

impl Graph {
    /// Checks if the graph contains a cycle.
    ///
    /// Directed graphs look for an edge back to a node on the current DFS
    /// path. Undirected graphs look for an edge to any visited node other
    /// than the one the current node was reached from, so a single undirected
    /// edge is not a cycle but a self-loop is. Runs in O(V + E).
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// for v in ["a", "b", "c"] {
    ///     graph.add_node(v).unwrap();
    /// }
    /// graph.add_edge("a", "b").unwrap();
    /// graph.add_edge("b", "c").unwrap();
    /// assert!(!graph.is_cyclic());
    ///
    /// graph.add_edge("c", "a").unwrap();
    /// assert!(graph.is_cyclic());
    /// ```
    pub fn is_cyclic(&self) -> bool {
        let mut marks: HashMap<&str, Mark> = self
            .order
            .iter()
            .map(|v| (v.as_str(), Mark::Unvisited))
            .collect();

        for root in &self.order {
            if marks.get(root.as_str()) != Some(&Mark::Unvisited) {
                continue;
            }
            if self.cycle_from(root, &mut marks) {
                tracing::debug!(root = root.as_str(), "cycle found");
                return true;
            }
        }

        false
    }

    fn cycle_from<'a>(&'a self, root: &'a str, marks: &mut HashMap<&'a str, Mark>) -> bool {
        let undirected = self.kind() == GraphKind::Undirected;

        marks.insert(root, Mark::OnStack);
        let mut stack: Vec<Frame<'a>> = vec![(root, None, self.adjacent(root).into_iter())];

        while let Some((node, parent, neighbors)) = stack.last_mut() {
            let node = *node;
            let parent = *parent;

            match neighbors.next() {
                Some(next) if undirected && Some(next) == parent => {}
                Some(next) => match marks.get(next).copied().unwrap_or(Mark::Unvisited) {
                    Mark::Unvisited => {
                        marks.insert(next, Mark::OnStack);
                        stack.push((next, Some(node), self.adjacent(next).into_iter()));
                    }
                    Mark::OnStack => return true,
                    Mark::Done if undirected => return true,
                    Mark::Done => {}
                },
                None => {
                    marks.insert(node, Mark::Done);
                    stack.pop();
                }
            }
        }

        false
    }
}
