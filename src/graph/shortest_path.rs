//! Dense weight matrices and all-pairs shortest paths (Floyd-Warshall).
//!
//! Both operations need every node label to be a non-negative integer
//! written without leading zeros (`"0"`, `"7"`, `"1024"`). Rows and columns
//! follow the labels in ascending numeric order, so the graph `{0, 1, 2}`
//! gives indices `0, 1, 2` while `{3, 10}` gives `0, 1`.

use petgraph::stable_graph::NodeIndex;
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use super::Graph;
use crate::error::{GraphError, GraphResult};

/// A square matrix of path costs between numerically labelled nodes.
///
/// Missing entries are stored as `f64::INFINITY`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceMatrix {
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DistanceMatrix {
    fn unconnected(labels: Vec<String>) -> Self {
        let size = labels.len();
        let rows = (0..size)
            .map(|i| {
                let mut row = vec![f64::INFINITY; size];
                row[i] = 0.0;
                row
            })
            .collect();
        Self { labels, rows }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Node labels in row order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the row of `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Returns the cost from row `from` to column `to`.
    ///
    /// `None` if the pair is out of range or `to` is unreachable.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.rows
            .get(from)
            .and_then(|row| row.get(to))
            .copied()
            .filter(|d| d.is_finite())
    }

    /// Returns the cost between two nodes given by label.
    pub fn distance_between(&self, from: &str, to: &str) -> Option<f64> {
        self.distance(self.index_of(from)?, self.index_of(to)?)
    }

    /// The raw rows; unreachable entries are `f64::INFINITY`.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}", "")?;
        for label in &self.labels {
            write!(f, " {:>6}", label)?;
        }

        for (label, row) in self.labels.iter().zip(&self.rows) {
            write!(f, "\n{:>6}", label)?;
            for d in row {
                if d.is_finite() {
                    write!(f, " {:>6}", d)?;
                } else {
                    write!(f, " {:>6}", "INF")?;
                }
            }
        }
        Ok(())
    }
}

fn is_canonical_number(label: &str) -> bool {
    !label.is_empty()
        && label.bytes().all(|b| b.is_ascii_digit())
        && (label.len() == 1 || !label.starts_with('0'))
}

// Canonical digit strings order numerically by length, then lexically.
fn numeric_order(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Graph {
    /// Converts the graph into a dense weight matrix.
    ///
    /// The matrix has one row per node in ascending numeric order, a zero
    /// diagonal, the edge weight at `[from][to]` for every edge, and
    /// `f64::INFINITY` elsewhere. A self loop overrides the zero diagonal
    /// entry.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NonNumericLabel`] if any label is not a
    /// non-negative integer without leading zeros.
    pub fn weight_matrix(&self) -> GraphResult<DistanceMatrix> {
        if let Some(bad) = self.order.iter().find(|l| !is_canonical_number(l)) {
            return Err(GraphError::NonNumericLabel(bad.clone()));
        }

        let mut labels = self.order.clone();
        labels.sort_by(|a, b| numeric_order(a, b));
        let rows_by_node: HashMap<NodeIndex, usize> = labels
            .iter()
            .enumerate()
            .map(|(row, label)| (self.node_indices[label], row))
            .collect();

        let mut matrix = DistanceMatrix::unconnected(labels);
        for edge in self.graph.edge_references() {
            let from = rows_by_node[&edge.source()];
            let to = rows_by_node[&edge.target()];
            matrix.rows[from][to] = *edge.weight();
        }

        Ok(matrix)
    }

    /// Computes the cost of the cheapest path between every pair of nodes.
    ///
    /// Negative weights are accepted; negative cycles are not detected and
    /// give meaningless results.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NonNumericLabel`] if any label is not a
    /// non-negative integer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::Graph;
    ///
    /// let mut graph = Graph::directed();
    /// for v in ["0", "1", "2", "3"] {
    ///     graph.add_node(v).unwrap();
    /// }
    /// graph.add_weighted_edge("0", "3", 10.0).unwrap();
    /// graph.add_weighted_edge("0", "1", 5.0).unwrap();
    /// graph.add_weighted_edge("1", "2", 3.0).unwrap();
    /// graph.add_weighted_edge("2", "3", 1.0).unwrap();
    ///
    /// let dist = graph.floyd_warshall().unwrap();
    /// assert_eq!(dist.distance(0, 3), Some(9.0));
    /// assert_eq!(dist.distance(3, 0), None);
    /// ```
    pub fn floyd_warshall(&self) -> GraphResult<DistanceMatrix> {
        if self.has_negative_weight() {
            tracing::warn!("negative weights present; negative cycles are not detected");
        }

        let mut dist = self.weight_matrix()?;
        let n = dist.size();

        for k in 0..n {
            for i in 0..n {
                let through_k = dist.rows[i][k];
                if through_k == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let candidate = through_k + dist.rows[k][j];
                    if candidate < dist.rows[i][j] {
                        dist.rows[i][j] = candidate;
                    }
                }
            }
        }

        tracing::debug!(size = n, "computed all-pairs shortest paths");
        Ok(dist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphKind;
    use petgraph::algo::dijkstra;

    fn build(kind: GraphKind, nodes: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
        let mut graph = Graph::new(kind);
        for node in nodes {
            graph.add_node(node).unwrap();
        }
        for (from, to, cost) in edges {
            graph.add_weighted_edge(from, to, *cost).unwrap();
        }
        graph
    }

    #[test]
    fn test_weight_matrix() {
        let graph = build(
            GraphKind::Directed,
            &["0", "1", "2"],
            &[("0", "1", 4.0), ("1", "2", 2.5)],
        );

        let matrix = graph.weight_matrix().unwrap();
        assert_eq!(matrix.size(), 3);
        assert_eq!(matrix.rows()[0], vec![0.0, 4.0, f64::INFINITY]);
        assert_eq!(matrix.rows()[1], vec![f64::INFINITY, 0.0, 2.5]);
        assert_eq!(matrix.distance(2, 0), None);
    }

    #[test]
    fn test_weight_matrix_sparse_labels() {
        let graph = build(GraphKind::Directed, &["3", "1"], &[("3", "1", 7.0)]);

        let matrix = graph.weight_matrix().unwrap();
        assert_eq!(matrix.size(), 2);
        assert_eq!(matrix.labels(), ["1", "3"]);
        assert_eq!(matrix.index_of("3"), Some(1));
        assert_eq!(matrix.distance(1, 0), Some(7.0));
        assert_eq!(matrix.distance_between("3", "1"), Some(7.0));
        assert_eq!(matrix.distance_between("1", "3"), None);
        assert_eq!(matrix.distance(9, 0), None);
    }

    #[test]
    fn test_weight_matrix_orders_numerically() {
        let graph = build(GraphKind::Directed, &["10", "9", "100"], &[("9", "100", 1.0)]);

        let matrix = graph.weight_matrix().unwrap();
        assert_eq!(matrix.labels(), ["9", "10", "100"]);
        assert_eq!(matrix.distance(0, 2), Some(1.0));
    }

    #[test]
    fn test_weight_matrix_far_apart_labels() {
        let graph = build(
            GraphKind::Directed,
            &["0", "1000000"],
            &[("0", "1000000", 2.0)],
        );

        let dist = graph.floyd_warshall().unwrap();
        assert_eq!(dist.size(), 2);
        assert_eq!(dist.distance_between("0", "1000000"), Some(2.0));
    }

    #[test]
    fn test_weight_matrix_huge_label() {
        let graph = build(
            GraphKind::Directed,
            &["18446744073709551615", "184467440737095516150"],
            &[("18446744073709551615", "184467440737095516150", 1.5)],
        );

        let dist = graph.floyd_warshall().unwrap();
        assert_eq!(dist.size(), 2);
        assert_eq!(dist.distance(0, 1), Some(1.5));
        assert_eq!(dist.distance(1, 1), Some(0.0));
    }

    #[test]
    fn test_weight_matrix_rejects_leading_zeros() {
        let graph = build(GraphKind::Directed, &["1", "01"], &[("01", "1", 5.0)]);
        assert_eq!(
            graph.weight_matrix(),
            Err(GraphError::NonNumericLabel("01".to_string()))
        );

        let zero = build(GraphKind::Directed, &["0"], &[]);
        assert!(zero.weight_matrix().is_ok());
    }

    #[test]
    fn test_weight_matrix_rejects_letters() {
        let graph = build(GraphKind::Directed, &["0", "b"], &[]);
        assert_eq!(
            graph.weight_matrix(),
            Err(GraphError::NonNumericLabel("b".to_string()))
        );
        assert!(graph.floyd_warshall().is_err());
    }

    #[test]
    fn test_floyd_warshall_keeps_direct_edge() {
        let graph = build(
            GraphKind::Directed,
            &["0", "1", "2", "3"],
            &[("0", "3", 9.0), ("0", "1", 5.0), ("1", "2", 3.0), ("2", "3", 1.0)],
        );

        let dist = graph.floyd_warshall().unwrap();
        assert_eq!(dist.distance(0, 3), Some(9.0));
        assert_eq!(dist.distance(0, 2), Some(8.0));
        assert_eq!(dist.distance(1, 3), Some(4.0));
        assert_eq!(dist.distance(3, 0), None);
    }

    #[test]
    fn test_floyd_warshall_undirected() {
        let graph = build(
            GraphKind::Undirected,
            &["0", "1", "2"],
            &[("0", "1", 2.0), ("1", "2", 2.0), ("0", "2", 10.0)],
        );

        let dist = graph.floyd_warshall().unwrap();
        assert_eq!(dist.distance(2, 0), Some(4.0));
        assert_eq!(dist.distance(0, 2), Some(4.0));
    }

    #[test]
    fn test_floyd_warshall_negative_edge() {
        let graph = build(
            GraphKind::Directed,
            &["0", "1", "2"],
            &[("0", "1", 4.0), ("0", "2", 1.0), ("2", "1", -2.0)],
        );

        let dist = graph.floyd_warshall().unwrap();
        assert_eq!(dist.distance(0, 1), Some(-1.0));
    }

    #[test]
    fn test_floyd_warshall_matches_dijkstra() {
        let graph = build(
            GraphKind::Directed,
            &["0", "1", "2", "3", "4", "5"],
            &[
                ("0", "1", 7.0),
                ("0", "2", 9.0),
                ("0", "5", 14.0),
                ("1", "2", 10.0),
                ("1", "3", 15.0),
                ("2", "3", 11.0),
                ("2", "5", 2.0),
                ("3", "4", 6.0),
                ("5", "4", 9.0),
            ],
        );

        let dist = graph.floyd_warshall().unwrap();
        for source in graph.nodes() {
            let start = graph.node_indices[source];
            let expected = dijkstra(&graph.graph, start, None, |e| *e.weight());
            for target in graph.nodes() {
                let idx = graph.node_indices[target];
                assert_eq!(
                    dist.distance_between(source, target),
                    expected.get(&idx).copied()
                );
            }
        }
    }

    #[test]
    fn test_distance_matrix_display() {
        let graph = build(GraphKind::Directed, &["0", "1"], &[("0", "1", 3.0)]);
        let matrix = graph.floyd_warshall().unwrap();
        assert_eq!(
            matrix.to_string(),
            "            0      1\n     0      0      3\n     1    INF      0"
        );
    }

    #[test]
    fn test_empty_graph_matrix() {
        let matrix = Graph::directed().floyd_warshall().unwrap();
        assert_eq!(matrix.size(), 0);
    }
}
