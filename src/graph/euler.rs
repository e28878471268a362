//! Eulerian path / circuit classification.

use serde::Serialize;
use std::fmt;

use super::Graph;

/// Whether a graph has an Euler circuit, an Euler path, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EulerianKind {
    /// No walk uses every edge exactly once
    NotEulerian,
    /// An Euler path exists but no Euler circuit
    SemiEulerian,
    /// An Euler circuit exists
    Eulerian,
}

impl fmt::Display for EulerianKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEulerian => write!(f, "not eulerian"),
            Self::SemiEulerian => write!(f, "semi-eulerian"),
            Self::Eulerian => write!(f, "eulerian"),
        }
    }
}

impl Graph {
    /// Classifies the graph by counting nodes of odd [`rank`](Graph::rank).
    ///
    /// A graph that is not [connected](Graph::is_connected) is never Eulerian.
    /// Otherwise zero odd nodes give [`EulerianKind::Eulerian`], exactly two give
    /// [`EulerianKind::SemiEulerian`], and any other count gives
    /// [`EulerianKind::NotEulerian`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::{EulerianKind, Graph};
    ///
    /// let mut graph = Graph::undirected();
    /// for v in ["0", "1", "2"] {
    ///     graph.add_node(v).unwrap();
    /// }
    /// graph.add_edge("0", "1").unwrap();
    /// graph.add_edge("1", "2").unwrap();
    /// assert_eq!(graph.eulerian(), EulerianKind::SemiEulerian);
    ///
    /// graph.add_edge("2", "0").unwrap();
    /// assert_eq!(graph.eulerian(), EulerianKind::Eulerian);
    /// ```
    pub fn eulerian(&self) -> EulerianKind {
        if !self.is_connected() {
            return EulerianKind::NotEulerian;
        }

        let odd = self.order.iter().filter(|v| self.rank(v) % 2 == 1).count();
        tracing::debug!(odd, "counted odd-rank nodes");

        match odd {
            0 => EulerianKind::Eulerian,
            2 => EulerianKind::SemiEulerian,
            _ => EulerianKind::NotEulerian,
        }
    }
}
