//! Building graphs from node intervals.

use rand::Rng;
use std::fmt;
use std::str::FromStr;

use super::{Graph, GraphKind};
use crate::error::{GraphError, GraphResult};
use crate::interval;

/// Upper bound (exclusive) for weights of randomly generated edges.
const MAX_RANDOM_WEIGHT: u32 = 100;

/// How edges are generated when building a graph from an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    /// For every node, connect two randomly chosen nodes if they differ
    Random,
    /// Connect each node to the next one, and the last back to the first
    Circular,
}

impl FromStr for EdgeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(EdgeMode::Random),
            "circular" => Ok(EdgeMode::Circular),
            _ => Err(format!(
                "Unknown edge mode: '{}'. Valid modes: random, circular",
                s
            )),
        }
    }
}

impl fmt::Display for EdgeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeMode::Random => write!(f, "random"),
            EdgeMode::Circular => write!(f, "circular"),
        }
    }
}

impl Graph {
    /// Builds a graph whose nodes are the labels of an interval such as
    /// `"a-f"` or `"1-100"`, connected according to `mode`.
    ///
    /// Random edges use the thread-local generator; see
    /// [`from_interval_with_rng`](Self::from_interval_with_rng) for
    /// reproducible graphs.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidInterval`] if the text is not a valid interval.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::{EdgeMode, Graph, GraphKind};
    ///
    /// let graph = Graph::from_interval("a-d", EdgeMode::Circular, GraphKind::Directed).unwrap();
    /// assert_eq!(graph.nodes(), ["a", "b", "c", "d"]);
    /// assert!(graph.has_edge("d", "a"));
    /// assert_eq!(graph.edge_count(), 4);
    /// ```
    pub fn from_interval(text: &str, mode: EdgeMode, kind: GraphKind) -> GraphResult<Self> {
        Self::from_interval_with_rng(text, mode, kind, &mut rand::thread_rng())
    }

    /// Same as [`from_interval`](Self::from_interval), drawing random edges from `rng`.
    pub fn from_interval_with_rng<R: Rng + ?Sized>(
        text: &str,
        mode: EdgeMode,
        kind: GraphKind,
        rng: &mut R,
    ) -> GraphResult<Self> {
        let labels = interval::parse(text)?;
        let mut graph = Graph::with_capacity(kind, labels.len(), labels.len() * 2);
        for label in &labels {
            graph.add_node(label)?;
        }

        match mode {
            EdgeMode::Random => graph.connect_random(rng)?,
            EdgeMode::Circular => graph.connect_circular()?,
        }

        tracing::debug!(
            interval = text,
            %mode,
            %kind,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "generated graph"
        );
        Ok(graph)
    }

    /// Builds a random graph over a numeric interval with bounds drawn below `max_nodes`.
    ///
    /// The graph has at most `max_nodes` nodes, labelled with consecutive
    /// integers, and random edges.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidInterval`] if `max_nodes` is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphkit::graph::{Graph, GraphKind};
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let graph = Graph::random(10, GraphKind::Undirected, &mut rng).unwrap();
    /// assert!(graph.node_count() >= 1 && graph.node_count() <= 10);
    /// ```
    pub fn random<R: Rng + ?Sized>(
        max_nodes: usize,
        kind: GraphKind,
        rng: &mut R,
    ) -> GraphResult<Self> {
        if max_nodes == 0 {
            return Err(GraphError::InvalidInterval(
                "random graph needs at least one node".to_string(),
            ));
        }

        let a = rng.gen_range(0..max_nodes);
        let b = rng.gen_range(0..max_nodes);
        let text = format!("{}-{}", a.min(b), a.max(b));

        Self::from_interval_with_rng(&text, EdgeMode::Random, kind, rng)
    }

    fn connect_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GraphResult<()> {
        let n = self.node_count();
        if n == 0 {
            return Ok(());
        }

        for _ in 0..n {
            let from = rng.gen_range(0..n);
            let to = rng.gen_range(0..n);
            let weight = f64::from(rng.gen_range(0..MAX_RANDOM_WEIGHT));
            if from == to {
                continue;
            }

            let (from, to) = (self.order[from].clone(), self.order[to].clone());
            if !self.has_edge(&from, &to) {
                self.add_weighted_edge(&from, &to, weight)?;
            }
        }

        Ok(())
    }

    fn connect_circular(&mut self) -> GraphResult<()> {
        let labels = self.order.clone();

        for (i, from) in labels.iter().enumerate() {
            let to = &labels[(i + 1) % labels.len()];
            if !self.has_edge(from, to) {
                self.add_edge(from, to)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_circular_directed() {
        let graph = Graph::from_interval("a-d", EdgeMode::Circular, GraphKind::Directed).unwrap();

        assert_eq!(graph.nodes(), ["a", "b", "c", "d"]);
        assert_eq!(graph.edge_count(), 4);
        for (from, to) in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")] {
            assert!(graph.has_edge(from, to), "missing {} -> {}", from, to);
            assert_eq!(graph.weight(from, to).unwrap(), 1.0);
        }
        assert!(graph.is_connected());
    }

    #[test]
    fn test_circular_disconnects_after_removing_edges() {
        let mut graph =
            Graph::from_interval("a-f", EdgeMode::Circular, GraphKind::Directed).unwrap();
        assert!(graph.is_connected());

        graph.remove_edge("b", "c").unwrap();
        graph.remove_edge("d", "e").unwrap();
        assert!(!graph.is_connected());
    }

    #[test]
    fn test_circular_undirected_two_nodes() {
        let graph =
            Graph::from_interval("1-2", EdgeMode::Circular, GraphKind::Undirected).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge("2", "1"));
    }

    #[test]
    fn test_circular_single_node_loops() {
        let graph = Graph::from_interval("x-x", EdgeMode::Circular, GraphKind::Directed).unwrap();
        assert!(graph.has_edge("x", "x"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_random_is_reproducible() {
        let a = Graph::from_interval_with_rng(
            "1-8",
            EdgeMode::Random,
            GraphKind::Directed,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();
        let b = Graph::from_interval_with_rng(
            "1-8",
            EdgeMode::Random,
            GraphKind::Directed,
            &mut StdRng::seed_from_u64(42),
        )
        .unwrap();

        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn test_random_edges_are_valid() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let graph =
                Graph::from_interval_with_rng("0-9", EdgeMode::Random, GraphKind::Undirected, &mut rng)
                    .unwrap();

            assert_eq!(graph.node_count(), 10);
            // at most one edge per node, stored twice when undirected
            assert!(graph.edge_count() <= 20);
            for edge in graph.edges() {
                assert_ne!(edge.from, edge.to);
                assert!(edge.weight >= 0.0 && edge.weight < 100.0);
                assert!(graph.has_edge(&edge.to, &edge.from));
            }
        }
    }

    #[test]
    fn test_random_graph_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let graph = Graph::random(6, GraphKind::Directed, &mut rng).unwrap();
            assert!(graph.node_count() >= 1);
            assert!(graph.node_count() <= 6);
            assert!(graph.nodes().iter().all(|v| v.parse::<usize>().unwrap() < 6));
        }
    }

    #[test]
    fn test_random_graph_zero_nodes() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Graph::random(0, GraphKind::Directed, &mut rng),
            Err(GraphError::InvalidInterval(_))
        ));
    }

    #[test]
    fn test_invalid_interval() {
        assert_eq!(
            Graph::from_interval("a-", EdgeMode::Circular, GraphKind::Directed).unwrap_err(),
            GraphError::InvalidInterval("a-".to_string())
        );
    }

    #[test]
    fn test_edge_mode_from_str() {
        assert_eq!("random".parse::<EdgeMode>().unwrap(), EdgeMode::Random);
        assert_eq!("Circular".parse::<EdgeMode>().unwrap(), EdgeMode::Circular);
        assert!("spiral".parse::<EdgeMode>().is_err());
        assert_eq!(EdgeMode::Circular.to_string(), "circular");
    }
}
