use std::collections::{HashMap, HashSet, VecDeque};

use flowpad_config::Edge;

/// Adjacency relation derived from an edge list.
///
/// Built fresh from the current edges whenever it is needed; nothing is
/// cached across mutations.
#[derive(Debug, Clone, Default)]
pub struct Graph {
  /// Adjacency list: node_id -> list of downstream node_ids.
  adjacency: HashMap<String, Vec<String>>,
}

impl Graph {
  /// Build a graph from edges.
  pub fn from_edges(edges: &[Edge]) -> Self {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();

    for edge in edges {
      adjacency
        .entry(edge.source.clone())
        .or_default()
        .push(edge.target.clone());
    }

    Self { adjacency }
  }

  /// Get downstream nodes for a given node.
  pub fn downstream(&self, node_id: &str) -> &[String] {
    self
      .adjacency
      .get(node_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Check if a node has at least one outgoing edge.
  pub fn has_downstream(&self, node_id: &str) -> bool {
    !self.downstream(node_id).is_empty()
  }

  /// All nodes reachable from `start_id` by one or more outgoing edges.
  ///
  /// Breadth-first with no depth limit. `start_id` itself is never part of the
  /// result, even when a cycle leads back to it.
  pub fn descendants(&self, start_id: &str) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut queue = VecDeque::from([start_id]);

    while let Some(current) = queue.pop_front() {
      for target in self.downstream(current) {
        if target == start_id || !found.insert(target.clone()) {
          continue;
        }
        queue.push_back(target.as_str());
      }
    }

    found
  }
}

/// Resolve the transitive descendants of `start_id` over `edges`.
pub fn descendants(start_id: &str, edges: &[Edge]) -> HashSet<String> {
  Graph::from_edges(edges).descendants(start_id)
}
