use serde::{Deserialize, Serialize};

use crate::edge::Edge;
use crate::node::Node;

/// The persisted form of a workflow: `{ "nodes": [...], "edges": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
  #[serde(default)]
  pub nodes: Vec<Node>,
  #[serde(default)]
  pub edges: Vec<Edge>,
}

impl WorkflowDocument {
  pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
    Self { nodes, edges }
  }

  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty() && self.edges.is_empty()
  }
}
