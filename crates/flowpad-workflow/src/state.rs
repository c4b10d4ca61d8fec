use flowpad_config::{Edge, Node, WorkflowDocument};
use serde::{Deserialize, Serialize};

/// The aggregate held by the store and handed to renderers as a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowState {
  pub nodes: Vec<Node>,
  pub edges: Vec<Edge>,
  pub selected_node_id: Option<String>,
  pub edit_mode: bool,
}

impl WorkflowState {
  /// Get a node by ID.
  pub fn node(&self, node_id: &str) -> Option<&Node> {
    self.nodes.iter().find(|n| n.id == node_id)
  }

  /// The selected node, if the selection still points at an existing node.
  pub fn selected_node(&self) -> Option<&Node> {
    self
      .selected_node_id
      .as_deref()
      .and_then(|id| self.node(id))
  }

  /// Copy out the persistable part of the state.
  pub fn document(&self) -> WorkflowDocument {
    WorkflowDocument::new(self.nodes.clone(), self.edges.clone())
  }
}
