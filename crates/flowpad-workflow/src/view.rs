use std::collections::HashSet;

use flowpad_config::{Edge, Node};
use serde::Serialize;

use crate::graph::Graph;
use crate::state::WorkflowState;

/// A node as a renderer should draw it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleNode<'a> {
  #[serde(flatten)]
  pub node: &'a Node,
  /// Whether the node has outgoing edges, i.e. whether a collapse toggle
  /// would hide anything.
  pub has_children: bool,
}

/// Read-only projection of the store state for rendering.
///
/// Hidden nodes are left out, as are edges pointing at a hidden node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowView<'a> {
  pub nodes: Vec<VisibleNode<'a>>,
  pub edges: Vec<&'a Edge>,
  pub selected_node_id: Option<&'a str>,
  pub edit_mode: bool,
}

impl<'a> WorkflowView<'a> {
  pub fn new(state: &'a WorkflowState) -> Self {
    let graph = Graph::from_edges(&state.edges);

    let hidden: HashSet<&str> = state
      .nodes
      .iter()
      .filter(|n| n.hidden)
      .map(|n| n.id.as_str())
      .collect();

    let nodes = state
      .nodes
      .iter()
      .filter(|n| !n.hidden)
      .map(|node| VisibleNode {
        node,
        has_children: graph.has_downstream(&node.id),
      })
      .collect();

    let edges = state
      .edges
      .iter()
      .filter(|e| !hidden.contains(e.target.as_str()))
      .collect();

    Self {
      nodes,
      edges,
      selected_node_id: state.selected_node_id.as_deref(),
      edit_mode: state.edit_mode,
    }
  }

  /// Look up a visible node by ID.
  pub fn node(&self, node_id: &str) -> Option<&VisibleNode<'a>> {
    self.nodes.iter().find(|n| n.node.id == node_id)
  }
}
