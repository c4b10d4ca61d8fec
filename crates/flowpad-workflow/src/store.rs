use std::sync::Arc;

use flowpad_config::{ConfigMap, Edge, Node, WorkflowDocument, parse_config};
use tracing::{debug, warn};

use crate::error::WorkflowError;
use crate::events::{NoopObserver, StoreEvent, StoreObserver};
use crate::graph::Graph;
use crate::state::WorkflowState;
use crate::view::WorkflowView;

/// Owns the canonical workflow state and applies mutations to it.
///
/// Every operation runs to completion synchronously. Operations that name a
/// node id which does not exist leave the state untouched and return `false`
/// rather than failing.
///
/// # Usage
///
/// ```
/// use flowpad_workflow::{WorkflowStore, sample_workflow};
///
/// let mut store = WorkflowStore::from_document(sample_workflow());
/// store.toggle_collapse("checkQualified");
///
/// let view = store.view();
/// assert!(view.node("checkQualified").is_some());
/// assert!(view.node("end").is_none());
/// ```
pub struct WorkflowStore {
  state: WorkflowState,
  observer: Arc<dyn StoreObserver>,
}

impl Default for WorkflowStore {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for WorkflowStore {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("WorkflowStore")
      .field("state", &self.state)
      .finish_non_exhaustive()
  }
}

impl WorkflowStore {
  /// Create an empty store: no nodes, no edges, nothing selected, edit mode off.
  pub fn new() -> Self {
    Self::with_observer(Arc::new(NoopObserver))
  }

  /// Create an empty store that reports applied mutations to `observer`.
  pub fn with_observer(observer: Arc<dyn StoreObserver>) -> Self {
    Self {
      state: WorkflowState::default(),
      observer,
    }
  }

  /// Create a store and load `document` into it.
  pub fn from_document(document: WorkflowDocument) -> Self {
    let mut store = Self::new();
    store.load_document(document);
    store
  }

  pub fn state(&self) -> &WorkflowState {
    &self.state
  }

  /// Owned copy of the current state for consumers that outlive a borrow.
  pub fn snapshot(&self) -> WorkflowState {
    self.state.clone()
  }

  /// The persistable `{nodes, edges}` pair.
  pub fn document(&self) -> WorkflowDocument {
    self.state.document()
  }

  pub fn view(&self) -> WorkflowView<'_> {
    WorkflowView::new(&self.state)
  }

  pub fn node(&self, node_id: &str) -> Option<&Node> {
    self.state.node(node_id)
  }

  pub fn selected_node(&self) -> Option<&Node> {
    self.state.selected_node()
  }

  /// Replace nodes and edges wholesale.
  ///
  /// A freshly loaded graph is always fully visible: `hidden` is cleared on
  /// every node while `is_collapsed` is kept as given. Selection and edit mode
  /// are left alone.
  pub fn load(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
    self.state.nodes = nodes
      .into_iter()
      .map(|mut node| {
        node.hidden = false;
        node
      })
      .collect();
    self.state.edges = edges;

    debug!(
      nodes = self.state.nodes.len(),
      edges = self.state.edges.len(),
      "workflow loaded"
    );
    self.emit(StoreEvent::Loaded {
      nodes: self.state.nodes.len(),
      edges: self.state.edges.len(),
    });
  }

  pub fn load_document(&mut self, document: WorkflowDocument) {
    self.load(document.nodes, document.edges);
  }

  pub fn select(&mut self, node_id: Option<String>) {
    debug!(node_id = ?node_id, "node selected");
    self.state.selected_node_id = node_id.clone();
    self.emit(StoreEvent::Selected { node_id });
  }

  pub fn set_edit_mode(&mut self, edit_mode: bool) {
    debug!(edit_mode, "edit mode changed");
    self.state.edit_mode = edit_mode;
    self.emit(StoreEvent::EditModeChanged { edit_mode });
  }

  /// Shallow-merge `partial` into the node's config.
  ///
  /// Keys in `partial` overwrite existing keys; other keys are preserved.
  pub fn update_config(&mut self, node_id: &str, partial: ConfigMap) -> bool {
    let Some(node) = self.node_mut(node_id) else {
      debug!(node_id, "config update ignored: node not found");
      return false;
    };

    node.config.extend(partial);

    debug!(node_id, "node config updated");
    self.emit(StoreEvent::ConfigUpdated {
      node_id: node_id.to_string(),
    });
    true
  }

  /// Parse raw config text and merge it into the node's config.
  ///
  /// Unparseable text is rejected before the store is touched, so the node
  /// keeps its previous config.
  pub fn update_config_from_json(&mut self, node_id: &str, raw: &str) -> Result<bool, WorkflowError> {
    let partial = parse_config(raw).map_err(|source| WorkflowError::InvalidConfig {
      node_id: node_id.to_string(),
      source,
    })?;
    Ok(self.update_config(node_id, partial))
  }

  /// Flip the node's collapse flag and cascade it to every descendant.
  ///
  /// Collapsing hides all transitive descendants; expanding shows all of them,
  /// including those under a nested collapsed node.
  pub fn toggle_collapse(&mut self, node_id: &str) -> bool {
    let Some(node) = self.node_mut(node_id) else {
      debug!(node_id, "collapse toggle ignored: node not found");
      return false;
    };

    node.is_collapsed = !node.is_collapsed;
    let collapsed = node.is_collapsed;

    let descendants = Graph::from_edges(&self.state.edges).descendants(node_id);
    let mut affected = Vec::with_capacity(descendants.len());
    for node in &mut self.state.nodes {
      if descendants.contains(&node.id) {
        node.hidden = collapsed;
        affected.push(node.id.clone());
      }
    }

    debug!(
      node_id,
      collapsed,
      affected = affected.len(),
      "node collapse toggled"
    );
    self.emit(StoreEvent::CollapseToggled {
      node_id: node_id.to_string(),
      collapsed,
      affected,
    });
    true
  }

  /// Append a node. `hidden` is forced to `false`.
  ///
  /// Id uniqueness is the caller's job; a duplicate is appended anyway and
  /// logged.
  pub fn add_node(&mut self, mut node: Node) {
    if self.state.node(&node.id).is_some() {
      warn!(node_id = %node.id, "adding node with duplicate id");
    }

    node.hidden = false;
    let node_id = node.id.clone();
    self.state.nodes.push(node);

    debug!(node_id = %node_id, "node added");
    self.emit(StoreEvent::NodeAdded { node_id });
  }

  /// Append an edge as given, without deduplication.
  pub fn add_edge(&mut self, edge: Edge) {
    let edge_id = edge.id.clone();
    debug!(edge_id = %edge_id, source = %edge.source, target = %edge.target, "edge added");
    self.state.edges.push(edge);
    self.emit(StoreEvent::EdgeAdded { edge_id });
  }

  /// Connect two nodes with an edge whose id is derived from its endpoints.
  pub fn connect(&mut self, source: &str, target: &str) {
    self.add_edge(Edge::connect(source, target));
  }

  /// Remove a node and every edge that starts or ends at it.
  ///
  /// Descendants are not deleted and keep their `hidden` flag. The selection is
  /// not cleared even if it pointed at the removed node.
  pub fn delete_node(&mut self, node_id: &str) -> bool {
    let Some(index) = self.state.nodes.iter().position(|n| n.id == node_id) else {
      debug!(node_id, "delete ignored: node not found");
      return false;
    };

    self.state.nodes.remove(index);

    let mut removed_edges = Vec::new();
    self.state.edges.retain(|e| {
      let touches = e.source == node_id || e.target == node_id;
      if touches {
        removed_edges.push(e.id.clone());
      }
      !touches
    });

    debug!(node_id, removed_edges = removed_edges.len(), "node deleted");
    self.emit(StoreEvent::NodeDeleted {
      node_id: node_id.to_string(),
      removed_edges,
    });
    true
  }

  fn node_mut(&mut self, node_id: &str) -> Option<&mut Node> {
    self.state.nodes.iter_mut().find(|n| n.id == node_id)
  }

  fn emit(&self, event: StoreEvent) {
    self.observer.notify(event);
  }
}
