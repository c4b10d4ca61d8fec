//! Store change events for observers.
//!
//! The store emits one event after every mutation it actually applies, so a
//! renderer can redraw or a host can schedule a save. Calls that hit an
//! unknown node id emit nothing.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreEvent {
  /// Nodes and edges were replaced wholesale.
  Loaded { nodes: usize, edges: usize },

  /// The selection changed.
  Selected { node_id: Option<String> },

  /// Edit mode was switched.
  EditModeChanged { edit_mode: bool },

  /// A node's config was merged.
  ConfigUpdated { node_id: String },

  /// A node's collapse flag flipped and its descendants were hidden or shown.
  CollapseToggled {
    node_id: String,
    collapsed: bool,
    affected: Vec<String>,
  },

  /// A node was appended.
  NodeAdded { node_id: String },

  /// An edge was appended.
  EdgeAdded { edge_id: String },

  /// A node and every edge touching it were removed.
  NodeDeleted {
    node_id: String,
    removed_edges: Vec<String>,
  },
}

/// Trait for receiving store events.
pub trait StoreObserver: Send + Sync {
  /// Called after a mutation has been applied.
  fn notify(&self, event: StoreEvent);
}

/// An observer that discards all events.
#[derive(Debug, Clone, Default)]
pub struct NoopObserver;

impl StoreObserver for NoopObserver {
  fn notify(&self, _event: StoreEvent) {}
}

/// An observer that forwards events to an unbounded channel.
///
/// Sending never blocks the store. Events are dropped once the receiver is gone.
#[derive(Debug, Clone)]
pub struct ChannelObserver {
  sender: mpsc::UnboundedSender<StoreEvent>,
}

impl ChannelObserver {
  pub fn new(sender: mpsc::UnboundedSender<StoreEvent>) -> Self {
    Self { sender }
  }

  /// Create an observer together with the receiving end of its channel.
  pub fn channel() -> (Self, mpsc::UnboundedReceiver<StoreEvent>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (Self::new(sender), receiver)
  }
}

impl StoreObserver for ChannelObserver {
  fn notify(&self, event: StoreEvent) {
    // Receiver may have been dropped
    let _ = self.sender.send(event);
  }
}
