//! Flowpad Workflow
//!
//! This crate provides the in-memory workflow graph store for flowpad.
//! The store is the single source of truth for the nodes and edges being
//! edited; renderers read snapshots and feed user intents back as calls to
//! the store's operations.
//!
//! Key pieces:
//! - [`WorkflowStore`] owns the canonical [`WorkflowState`] and applies a fixed
//!   set of synchronous mutations
//! - [`Graph`] resolves the transitive descendants used by the collapse cascade
//! - [`WorkflowView`] is the read-only projection a renderer draws
//! - [`StoreObserver`] receives a [`StoreEvent`] after every applied mutation
//!
//! Operations that reference an unknown node id are silent no-ops.

mod error;
mod events;
mod graph;
mod state;
mod store;
mod view;

pub use error::WorkflowError;
pub use events::{ChannelObserver, NoopObserver, StoreEvent, StoreObserver};
pub use graph::{Graph, descendants};
pub use state::WorkflowState;
pub use store::WorkflowStore;
pub use view::{VisibleNode, WorkflowView};

pub use flowpad_config::{
  ConfigMap, Edge, Node, NodeType, Position, WorkflowDocument, sample_workflow,
};
