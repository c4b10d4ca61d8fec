//! Flowpad Config
//!
//! This crate contains the serializable workflow document types for flowpad.
//! A document is the pair of node and edge lists that gets persisted and
//! handed to the graph store on load.
//!
//! Documents are read from and written to:
//! - The local `workflow_state.json` file (via `flowpad-store`)
//! - The built-in sample workflow when nothing has been saved yet
//!
//! The wire format is a JSON object `{ "nodes": [...], "edges": [...] }` with
//! camelCase field names.

mod config;
mod document;
mod edge;
mod node;
mod sample;

pub use config::{ConfigError, ConfigMap, parse_config};
pub use document::WorkflowDocument;
pub use edge::Edge;
pub use node::{Node, NodeType, Position};
pub use sample::sample_workflow;
