//! Flowpad Store
//!
//! This crate provides the persistence trait and implementations for workflow
//! documents. A document is saved as a single JSON object
//! `{ "nodes": [...], "edges": [...] }`.
//!
//! The [`WorkflowPersistence`] trait defines three operations:
//! - Saving the current document
//! - Loading the last saved document, if any
//! - Clearing what was saved

mod fs;
mod memory;

pub use fs::FsWorkflowStore;
pub use memory::InMemoryWorkflowStore;

use async_trait::async_trait;
use flowpad_config::WorkflowDocument;

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  /// Reading or writing the backing storage failed.
  #[error("storage io error: {0}")]
  Io(#[from] std::io::Error),

  /// The stored payload could not be encoded or decoded.
  #[error("serialization error: {0}")]
  Serialization(#[from] serde_json::Error),
}

/// Storage trait for the workflow being edited.
#[async_trait]
pub trait WorkflowPersistence: Send + Sync {
  /// Save the document, replacing whatever was saved before.
  async fn save(&self, document: &WorkflowDocument) -> Result<(), StoreError>;

  /// Load the last saved document. `None` when nothing has been saved.
  async fn load(&self) -> Result<Option<WorkflowDocument>, StoreError>;

  /// Forget the saved document. Clearing empty storage is not an error.
  async fn clear(&self) -> Result<(), StoreError>;
}
