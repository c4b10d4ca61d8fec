use async_trait::async_trait;
use flowpad_config::WorkflowDocument;
use tokio::sync::Mutex;

use crate::{StoreError, WorkflowPersistence};

/// In-memory workflow store.
///
/// Keeps the serialized JSON rather than the document itself so that a load
/// goes through the same decoding as the filesystem store. Suitable for tests.
#[derive(Debug, Default)]
pub struct InMemoryWorkflowStore {
  data: Mutex<Option<String>>,
}

impl InMemoryWorkflowStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Create a store that already holds the given raw payload.
  pub fn with_raw(raw: impl Into<String>) -> Self {
    Self {
      data: Mutex::new(Some(raw.into())),
    }
  }
}

#[async_trait]
impl WorkflowPersistence for InMemoryWorkflowStore {
  async fn save(&self, document: &WorkflowDocument) -> Result<(), StoreError> {
    let content = serde_json::to_string(document)?;
    *self.data.lock().await = Some(content);
    Ok(())
  }

  async fn load(&self) -> Result<Option<WorkflowDocument>, StoreError> {
    match self.data.lock().await.as_deref() {
      Some(content) => Ok(Some(serde_json::from_str(content)?)),
      None => Ok(None),
    }
  }

  async fn clear(&self) -> Result<(), StoreError> {
    *self.data.lock().await = None;
    Ok(())
  }
}
