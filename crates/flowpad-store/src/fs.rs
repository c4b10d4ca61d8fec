use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use flowpad_config::WorkflowDocument;
use tokio::fs;
use tracing::debug;

use crate::{StoreError, WorkflowPersistence};

/// File name of the saved workflow inside the store root.
const STATE_FILE: &str = "workflow_state.json";

/// Filesystem-based workflow store.
///
/// The document is kept in a single file:
/// ```text
/// {root}/
/// └── workflow_state.json
/// ```
pub struct FsWorkflowStore {
  root: PathBuf,
}

impl FsWorkflowStore {
  /// Create a new filesystem store at the given root path.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    Self { root: root.into() }
  }

  /// Get the root directory of the store.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Path of the saved workflow file.
  pub fn state_path(&self) -> PathBuf {
    self.root.join(STATE_FILE)
  }
}

#[async_trait]
impl WorkflowPersistence for FsWorkflowStore {
  async fn save(&self, document: &WorkflowDocument) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(document)?;
    fs::create_dir_all(&self.root).await?;
    fs::write(self.state_path(), content).await?;

    debug!(path = %self.state_path().display(), nodes = document.nodes.len(), "workflow saved");
    Ok(())
  }

  async fn load(&self) -> Result<Option<WorkflowDocument>, StoreError> {
    let content = match fs::read_to_string(self.state_path()).await {
      Ok(content) => content,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    let document: WorkflowDocument = serde_json::from_str(&content)?;
    debug!(path = %self.state_path().display(), nodes = document.nodes.len(), "workflow loaded");
    Ok(Some(document))
  }

  async fn clear(&self) -> Result<(), StoreError> {
    match fs::remove_file(self.state_path()).await {
      Ok(()) => {
        debug!(path = %self.state_path().display(), "workflow cleared");
        Ok(())
      }
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
      Err(e) => Err(e.into()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_state_path() {
    let store = FsWorkflowStore::new("/tmp/flowpad");
    assert_eq!(
      store.state_path(),
      PathBuf::from("/tmp/flowpad/workflow_state.json")
    );
  }
}
