//! Host-side editing session: one graph store plus the storage it is saved to.

use anyhow::{Result, bail};
use flowpad_config::sample_workflow;
use flowpad_store::WorkflowPersistence;
use flowpad_workflow::WorkflowStore;
use tracing::{info, warn};

pub struct Session<P> {
  store: WorkflowStore,
  persistence: P,
}

impl<P: WorkflowPersistence> Session<P> {
  /// Load the saved workflow, or the sample workflow when nothing is saved.
  ///
  /// A storage failure is logged and treated as "nothing saved".
  pub async fn open(persistence: P, edit_mode: bool) -> Self {
    let document = match persistence.load().await {
      Ok(Some(document)) => document,
      Ok(None) => {
        info!("no saved workflow, using sample");
        sample_workflow()
      }
      Err(e) => {
        warn!(error = %e, "failed to load saved workflow, using sample");
        sample_workflow()
      }
    };

    let mut store = WorkflowStore::from_document(document);
    store.set_edit_mode(edit_mode);

    Self { store, persistence }
  }

  pub fn store(&self) -> &WorkflowStore {
    &self.store
  }

  /// Mutable store access for user intents that require edit mode.
  pub fn edit(&mut self) -> Result<&mut WorkflowStore> {
    if !self.store.state().edit_mode {
      bail!("workflow is open read-only; drop --read-only to edit");
    }
    Ok(&mut self.store)
  }

  /// Mutable store access for intents allowed while viewing.
  pub fn view_mut(&mut self) -> &mut WorkflowStore {
    &mut self.store
  }

  /// Persist the current nodes and edges.
  ///
  /// Failures are logged only; the in-memory store is never rolled back.
  pub async fn save(&self) {
    if let Err(e) = self.persistence.save(&self.store.document()).await {
      warn!(error = %e, "failed to save workflow");
    }
  }

  /// Drop the saved workflow and start over from the sample.
  pub async fn reset(&mut self) {
    if let Err(e) = self.persistence.clear().await {
      warn!(error = %e, "failed to clear saved workflow");
    }
    self.store.load_document(sample_workflow());
  }

  /// Render the visible nodes and edges as pretty JSON.
  pub fn render_view(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(&self.store.view())?)
  }

  /// Toggle a node's collapse flag and render the resulting view.
  ///
  /// Only `is_collapsed` is persisted. A reopened session starts fully
  /// visible, so the hidden subtree only shows in the returned view. Nothing
  /// is written in view mode.
  pub async fn collapse(&mut self, node_id: &str) -> Result<String> {
    self.store.toggle_collapse(node_id);
    if self.store.state().edit_mode {
      self.save().await;
    }
    self.render_view()
  }
}
