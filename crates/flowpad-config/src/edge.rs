use serde::{Deserialize, Serialize};

/// A directed transition between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
  pub id: String,
  pub source: String,
  pub target: String,
  /// Which exit of a multi-branch node this edge leaves from, e.g. "yes"/"no".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub source_handle: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub label: Option<String>,
}

impl Edge {
  pub fn new(
    id: impl Into<String>,
    source: impl Into<String>,
    target: impl Into<String>,
  ) -> Self {
    Self {
      id: id.into(),
      source: source.into(),
      target: target.into(),
      source_handle: None,
      label: None,
    }
  }

  /// Edge created by connecting two nodes on the canvas.
  ///
  /// The id is derived as `e-{source}-{target}`.
  pub fn connect(source: impl Into<String>, target: impl Into<String>) -> Self {
    let source = source.into();
    let target = target.into();
    Self::new(format!("e-{source}-{target}"), source, target)
  }

  /// Attach a branch handle and its display label.
  pub fn with_branch(mut self, handle: impl Into<String>, label: impl Into<String>) -> Self {
    self.source_handle = Some(handle.into());
    self.label = Some(label.into());
    self
  }
}
