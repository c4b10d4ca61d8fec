use serde::{Deserialize, Serialize};

use crate::config::ConfigMap;

/// The closed set of workflow step kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
  Start,
  Action,
  Decision,
  Terminal,
}

impl NodeType {
  pub fn as_str(&self) -> &'static str {
    match self {
      NodeType::Start => "start",
      NodeType::Action => "action",
      NodeType::Decision => "decision",
      NodeType::Terminal => "terminal",
    }
  }
}

impl std::fmt::Display for NodeType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::str::FromStr for NodeType {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "start" => Ok(NodeType::Start),
      "action" => Ok(NodeType::Action),
      "decision" => Ok(NodeType::Decision),
      "terminal" => Ok(NodeType::Terminal),
      other => Err(format!(
        "unknown node type '{other}' (expected start, action, decision or terminal)"
      )),
    }
  }
}

/// Canvas coordinate. Advisory only, the graph store never reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
  pub x: f64,
  pub y: f64,
}

impl Position {
  pub fn new(x: f64, y: f64) -> Self {
    Self { x, y }
  }
}

/// One workflow step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
  pub id: String,
  #[serde(rename = "type")]
  pub node_type: NodeType,
  pub label: String,
  #[serde(default)]
  pub config: ConfigMap,
  #[serde(default)]
  pub position: Position,
  #[serde(default)]
  pub is_collapsed: bool,
  /// Set by the collapse cascade of an ancestor. Not user settable.
  #[serde(default)]
  pub hidden: bool,
}

impl Node {
  /// Create an expanded, visible node with an empty config.
  pub fn new(id: impl Into<String>, node_type: NodeType, label: impl Into<String>) -> Self {
    Self {
      id: id.into(),
      node_type,
      label: label.into(),
      config: ConfigMap::new(),
      position: Position::default(),
      is_collapsed: false,
      hidden: false,
    }
  }

  pub fn with_position(mut self, x: f64, y: f64) -> Self {
    self.position = Position::new(x, y);
    self
  }

  pub fn with_config(mut self, config: ConfigMap) -> Self {
    self.config = config;
    self
  }
}
