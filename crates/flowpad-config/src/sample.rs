use serde_json::json;

use crate::config::ConfigMap;
use crate::document::WorkflowDocument;
use crate::edge::Edge;
use crate::node::{Node, NodeType};

fn config(value: serde_json::Value) -> ConfigMap {
  match value {
    serde_json::Value::Object(map) => map,
    _ => ConfigMap::new(),
  }
}

/// Built-in default workflow, used when nothing has been saved yet.
///
/// A job application pipeline with a Yes/No decision branch.
pub fn sample_workflow() -> WorkflowDocument {
  let nodes = vec![
    Node::new("start", NodeType::Start, "Application Submitted")
      .with_position(100.0, 50.0)
      .with_config(config(json!({ "form": "job_application_form" }))),
    Node::new("sendEmail", NodeType::Action, "Send Confirmation Email")
      .with_position(100.0, 150.0)
      .with_config(config(
        json!({ "template": "thanks_for_applying", "service": "SendGrid" }),
      )),
    Node::new("screening", NodeType::Action, "Initial Screening")
      .with_position(100.0, 250.0)
      .with_config(config(json!({ "screeningTool": "ResumeScannerPro" }))),
    Node::new("checkQualified", NodeType::Decision, "Meets Job Criteria?")
      .with_position(100.0, 350.0)
      .with_config(config(json!({ "condition": "resumeScore >= 70" }))),
    Node::new("scheduleInterview", NodeType::Action, "Schedule Interview")
      .with_position(-100.0, 500.0)
      .with_config(config(json!({ "tool": "Calendly", "duration": "30min" }))),
    Node::new("sendRejection", NodeType::Action, "Send Rejection Email")
      .with_position(300.0, 500.0)
      .with_config(config(
        json!({ "template": "rejection_email", "service": "SendGrid" }),
      )),
    Node::new("end", NodeType::Terminal, "Process Complete")
      .with_position(100.0, 700.0)
      .with_config(config(json!({ "status": "done" }))),
  ];

  let edges = vec![
    Edge::new("e1", "start", "sendEmail"),
    Edge::new("e2", "sendEmail", "screening"),
    Edge::new("e3", "screening", "checkQualified"),
    Edge::new("e4", "checkQualified", "scheduleInterview").with_branch("yes", "Yes"),
    Edge::new("e5", "checkQualified", "sendRejection").with_branch("no", "No"),
    Edge::new("e6", "scheduleInterview", "end"),
    Edge::new("e7", "sendRejection", "end"),
  ];

  WorkflowDocument::new(nodes, edges)
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  #[test]
  fn test_sample_has_single_start_and_unique_ids() {
    let doc = sample_workflow();

    let starts = doc
      .nodes
      .iter()
      .filter(|n| n.node_type == NodeType::Start)
      .count();
    assert_eq!(starts, 1);

    let node_ids: HashSet<_> = doc.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(node_ids.len(), doc.nodes.len());

    let edge_ids: HashSet<_> = doc.edges.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(edge_ids.len(), doc.edges.len());
  }

  #[test]
  fn test_sample_edges_reference_existing_nodes() {
    let doc = sample_workflow();
    let node_ids: HashSet<_> = doc.nodes.iter().map(|n| n.id.as_str()).collect();

    for edge in &doc.edges {
      assert!(node_ids.contains(edge.source.as_str()), "{}", edge.id);
      assert!(node_ids.contains(edge.target.as_str()), "{}", edge.id);
    }
  }

  #[test]
  fn test_sample_round_trips_through_json() {
    let doc = sample_workflow();
    let json = serde_json::to_string(&doc).unwrap();
    let back: WorkflowDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(back, doc);
  }
}
