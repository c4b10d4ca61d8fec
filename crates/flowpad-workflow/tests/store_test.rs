//! Integration tests for WorkflowStore against the sample workflow and
//! randomly generated graphs.

use std::collections::HashSet;

use flowpad_workflow::{
  Edge, Node, NodeType, WorkflowDocument, WorkflowStore, descendants, sample_workflow,
};
use proptest::prelude::*;

fn hidden_ids(store: &WorkflowStore) -> HashSet<String> {
  store
    .state()
    .nodes
    .iter()
    .filter(|n| n.hidden)
    .map(|n| n.id.clone())
    .collect()
}

fn ids(items: &[&str]) -> HashSet<String> {
  items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_collapse_decision_hides_both_branches_and_join() {
  let mut store = WorkflowStore::from_document(sample_workflow());

  store.toggle_collapse("checkQualified");
  assert_eq!(
    hidden_ids(&store),
    ids(&["scheduleInterview", "sendRejection", "end"])
  );

  let view = store.view();
  let visible: Vec<_> = view.nodes.iter().map(|n| n.node.id.as_str()).collect();
  assert_eq!(
    visible,
    ["start", "sendEmail", "screening", "checkQualified"]
  );
  let edges: Vec<_> = view.edges.iter().map(|e| e.id.as_str()).collect();
  assert_eq!(edges, ["e1", "e2", "e3"]);

  store.toggle_collapse("checkQualified");
  assert!(hidden_ids(&store).is_empty());
}

#[test]
fn test_collapse_start_hides_everything_else() {
  let mut store = WorkflowStore::from_document(sample_workflow());
  store.toggle_collapse("start");

  let expected: HashSet<String> = sample_workflow()
    .nodes
    .into_iter()
    .map(|n| n.id)
    .filter(|id| id != "start")
    .collect();
  assert_eq!(hidden_ids(&store), expected);
  assert_eq!(store.view().nodes.len(), 1);
}

#[test]
fn test_delete_breaks_reachability_but_keeps_downstream() {
  let mut store = WorkflowStore::from_document(WorkflowDocument::new(
    vec![
      Node::new("A", NodeType::Start, "A"),
      Node::new("B", NodeType::Action, "B"),
      Node::new("C", NodeType::Terminal, "C"),
    ],
    vec![Edge::new("e1", "A", "B"), Edge::new("e2", "B", "C")],
  ));

  store.delete_node("B");

  assert!(store.state().edges.is_empty());
  assert!(!store.node("C").unwrap().hidden);
  assert!(descendants("A", &store.state().edges).is_empty());
}

#[test]
fn test_cycle_collapse_terminates() {
  let mut store = WorkflowStore::from_document(WorkflowDocument::new(
    vec![
      Node::new("A", NodeType::Action, "A"),
      Node::new("B", NodeType::Action, "B"),
    ],
    vec![Edge::new("e1", "A", "B"), Edge::new("e2", "B", "A")],
  ));

  store.toggle_collapse("A");
  assert_eq!(hidden_ids(&store), ids(&["B"]));
}

#[test]
fn test_document_survives_json_reload() {
  let mut store = WorkflowStore::from_document(sample_workflow());
  store.toggle_collapse("screening");
  store.connect("sendRejection", "screening");

  let json = serde_json::to_string(&store.document()).unwrap();
  let reloaded = WorkflowStore::from_document(serde_json::from_str(&json).unwrap());

  // Collapse flags persist, visibility does not.
  assert!(reloaded.node("screening").unwrap().is_collapsed);
  assert!(hidden_ids(&reloaded).is_empty());
  assert_eq!(reloaded.state().edges.len(), store.state().edges.len());
}

fn arb_document() -> impl Strategy<Value = WorkflowDocument> {
  (1usize..10)
    .prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..20)))
    .prop_map(|(n, pairs)| {
      let nodes = (0..n)
        .map(|i| Node::new(format!("n{i}"), NodeType::Action, format!("Node {i}")))
        .collect();
      let edges = pairs
        .into_iter()
        .enumerate()
        .map(|(i, (s, t))| Edge::new(format!("e{i}"), format!("n{s}"), format!("n{t}")))
        .collect();
      WorkflowDocument::new(nodes, edges)
    })
}

proptest! {
  #[test]
  fn prop_collapse_twice_restores_visibility(doc in arb_document(), pick in any::<prop::sample::Index>()) {
    let target = doc.nodes[pick.index(doc.nodes.len())].id.clone();
    let mut store = WorkflowStore::from_document(doc);
    let before = store.snapshot();

    store.toggle_collapse(&target);
    let expected = descendants(&target, &store.state().edges);
    prop_assert_eq!(hidden_ids(&store), expected);

    store.toggle_collapse(&target);
    prop_assert_eq!(store.snapshot(), before);
  }

  #[test]
  fn prop_unique_ids_stay_unique(doc in arb_document(), extra in 0usize..5) {
    let mut store = WorkflowStore::new();
    store.load_document(doc);
    for i in 0..extra {
      store.add_node(Node::new(format!("added{i}"), NodeType::Terminal, "added"));
    }

    let unique: HashSet<_> = store.state().nodes.iter().map(|n| n.id.as_str()).collect();
    prop_assert_eq!(unique.len(), store.state().nodes.len());
  }
}
