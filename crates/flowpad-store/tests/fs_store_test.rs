//! Integration tests for FsWorkflowStore on a real temporary directory.

use flowpad_config::{Node, NodeType, WorkflowDocument, sample_workflow};
use flowpad_store::{FsWorkflowStore, StoreError, WorkflowPersistence};

#[tokio::test]
async fn test_load_without_saved_state() {
  let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
  let store = FsWorkflowStore::new(temp_dir.path());

  assert_eq!(store.load().await.unwrap(), None);
}

#[tokio::test]
async fn test_save_creates_root_and_round_trips() {
  let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
  let store = FsWorkflowStore::new(temp_dir.path().join("nested").join("data"));

  let mut doc = sample_workflow();
  doc.nodes[0].is_collapsed = true;
  store.save(&doc).await.unwrap();

  assert!(store.state_path().exists());
  assert_eq!(store.load().await.unwrap(), Some(doc));
}

#[tokio::test]
async fn test_saved_file_uses_camel_case_shape() {
  let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
  let store = FsWorkflowStore::new(temp_dir.path());

  let mut node = Node::new("n1", NodeType::Decision, "Check");
  node.is_collapsed = true;
  store
    .save(&WorkflowDocument::new(vec![node], vec![]))
    .await
    .unwrap();

  let raw = std::fs::read_to_string(store.state_path()).unwrap();
  let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
  assert_eq!(value["nodes"][0]["type"], "decision");
  assert_eq!(value["nodes"][0]["isCollapsed"], true);
  assert!(value["edges"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_clear_is_idempotent() {
  let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
  let store = FsWorkflowStore::new(temp_dir.path());

  store.save(&sample_workflow()).await.unwrap();
  store.clear().await.unwrap();
  assert_eq!(store.load().await.unwrap(), None);

  store.clear().await.unwrap();
}

#[tokio::test]
async fn test_malformed_file() {
  let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
  let store = FsWorkflowStore::new(temp_dir.path());
  std::fs::write(store.state_path(), "not json").unwrap();

  assert!(matches!(
    store.load().await,
    Err(StoreError::Serialization(_))
  ));
}
