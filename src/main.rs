mod logging;
mod session;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use flowpad_config::{Edge, Node, NodeType, parse_config};
use flowpad_store::FsWorkflowStore;
use flowpad_workflow::descendants;

use crate::session::Session;

/// Flowpad - inspect and edit a workflow graph stored on disk
#[derive(Parser)]
#[command(name = "flowpad")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Path to the data directory (default: ~/.flowpad)
  #[arg(long, global = true)]
  data_dir: Option<PathBuf>,

  /// Open the workflow in view mode; editing commands are refused and
  /// nothing is saved
  #[arg(long, global = true)]
  read_only: bool,

  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Print the visible nodes and edges as JSON
  Show {
    /// Print the full state, hidden nodes included
    #[arg(long)]
    all: bool,
  },

  /// List every node reachable from a node
  Descendants { node_id: String },

  /// Select a node and print its details
  Select { node_id: String },

  /// Collapse or expand a node and print the resulting visible graph
  ///
  /// Only the collapse flag is saved. Hidden descendants are shown again the
  /// next time the workflow is opened, so the printed view is the only
  /// collapsed rendering.
  Collapse { node_id: String },

  /// Merge a JSON object into a node's config
  Config {
    node_id: String,
    /// Raw JSON object, e.g. '{"tool": "Calendly"}'
    json: String,
  },

  /// Add a node
  AddNode {
    id: String,
    /// One of start, action, decision, terminal
    #[arg(long = "type")]
    node_type: NodeType,
    #[arg(long)]
    label: String,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    x: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    y: f64,
    /// Initial config as a raw JSON object
    #[arg(long)]
    config: Option<String>,
  },

  /// Connect two nodes with an edge
  Connect {
    source: String,
    target: String,
    /// Branch handle on the source node, e.g. "yes"
    #[arg(long)]
    handle: Option<String>,
    /// Edge label, e.g. "Yes"
    #[arg(long)]
    label: Option<String>,
  },

  /// Delete a node and the edges touching it
  DeleteNode { node_id: String },

  /// Discard the saved workflow and restore the sample
  Reset,
}

fn main() -> Result<()> {
  logging::init();
  let cli = Cli::parse();

  let data_dir = match cli.data_dir {
    Some(dir) => dir,
    None => dirs::home_dir()
      .context("could not determine home directory")?
      .join(".flowpad"),
  };

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(run(cli.command, data_dir, !cli.read_only))
}

async fn run(command: Option<Commands>, data_dir: PathBuf, edit_mode: bool) -> Result<()> {
  let Some(command) = command else {
    println!("flowpad - use --help to see available commands");
    return Ok(());
  };

  let mut session = Session::open(FsWorkflowStore::new(&data_dir), edit_mode).await;

  match command {
    Commands::Show { all } => {
      let output = if all {
        serde_json::to_string_pretty(session.store().state())?
      } else {
        session.render_view()?
      };
      println!("{output}");
    }

    Commands::Descendants { node_id } => {
      require_node(&session, &node_id)?;
      let mut found: Vec<_> = descendants(&node_id, &session.store().state().edges)
        .into_iter()
        .collect();
      found.sort();
      for id in found {
        println!("{id}");
      }
    }

    Commands::Select { node_id } => {
      require_node(&session, &node_id)?;
      let store = session.view_mut();
      store.select(Some(node_id));
      if let Some(node) = store.selected_node() {
        println!("{}", serde_json::to_string_pretty(node)?);
      }
    }

    Commands::Collapse { node_id } => {
      require_node(&session, &node_id)?;
      println!("{}", session.collapse(&node_id).await?);
    }

    Commands::Config { node_id, json } => {
      require_node(&session, &node_id)?;
      session
        .edit()?
        .update_config_from_json(&node_id, &json)
        .context("config not saved")?;
      session.save().await;
      eprintln!("Updated config of '{node_id}'");
    }

    Commands::AddNode {
      id,
      node_type,
      label,
      x,
      y,
      config,
    } => {
      if session.store().node(&id).is_some() {
        bail!("node '{id}' already exists");
      }

      let mut node = Node::new(id.clone(), node_type, label).with_position(x, y);
      if let Some(raw) = config {
        node = node.with_config(parse_config(&raw).context("invalid --config")?);
      }

      session.edit()?.add_node(node);
      session.save().await;
      eprintln!("Added node '{id}'");
    }

    Commands::Connect {
      source,
      target,
      handle,
      label,
    } => {
      require_node(&session, &source)?;
      require_node(&session, &target)?;

      let mut edge = Edge::connect(&source, &target);
      edge.source_handle = handle;
      edge.label = label;
      let edge_id = edge.id.clone();

      session.edit()?.add_edge(edge);
      session.save().await;
      eprintln!("Added edge '{edge_id}'");
    }

    Commands::DeleteNode { node_id } => {
      require_node(&session, &node_id)?;
      session.edit()?.delete_node(&node_id);
      session.save().await;
      eprintln!("Deleted node '{node_id}'");
    }

    Commands::Reset => {
      session.edit()?;
      session.reset().await;
      eprintln!("Workflow reset to the sample");
    }
  }

  Ok(())
}

/// The store ignores unknown ids, so the CLI checks them up front to tell the user.
fn require_node<P: flowpad_store::WorkflowPersistence>(
  session: &Session<P>,
  node_id: &str,
) -> Result<()> {
  if session.store().node(node_id).is_none() {
    bail!("node '{node_id}' not found");
  }
  Ok(())
}
