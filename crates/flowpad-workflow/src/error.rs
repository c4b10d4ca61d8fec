use flowpad_config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkflowError {
  #[error("invalid config for node '{node_id}'")]
  InvalidConfig {
    node_id: String,
    #[source]
    source: ConfigError,
  },
}
