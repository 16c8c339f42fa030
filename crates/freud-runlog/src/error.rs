use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunlogError {
    #[error("runlog serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
