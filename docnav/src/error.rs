use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavDataError {
    #[error("invalid navigation data: {0}")]
    Parse(#[from] serde_json::Error),
}
