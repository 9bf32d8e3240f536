use thiserror::Error;

/// Errors raised at the file boundary. The rotation core itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown landmark set `{0}`")]
    UnknownSet(String),
}

pub type Result<T> = std::result::Result<T, Error>;
