use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path:?} is not a JSON object of module names to icon names: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write the icon table: {0}")]
    Write(#[source] std::io::Error),
    #[error("failed to serialize the icon table: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("invalid config file {path:?}: {message}")]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
