use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("failed to read seed file {path}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
