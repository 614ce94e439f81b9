use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading lexicon files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON from '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid lexicon in '{0}': root must be an object")]
    NotAnObject(PathBuf),
    #[error("file name '{0}' is not a language pair such as en-hi.json")]
    InvalidPairName(PathBuf),
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}
