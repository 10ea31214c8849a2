use std::io;
use std::path::PathBuf;

/// Failures of the score store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("score file {path} is not valid score data: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not read score file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write score file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not encode scores: {0}")]
    Encode(#[from] serde_json::Error),
}
