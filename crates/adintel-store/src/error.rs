use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read corpus file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse corpus file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize corpus: {0}")]
    Serialize(#[from] serde_json::Error),
}
