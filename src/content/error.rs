use std::path::PathBuf;

use super::key::ContentKey;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid {key} content in {}: {source}", .path.display())]
    Parse {
        key: ContentKey,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("missing {key} content: expected {}", .path.display())]
    Missing { key: ContentKey, path: PathBuf },

    #[error("unknown content key: {0}")]
    UnknownKey(String),

    #[error("content has not been loaded")]
    NotLoaded,

    #[error("failed to encode content: {0}")]
    Encode(#[from] serde_json::Error),
}
