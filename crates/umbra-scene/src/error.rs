//! Error types for scene loading and the plugin protocol.

use thiserror::Error;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur while loading scenes or handling plugin messages.
#[derive(Debug, Error)]
pub enum SceneError {
    /// A selected node id does not exist in the document.
    #[error("node not found: {id}")]
    NodeNotFound {
        /// The unresolved id.
        id: String,
    },

    /// I/O error reading or writing a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
