//! Request processing error types.

use crate::domain::CatalogueError;
use crate::json::BuilderError;

/// Errors that stop a request document from being answered.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Reading the document failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid JSON or does not match the expected shape
    #[error("malformed request document: {0}")]
    Json(#[from] serde_json::Error),

    /// The network data is inconsistent
    #[error("catalogue error: {0}")]
    Catalogue(#[from] CatalogueError),

    /// A response could not be assembled
    #[error("response error: {0}")]
    Builder(#[from] BuilderError),
}
