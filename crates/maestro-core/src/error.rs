//! Error types for catalog loading.

use thiserror::Error;

/// Per-file catalog loading problems.
///
/// Loading never fails as a whole: each problem degrades the affected
/// catalog to empty and is reported as a warning in the
/// [`LoadReport`](crate::store::LoadReport).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file absent or unreadable.
    #[error("cannot read catalog file '{file}': {message}")]
    Unreadable { file: String, message: String },

    /// Catalog file present but not a valid catalog JSON object.
    #[error("invalid catalog JSON in '{file}': {message}")]
    Invalid { file: String, message: String },
}

impl CatalogError {
    /// The dataset file the problem belongs to.
    pub fn file(&self) -> &str {
        match self {
            CatalogError::Unreadable { file, .. } => file,
            CatalogError::Invalid { file, .. } => file,
        }
    }
}
