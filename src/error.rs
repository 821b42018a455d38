//! # Errors
//!
//! Error taxonomy of the schema crate. Only structural errors exist here:
//! the types carry no business logic, so nothing can fail at runtime except
//! turning documents into values and back.

use crate::codec::Format;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document is malformed or a field does not match its declared type
    #[error("failed to decode {format} document: {source}")]
    Decode {
        format: Format,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to encode {format} document: {source}")]
    Encode {
        format: Format,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// `apiVersion`/`kind` of the document do not name the expected type
    #[error("unexpected resource type: expected {expected}, found {found}")]
    UnexpectedType { expected: String, found: String },

    #[error("kind {0} is already registered")]
    AlreadyRegistered(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    pub(crate) fn decode(
        format: Format,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SchemaError::Decode {
            format,
            source: Box::new(source),
        }
    }

    pub(crate) fn encode(
        format: Format,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        SchemaError::Encode {
            format,
            source: Box::new(source),
        }
    }

    /// Whether this error came from a malformed or mistyped document
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(
            self,
            SchemaError::Decode { .. } | SchemaError::UnexpectedType { .. }
        )
    }
}

pub type Result<T, E = SchemaError> = std::result::Result<T, E>;
