//! Reading and writing the OpenAPI JSON document.
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse JSON in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize document")]
    Serialize(#[source] serde_json::Error),
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub fn read_document(path: impl AsRef<Path>) -> Result<Value, DocumentError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write `document` pretty-printed with 2-space indentation, truncating any
/// existing file. Parent directories must already exist.
pub fn write_document(path: impl AsRef<Path>, document: &Value) -> Result<(), DocumentError> {
    let path = path.as_ref();
    let source = serde_json::to_string_pretty(document).map_err(DocumentError::Serialize)?;
    std::fs::write(path, source).map_err(|source| DocumentError::Write {
        path: path.to_path_buf(),
        source,
    })
}

// ------------------------------- Tests ------------------------------------ //
