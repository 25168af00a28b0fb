//! YAML document storage for the site data files.
//!
//! # Responsibility
//! - Load and save ordered record documents against single YAML files.
//! - Define the storage error taxonomy shared by the repo and service layers.
//!
//! # Invariants
//! - A loaded document is always a sequence of mappings; absent, empty and
//!   null files load as the empty document.
//! - Saving rewrites the whole file in block-structured YAML with field order
//!   preserved as written.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

use crate::model::record::Record;

mod document;

pub use document::{load_document, save_document};

/// Ordered list of records persisted in one file, newest first.
pub type Document = Vec<Record>;

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage error for document load/save operations.
#[derive(Debug)]
pub enum StoreError {
    /// Underlying file read or write failure.
    Io(std::io::Error),
    /// Content could not be parsed or encoded as YAML.
    Yaml(serde_yaml::Error),
    /// Parsed YAML does not have the sequence-of-mappings document shape.
    InvalidDocument { path: PathBuf, details: String },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Yaml(err) => write!(f, "{err}"),
            Self::InvalidDocument { path, details } => write!(
                f,
                "invalid document structure in `{}`: {details}",
                path.display()
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Yaml(err) => Some(err),
            Self::InvalidDocument { .. } => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_yaml::Error> for StoreError {
    fn from(value: serde_yaml::Error) -> Self {
        Self::Yaml(value)
    }
}
