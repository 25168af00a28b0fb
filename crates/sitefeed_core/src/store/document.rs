//! Document load/save against single YAML files.
//!
//! # Responsibility
//! - Read one file into an ordered record document.
//! - Rewrite one file from an in-memory document.
//!
//! # Invariants
//! - Absent, empty and explicit-null files load as the empty document.
//! - Any other content must be a YAML sequence of mappings.
//! - Save is one whole-file write; there is no temp-file rename, so a crash
//!   mid-write can leave a truncated document.

use super::{Document, StoreError, StoreResult};
use crate::model::record::{value_kind, Record};
use log::{error, info};
use serde_yaml::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

/// Loads the document at `path`.
///
/// Absent, empty and explicit-null files load as the empty document. Any
/// other content must parse as a YAML sequence of mappings.
///
/// # Side effects
/// - Emits `document_load` logging events with duration and status.
pub fn load_document(path: impl AsRef<Path>) -> StoreResult<Document> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=document_load module=store status=start path={}",
        path.display()
    );

    match read_document(path) {
        Ok(document) => {
            info!(
                "event=document_load module=store status=ok path={} records={} duration_ms={}",
                path.display(),
                document.len(),
                started_at.elapsed().as_millis()
            );
            Ok(document)
        }
        Err(err) => {
            error!(
                "event=document_load module=store status=error path={} duration_ms={} error_code=document_load_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Saves `document` to `path`, replacing any prior content.
///
/// # Side effects
/// - Overwrites the target file.
/// - Emits `document_save` logging events with duration and status.
pub fn save_document(path: impl AsRef<Path>, document: &Document) -> StoreResult<()> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=document_save module=store status=start path={} records={}",
        path.display(),
        document.len()
    );

    match write_document(path, document) {
        Ok(()) => {
            info!(
                "event=document_save module=store status=ok path={} records={} duration_ms={}",
                path.display(),
                document.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=document_save module=store status=error path={} duration_ms={} error_code=document_save_failed error={}",
                path.display(),
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn read_document(path: &Path) -> StoreResult<Document> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Document::new()),
        Err(err) => return Err(err.into()),
    };

    // Whitespace-only files are the empty document, same as absent files.
    if text.trim().is_empty() {
        return Ok(Document::new());
    }

    parse_document(path, &text)
}

fn parse_document(path: &Path, text: &str) -> StoreResult<Document> {
    let value: Value = serde_yaml::from_str(text)?;
    let elements = match value {
        Value::Null => return Ok(Document::new()),
        Value::Sequence(elements) => elements,
        other => {
            return Err(StoreError::InvalidDocument {
                path: path.to_path_buf(),
                details: format!("expected a sequence of records, got {}", value_kind(&other)),
            })
        }
    };

    let mut document = Document::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        match element {
            Value::Mapping(fields) => document.push(Record::from_fields(fields)),
            other => {
                return Err(StoreError::InvalidDocument {
                    path: path.to_path_buf(),
                    details: format!(
                        "record at index {index} is not a mapping, got {}",
                        value_kind(&other)
                    ),
                })
            }
        }
    }

    Ok(document)
}

fn write_document(path: &Path, document: &Document) -> StoreResult<()> {
    // One whole-file write, no temp-file rename or backup: a crash during
    // the write can leave the file truncated.
    let yaml = serde_yaml::to_string(document)?;
    fs::write(path, yaml)?;
    Ok(())
}
