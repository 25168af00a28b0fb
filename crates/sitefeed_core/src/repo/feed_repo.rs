//! Feed repository contract and YAML-file implementation.
//!
//! # Responsibility
//! - Provide the prepend/load contract over one backing document.
//! - Keep file-format details inside the store boundary.
//!
//! # Invariants
//! - `prepend` inserts at index 0; prior records keep their relative order,
//!   shifted down by one.
//! - The read-modify-write cycle is not atomic against concurrent writers;
//!   the last writer wins.

use crate::model::record::Record;
use crate::store::{load_document, save_document, Document, StoreResult};
use std::path::{Path, PathBuf};

/// Relative path of the updates document inside a site checkout.
pub const UPDATES_FILE: &str = "_data/updates.yml";
/// Relative path of the publications document inside a site checkout.
pub const PUBLICATIONS_FILE: &str = "_data/publications.yml";

/// Repository interface for ordered feed documents.
pub trait FeedRepository {
    /// Inserts one record at the front of the backing document.
    fn prepend(&self, record: Record) -> StoreResult<()>;
    /// Loads the full backing document, newest record first.
    fn load(&self) -> StoreResult<Document>;
}

/// YAML-file-backed feed repository.
pub struct YamlFeedRepository {
    path: PathBuf,
}

impl YamlFeedRepository {
    /// Creates a repository over the document at `path`.
    ///
    /// The file may not exist yet; the first prepend creates it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository over `<site_root>/_data/updates.yml`.
    pub fn updates_in(site_root: impl AsRef<Path>) -> Self {
        Self::new(site_root.as_ref().join(UPDATES_FILE))
    }

    /// Creates a repository over `<site_root>/_data/publications.yml`.
    pub fn publications_in(site_root: impl AsRef<Path>) -> Self {
        Self::new(site_root.as_ref().join(PUBLICATIONS_FILE))
    }

    /// Returns the backing document path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FeedRepository for YamlFeedRepository {
    fn prepend(&self, record: Record) -> StoreResult<()> {
        let mut document = load_document(&self.path)?;
        document.insert(0, record);
        save_document(&self.path, &document)
    }

    fn load(&self) -> StoreResult<Document> {
        load_document(&self.path)
    }
}
