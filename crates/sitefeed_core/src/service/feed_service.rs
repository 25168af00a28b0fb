//! Feed use-case service.
//!
//! # Responsibility
//! - Provide the two append entry points callers use directly.
//! - Share one generic prepend routine across record shapes.
//!
//! # Invariants
//! - The returned record is exactly what was persisted at index 0.
//! - Updates get a generated `date`; publications keep the caller-supplied
//!   one.
//! - Field contents are persisted without validation.

use crate::model::record::{
    local_date_stamp, FeedEntry, Publication, PublicationRequest, Record, Update, UpdateRequest,
};
use crate::repo::feed_repo::FeedRepository;
use crate::store::StoreResult;

/// Use-case service wrapper for feed append operations.
pub struct FeedService<R: FeedRepository> {
    repo: R,
}

impl<R: FeedRepository> FeedService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Appends one site update to the front of the backing document.
    ///
    /// # Contract
    /// - The `date` field is generated: current local calendar date in
    ///   `YYYY-MM-DD` form.
    /// - Prints `Added update: <title>` on success.
    /// - Returns the record exactly as persisted at index 0.
    pub fn add_update(&self, request: &UpdateRequest) -> StoreResult<Update> {
        self.append(Update::from_request(request, local_date_stamp()))
    }

    /// Appends one publication to the front of the backing document.
    ///
    /// # Contract
    /// - The `date` field is taken from the request, never generated.
    /// - Prints `Added publication: <title>` on success.
    /// - Returns the record exactly as persisted at index 0.
    pub fn add_publication(&self, request: &PublicationRequest) -> StoreResult<Publication> {
        self.append(Publication::from_request(request))
    }

    /// One generic load-insert-save routine shared by every record shape.
    fn append<T: FeedEntry>(&self, entry: T) -> StoreResult<T> {
        let record = Record::from_entry(&entry)?;
        self.repo.prepend(record)?;
        println!("Added {}: {}", T::LABEL, entry.title());
        Ok(entry)
    }
}
