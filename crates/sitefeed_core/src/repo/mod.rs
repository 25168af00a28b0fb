//! Repository layer over the YAML document store.
//!
//! # Responsibility
//! - Define the use-case data access contract for feed documents.
//! - Isolate document file handling from service orchestration.
//!
//! # Invariants
//! - Prepend is the only write path: existing records are never edited in
//!   place, only shifted down by one position.

pub mod feed_repo;
