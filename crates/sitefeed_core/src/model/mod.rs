//! Domain model for persisted feed records.
//!
//! # Responsibility
//! - Define the schema-free record shape every document is made of.
//! - Define the typed update/publication variants and their request models.
//!
//! # Invariants
//! - Typed variants serialize their fields in declaration order.
//! - The schema-free shape never drops or reorders fields it did not write.

pub mod record;
