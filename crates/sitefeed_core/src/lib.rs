//! Core domain logic for the site feed manager.
//! This crate is the single source of truth for how feed files are
//! loaded, extended and rewritten.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::record::{
    local_date_stamp, FeedEntry, Publication, PublicationRequest, Record, Update, UpdateRequest,
    DEFAULT_PUBLICATION_KIND, DEFAULT_UPDATE_KIND,
};
pub use repo::feed_repo::{FeedRepository, YamlFeedRepository, PUBLICATIONS_FILE, UPDATES_FILE};
pub use service::feed_service::FeedService;
pub use store::{load_document, save_document, Document, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
