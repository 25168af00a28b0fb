//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the documented append entry points.
//! - Keep callers decoupled from document storage details.

pub mod feed_service;
