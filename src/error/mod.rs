//! Error types for the waybill service.
//!
//! This module provides the error handling system for the application, with
//! specialized error types per domain (configuration, reference data
//! ingestion) aggregated into a single `Error` enum. All errors use
//! `thiserror` for ergonomic definitions with automatic `Display` and
//! `Error` trait implementations.
//!
//! The resolution path itself never produces a domain error: malformed,
//! empty, or unmatched input is a normal outcome represented as "no result."
//! Errors surface only from infrastructure (database access) and from the
//! offline ingestion collaborators.

pub mod config;
pub mod ingest;

use thiserror::Error;

use crate::error::{config::ConfigError, ingest::IngestError};

/// Main error type for the waybill service.
///
/// Aggregates all domain-specific error types and external library errors
/// into a single unified error type. It uses `thiserror`'s `#[from]`
/// attribute to enable automatic conversion from underlying error types via
/// the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Reference data ingestion error (unreadable files).
    #[error(transparent)]
    IngestError(#[from] IngestError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
