//! Application models and type definitions.
//!
//! This module contains data models for the waybill service, including
//! database model type aliases, resolution types shared between the
//! resolver and its callers, parsed reference data records, and
//! serializable DTOs for reporting consumers.

pub mod api;
pub mod db;
pub mod record;
pub mod resolution;
