//! Data access layer repositories.
//!
//! This module contains the database repository implementations for the
//! facility catalog. Repositories provide an abstraction layer over
//! database operations; all resolution-path queries filter on
//! `is_active = true` so deactivated rows never surface in lookups.

pub mod alias;
pub mod facility;
