//! Service layer for location resolution.
//!
//! This module contains the resolution engine that maps free-text place
//! references to canonical facility records, along with its session cache
//! and compound input handling.

pub mod resolver;
