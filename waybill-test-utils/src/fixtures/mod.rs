//! Test fixture modules for database seeding.
//!
//! Each submodule provides fixtures for one area of the system:
//!
//! - `catalog` - facility and alias records for resolution tests

pub mod catalog;
