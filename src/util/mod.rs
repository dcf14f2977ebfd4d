//! Utility functions shared across the application.

pub mod text;
