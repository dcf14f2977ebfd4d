//! Offline reference data ingestion.
//!
//! This module contains the readers for the UN/LOCODE and airport
//! reference files and the loader that upserts their records into the
//! facility catalog. Ingestion runs as a batch job; the resolution path
//! never writes to the catalog.

pub mod airports;
pub mod loader;
pub mod unlocode;
