//! Core library for the waybill location resolution service.
//!
//! This crate contains the facility catalog data layer, the free-text
//! location resolution engine used by quotation pricing and document
//! extraction, and the offline ingestion pipeline that populates the
//! catalog from UN/LOCODE and airport reference files.

pub mod config;
pub mod data;
pub mod error;
pub mod ingest;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
