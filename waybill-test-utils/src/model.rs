//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main waybill crate to keep test code
//! consistent with production code.

/// Type alias for the facility database model.
pub type FacilityModel = entity::facility::Model;

/// Type alias for the facility alias database model.
pub type FacilityAliasModel = entity::facility_alias::Model;
