//! Database model type aliases.
//!
//! This module provides convenient type aliases for SeaORM database entity
//! models used throughout the application. These aliases simplify type
//! signatures and provide a single point of reference for database model
//! types, making it easier to work with entities without importing from the
//! `entity` crate directly.

/// Type alias for the facility database model.
///
/// Represents one resolvable transport node: a sea port, airport, or inland
/// container depot.
///
/// # Fields (from `entity::facility::Model`)
/// - `id` - Primary key, stable surrogate identifier
/// - `code` - Primary lookup code (unique, uppercase)
/// - `name` - Display name
/// - `country` - Country the facility is in
/// - `region` - Subdivision or region text (nullable)
/// - `category` - SEA_PORT, AIRPORT, ICD, or UNKNOWN
/// - `unlocode` - 5-character UN/LOCODE (nullable)
/// - `city_unlocode` - UN/LOCODE of the city cluster the facility belongs to (nullable)
/// - `iata_code` - 3-letter IATA code, airports only (nullable, unique)
/// - `icao_code` - 4-letter ICAO code, airports only (nullable, unique)
/// - `latitude` / `longitude` - Decimal coordinates (nullable)
/// - `is_active` - Inactive facilities are excluded from all lookups
/// - `created_at` / `updated_at` - Record timestamps
pub type FacilityModel = entity::facility::Model;

/// Type alias for the facility alias database model.
///
/// Maps an operations-entered piece of text to exactly one facility. The
/// normalized form is globally unique, so an alias can never be ambiguous
/// by construction.
///
/// # Fields (from `entity::facility_alias::Model`)
/// - `id` - Primary key
/// - `facility_id` - Foreign key to the aliased facility
/// - `alias_text` - The alias as entered
/// - `alias_normalized` - Lowercased lookup key (unique)
/// - `is_active` - Inactive aliases are excluded from all lookups
/// - `created_at` / `updated_at` - Record timestamps
pub type FacilityAliasModel = entity::facility_alias::Model;
