//! Factory functions for generating mock catalog records.
//!
//! Provides pure functions for creating facility and alias active models with
//! standard test values. These are in-memory instances that don't require
//! database interaction; tests can override individual fields before insertion.

use chrono::Utc;
use entity::facility::{self, FacilityCategory};
use entity::facility_alias;
use sea_orm::ActiveValue;

/// Create a mock facility active model with default test values.
///
/// The facility's `unlocode` and `city_unlocode` are both set to
/// `city_unlocode`, matching how reference data represents a facility listed
/// under its own city entry. The country is derived from the UN/LOCODE
/// prefix when one is given.
///
/// # Arguments
/// - `code` - The primary facility code
/// - `name` - The facility display name
/// - `category` - The facility category
/// - `city_unlocode` - Optional UN/LOCODE of the city the facility belongs to
///
/// # Returns
/// - `facility::ActiveModel` - An unsaved facility record with test data
pub fn mock_facility(
    code: &str,
    name: &str,
    category: FacilityCategory,
    city_unlocode: Option<&str>,
) -> facility::ActiveModel {
    let now = Utc::now().naive_utc();
    let country = city_unlocode
        .map(|unlocode| unlocode[..2].to_string())
        .unwrap_or_else(|| "US".to_string());

    facility::ActiveModel {
        code: ActiveValue::Set(code.to_string()),
        name: ActiveValue::Set(name.to_string()),
        country: ActiveValue::Set(country),
        region: ActiveValue::Set(None),
        category: ActiveValue::Set(category),
        unlocode: ActiveValue::Set(city_unlocode.map(str::to_string)),
        city_unlocode: ActiveValue::Set(city_unlocode.map(str::to_string)),
        iata_code: ActiveValue::Set(None),
        icao_code: ActiveValue::Set(None),
        latitude: ActiveValue::Set(None),
        longitude: ActiveValue::Set(None),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

/// Create a mock sea port active model.
///
/// # Arguments
/// - `code` - The primary facility code
/// - `name` - The port display name
/// - `city_unlocode` - Optional UN/LOCODE of the city the port belongs to
///
/// # Returns
/// - `facility::ActiveModel` - An unsaved sea port record with test data
pub fn mock_seaport(code: &str, name: &str, city_unlocode: Option<&str>) -> facility::ActiveModel {
    mock_facility(code, name, FacilityCategory::SeaPort, city_unlocode)
}

/// Create a mock airport active model.
///
/// # Arguments
/// - `code` - The primary facility code
/// - `name` - The airport display name
/// - `iata_code` - Optional IATA code
/// - `city_unlocode` - Optional UN/LOCODE of the city the airport belongs to
///
/// # Returns
/// - `facility::ActiveModel` - An unsaved airport record with test data
pub fn mock_airport(
    code: &str,
    name: &str,
    iata_code: Option<&str>,
    city_unlocode: Option<&str>,
) -> facility::ActiveModel {
    let mut airport = mock_facility(code, name, FacilityCategory::Airport, city_unlocode);
    airport.iata_code = ActiveValue::Set(iata_code.map(str::to_string));
    airport
}

/// Create a mock inland container depot active model.
///
/// # Arguments
/// - `code` - The primary facility code
/// - `name` - The depot display name
/// - `city_unlocode` - Optional UN/LOCODE of the city the depot belongs to
///
/// # Returns
/// - `facility::ActiveModel` - An unsaved depot record with test data
pub fn mock_inland_depot(
    code: &str,
    name: &str,
    city_unlocode: Option<&str>,
) -> facility::ActiveModel {
    mock_facility(code, name, FacilityCategory::Icd, city_unlocode)
}

/// Create a mock alias active model pointing at a facility.
///
/// The normalized key is the lowercased alias text; pass alias text without
/// redundant whitespace so the key matches what the resolver computes.
///
/// # Arguments
/// - `facility_id` - The facility record ID the alias points at
/// - `alias_text` - The alias as operations staff would enter it
///
/// # Returns
/// - `facility_alias::ActiveModel` - An unsaved alias record with test data
pub fn mock_alias(facility_id: i32, alias_text: &str) -> facility_alias::ActiveModel {
    let now = Utc::now().naive_utc();

    facility_alias::ActiveModel {
        facility_id: ActiveValue::Set(facility_id),
        alias_text: ActiveValue::Set(alias_text.to_string()),
        alias_normalized: ActiveValue::Set(alias_text.to_lowercase()),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}
