use entity::facility::FacilityCategory;

/// A facility row as parsed from a reference data file.
///
/// Carries everything the loader needs to insert or update a catalog row;
/// no database identity is assigned yet.
#[derive(Debug, Clone, PartialEq)]
pub struct FacilityRecord {
    pub code: String,
    pub name: String,
    pub country: String,
    pub region: Option<String>,
    pub category: FacilityCategory,
    pub unlocode: Option<String>,
    pub city_unlocode: Option<String>,
    pub iata_code: Option<String>,
    pub icao_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
