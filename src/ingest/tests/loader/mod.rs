use entity::facility::FacilityCategory;
use sea_orm::ActiveValue;
use waybill_test_utils::prelude::*;

use crate::{
    data::facility::FacilityRepository, ingest::loader::ReferenceDataLoader,
    model::record::FacilityRecord,
};

mod load_airports_file;

fn unlocode_record(code: &str, name: &str) -> FacilityRecord {
    FacilityRecord {
        code: code.to_string(),
        name: name.to_string(),
        country: code[..2].to_string(),
        region: None,
        category: FacilityCategory::SeaPort,
        unlocode: Some(code.to_string()),
        city_unlocode: Some(code.to_string()),
        iata_code: None,
        icao_code: None,
        latitude: None,
        longitude: None,
    }
}
