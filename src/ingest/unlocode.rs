//! Reader for the UN/ECE code-list CSV.
//!
//! Each data row carries one location; country header rows (empty location
//! column) and rows that fail the code shape checks are skipped silently so
//! a full file drains into the loader without per-row error handling.

use std::io;

use entity::facility::FacilityCategory;

use crate::{model::record::FacilityRecord, util::text};

const COL_COUNTRY: usize = 1;
const COL_LOCATION: usize = 2;
const COL_NAME: usize = 3;
const COL_SUBDIVISION: usize = 5;
const COL_FUNCTION: usize = 7;
const COL_IATA: usize = 9;
const COL_COORDINATES: usize = 10;

/// Streaming reader over a UN/LOCODE code-list file.
///
/// Yields one [`FacilityRecord`] per usable data row. The function
/// classifier column decides the category: a port entry (`1`) wins over an
/// airport entry (`4`), which wins over an inland depot entry (`6`);
/// anything else maps to [`FacilityCategory::Unknown`].
pub struct UnlocodeReader<R: io::Read> {
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: io::Read> UnlocodeReader<R> {
    pub fn new(reader: R) -> Self {
        let records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        Self { records }
    }
}

impl<R: io::Read> Iterator for UnlocodeReader<R> {
    type Item = FacilityRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(_) => continue,
            };

            if let Some(parsed) = parse_row(&record) {
                return Some(parsed);
            }
        }
    }
}

fn parse_row(record: &csv::StringRecord) -> Option<FacilityRecord> {
    let country = record.get(COL_COUNTRY)?.trim();
    if country.len() != 2 || !country.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    // Country header rows leave the location column empty.
    let location = record.get(COL_LOCATION)?.trim();
    if location.len() != 3 || !location.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let name = record.get(COL_NAME)?.trim();
    if name.is_empty() {
        return None;
    }

    let unlocode = format!("{country}{location}").to_uppercase();
    let category = category_from_function(record.get(COL_FUNCTION).unwrap_or(""));

    let region = record
        .get(COL_SUBDIVISION)
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    // The IATA column is only filled when the airport code differs from the
    // location code, so fall back to the location itself for airport rows.
    let iata_code = match category {
        FacilityCategory::Airport => record
            .get(COL_IATA)
            .map(str::trim)
            .filter(|value| text::is_iata_shape(value))
            .or_else(|| Some(location).filter(|value| text::is_iata_shape(value)))
            .map(str::to_uppercase),
        _ => None,
    };

    let coordinates = record.get(COL_COORDINATES).and_then(parse_coordinates);

    Some(FacilityRecord {
        code: unlocode.clone(),
        name: name.to_string(),
        country: country.to_uppercase(),
        region,
        category,
        unlocode: Some(unlocode.clone()),
        city_unlocode: Some(unlocode),
        iata_code,
        icao_code: None,
        latitude: coordinates.map(|(latitude, _)| latitude),
        longitude: coordinates.map(|(_, longitude)| longitude),
    })
}

fn category_from_function(function: &str) -> FacilityCategory {
    if function.contains('1') {
        FacilityCategory::SeaPort
    } else if function.contains('4') {
        FacilityCategory::Airport
    } else if function.contains('6') {
        FacilityCategory::Icd
    } else {
        FacilityCategory::Unknown
    }
}

/// Decode a `DDMM[N|S] DDDMM[E|W]` coordinate pair to decimal degrees.
fn parse_coordinates(value: &str) -> Option<(f64, f64)> {
    let mut parts = value.split_whitespace();
    let latitude = parse_coordinate(parts.next()?, 'N', 'S', 2)?;
    let longitude = parse_coordinate(parts.next()?, 'E', 'W', 3)?;

    Some((latitude, longitude))
}

fn parse_coordinate(
    part: &str,
    positive: char,
    negative: char,
    degree_digits: usize,
) -> Option<f64> {
    if !part.is_ascii() {
        return None;
    }

    let split = part.len().checked_sub(1)?;
    let (digits, hemisphere) = part.split_at(split);
    let sign = match hemisphere.chars().next()? {
        h if h == positive => 1.0,
        h if h == negative => -1.0,
        _ => return None,
    };

    if digits.len() != degree_digits + 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let degrees: f64 = digits[..degree_digits].parse().ok()?;
    let minutes: f64 = digits[degree_digits..].parse().ok()?;
    if minutes >= 60.0 {
        return None;
    }

    Some(sign * (degrees + minutes / 60.0))
}
