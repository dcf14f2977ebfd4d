//! Reader for airport reference data.
//!
//! Two file shapes are supported: a fixed-column tabular export and a
//! delimited file with a header row naming its columns. The shape is
//! detected from the first record, so callers never declare it.

use std::io;

use entity::facility::FacilityCategory;

use crate::{model::record::FacilityRecord, util::text};

/// Column positions for one input shape.
#[derive(Debug, Clone, Copy, Default)]
struct ColumnLayout {
    iata: Option<usize>,
    icao: Option<usize>,
    name: Option<usize>,
    country: Option<usize>,
    latitude: Option<usize>,
    longitude: Option<usize>,
}

impl ColumnLayout {
    /// The tabular export shape: IATA, ICAO, name, city, country,
    /// latitude, longitude.
    fn fixed() -> Self {
        Self {
            iata: Some(0),
            icao: Some(1),
            name: Some(2),
            country: Some(4),
            latitude: Some(5),
            longitude: Some(6),
        }
    }

    fn from_header(record: &csv::StringRecord) -> Self {
        let mut layout = Self::default();

        for (index, cell) in record.iter().enumerate() {
            let slot = match cell.trim().to_lowercase().as_str() {
                "iata" | "iata_code" | "ident" => &mut layout.iata,
                "icao" | "icao_code" | "gps_code" => &mut layout.icao,
                "name" | "airport" | "airport_name" => &mut layout.name,
                "country" | "country_code" | "iso_country" => &mut layout.country,
                "lat" | "latitude" | "latitude_deg" => &mut layout.latitude,
                "lon" | "lng" | "longitude" | "longitude_deg" => &mut layout.longitude,
                _ => continue,
            };

            slot.get_or_insert(index);
        }

        layout
    }

    /// A first row naming at least a name column and one code column is a
    /// header, not data.
    fn is_header(&self) -> bool {
        self.name.is_some() && (self.iata.is_some() || self.icao.is_some())
    }
}

/// Streaming reader over an airport reference file.
///
/// Yields one [`FacilityRecord`] per row carrying a usable IATA or ICAO
/// code; the IATA code doubles as the facility code when present, the ICAO
/// code otherwise. Code-less rows are skipped silently.
pub struct AirportsReader<R: io::Read> {
    records: csv::StringRecordsIntoIter<R>,
    layout: Option<ColumnLayout>,
}

impl<R: io::Read> AirportsReader<R> {
    pub fn new(reader: R) -> Self {
        let records = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        Self {
            records,
            layout: None,
        }
    }
}

impl<R: io::Read> Iterator for AirportsReader<R> {
    type Item = FacilityRecord;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let record = match self.records.next()? {
                Ok(record) => record,
                Err(_) => continue,
            };

            let layout = match self.layout {
                Some(layout) => layout,
                None => {
                    // The first record decides the shape; a header row is
                    // consumed, a data row falls through to parsing.
                    let detected = ColumnLayout::from_header(&record);
                    if detected.is_header() {
                        self.layout = Some(detected);
                        continue;
                    }

                    *self.layout.insert(ColumnLayout::fixed())
                }
            };

            if let Some(parsed) = parse_row(&layout, &record) {
                return Some(parsed);
            }
        }
    }
}

fn parse_row(layout: &ColumnLayout, record: &csv::StringRecord) -> Option<FacilityRecord> {
    let iata = cell(record, layout.iata)
        .filter(|value| text::is_iata_shape(value))
        .map(str::to_uppercase);
    let icao = cell(record, layout.icao)
        .filter(|value| text::is_icao_shape(value))
        .map(str::to_uppercase);

    let code = iata.clone().or_else(|| icao.clone())?;
    let name = cell(record, layout.name)?.to_string();

    // Country falls back to the unassigned marker when the source has no
    // country column.
    let country = cell(record, layout.country)
        .map(str::to_uppercase)
        .unwrap_or_else(|| "ZZ".to_string());

    Some(FacilityRecord {
        code,
        name,
        country,
        region: None,
        category: FacilityCategory::Airport,
        unlocode: None,
        city_unlocode: None,
        iata_code: iata,
        icao_code: icao,
        latitude: decimal(record, layout.latitude),
        longitude: decimal(record, layout.longitude),
    })
}

fn cell<'r>(record: &'r csv::StringRecord, index: Option<usize>) -> Option<&'r str> {
    record
        .get(index?)
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn decimal(record: &csv::StringRecord, index: Option<usize>) -> Option<f64> {
    cell(record, index).and_then(|value| value.parse().ok())
}
