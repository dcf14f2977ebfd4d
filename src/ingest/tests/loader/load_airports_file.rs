use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

/// Expect Ok with a header-described file reaching the catalog
#[tokio::test]
async fn loads_rows_from_disk() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        "iata_code,icao_code,name,iso_country,latitude_deg,longitude_deg"
    )?;
    writeln!(file, "AMS,EHAM,Amsterdam Schiphol,NL,52.3086,4.7639")?;

    let loader = ReferenceDataLoader::new(&test.db);
    let result = loader.load_airports_file(file.path()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let summary = result.unwrap();
    assert_eq!(summary.inserted, 1);

    let facility_repo = FacilityRepository::new(&test.db);
    let schiphol = facility_repo.find_by_iata("AMS").await?.unwrap();
    assert_eq!(schiphol.name, "Amsterdam Schiphol");
    assert_eq!(schiphol.icao_code, Some("EHAM".to_string()));
    assert_eq!(schiphol.category, FacilityCategory::Airport);

    Ok(())
}

/// Expect Ok with a headerless tabular file parsed the same way
#[tokio::test]
async fn loads_tabular_files_without_header() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        "JFK,KJFK,John F Kennedy International Apt,New York,US,40.6413,-73.7781"
    )?;

    let loader = ReferenceDataLoader::new(&test.db);
    let result = loader.load_airports_file(file.path()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().inserted, 1);

    let facility_repo = FacilityRepository::new(&test.db);
    let kennedy = facility_repo.find_by_iata("JFK").await?.unwrap();
    assert_eq!(kennedy.icao_code, Some("KJFK".to_string()));
    assert_eq!(kennedy.country, "US");

    Ok(())
}
