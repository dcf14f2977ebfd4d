use super::*;

/// Expect Ok with a stored facility mirroring the record, active by default
#[tokio::test]
async fn creates_facility_from_record() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let record = FacilityRecord {
        code: "DEHAM".to_string(),
        name: "Hamburg".to_string(),
        country: "DE".to_string(),
        region: Some("HH".to_string()),
        category: FacilityCategory::SeaPort,
        unlocode: Some("DEHAM".to_string()),
        city_unlocode: Some("DEHAM".to_string()),
        iata_code: None,
        icao_code: None,
        latitude: Some(53.51),
        longitude: Some(9.93),
    };

    let facility_repo = FacilityRepository::new(&test.db);
    let result = facility_repo.create(&record).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.code, "DEHAM");
    assert_eq!(created.name, "Hamburg");
    assert_eq!(created.country, "DE");
    assert_eq!(created.region, Some("HH".to_string()));
    assert_eq!(created.category, FacilityCategory::SeaPort);
    assert_eq!(created.unlocode, Some("DEHAM".to_string()));
    assert_eq!(created.city_unlocode, Some("DEHAM".to_string()));
    assert_eq!(created.latitude, Some(53.51));
    assert!(created.is_active);

    Ok(())
}

/// Expect Ok when the record carries only the required fields
#[tokio::test]
async fn creates_facility_from_minimal_record() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let record = FacilityRecord {
        code: "XPRIV".to_string(),
        name: "Private Yard".to_string(),
        country: "US".to_string(),
        region: None,
        category: FacilityCategory::Unknown,
        unlocode: None,
        city_unlocode: None,
        iata_code: None,
        icao_code: None,
        latitude: None,
        longitude: None,
    };

    let facility_repo = FacilityRepository::new(&test.db);
    let created = facility_repo.create(&record).await?;

    assert_eq!(created.code, "XPRIV");
    assert_eq!(created.category, FacilityCategory::Unknown);
    assert_eq!(created.unlocode, None);
    assert_eq!(created.iata_code, None);
    assert!(created.is_active);

    Ok(())
}
