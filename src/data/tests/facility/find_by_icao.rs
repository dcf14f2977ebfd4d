use super::*;

/// Expect Ok(Some) when an active airport carries the ICAO code
#[tokio::test]
async fn finds_airport_by_icao_code() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let mut airport = factory::mock_airport(
        "AMS",
        "Amsterdam Airport Schiphol",
        Some("AMS"),
        Some("NLAMS"),
    );
    airport.icao_code = ActiveValue::Set(Some("EHAM".to_string()));
    let airport = test.catalog().insert_facility(airport).await?;

    let facility_repo = FacilityRepository::new(&test.db);
    let result = facility_repo.find_by_icao("eham").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let found = result.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().id, airport.id);

    Ok(())
}

/// Expect Ok(None) for a code no airport carries
#[tokio::test]
async fn returns_none_for_unknown_code() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let facility_repo = FacilityRepository::new(&test.db);
    let found = facility_repo.find_by_icao("ZZZZ").await?;

    assert!(found.is_none());

    Ok(())
}
