use super::*;

/// Expect Ok with every active facility sharing the code, in id order
#[tokio::test]
async fn returns_all_facilities_sharing_the_code() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let port = test
        .catalog()
        .insert_mock_seaport("USNYC", "New York", Some("USNYC"))
        .await?;
    let airport = test
        .catalog()
        .insert_mock_airport(
            "JFK",
            "John F. Kennedy International Airport",
            Some("JFK"),
            Some("USNYC"),
        )
        .await?;

    let facility_repo = FacilityRepository::new(&test.db);
    let result = facility_repo.find_by_unlocode("USNYC").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let found = result.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, port.id);
    assert_eq!(found[1].id, airport.id);

    Ok(())
}

/// Expect Ok with a match when the lookup code is lowercased
#[tokio::test]
async fn matches_regardless_of_input_case() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let port = test
        .catalog()
        .insert_mock_seaport("NLRTM", "Rotterdam", Some("NLRTM"))
        .await?;

    let facility_repo = FacilityRepository::new(&test.db);
    let found = facility_repo.find_by_unlocode("nlrtm").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, port.id);

    Ok(())
}

/// Expect Ok with deactivated facilities left out of the result
#[tokio::test]
async fn excludes_inactive_facilities() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let mut retired = factory::mock_seaport("DEHAM", "Hamburg", Some("DEHAM"));
    retired.is_active = ActiveValue::Set(false);
    test.catalog().insert_facility(retired).await?;

    let facility_repo = FacilityRepository::new(&test.db);
    let found = facility_repo.find_by_unlocode("DEHAM").await?;

    assert!(found.is_empty());

    Ok(())
}

/// Expect Ok with an empty result for an unknown code
#[tokio::test]
async fn returns_empty_for_unknown_code() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let facility_repo = FacilityRepository::new(&test.db);
    let found = facility_repo.find_by_unlocode("XXXXX").await?;

    assert!(found.is_empty());

    Ok(())
}
