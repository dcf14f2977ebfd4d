use super::*;

/// Expect Ok with every facility whose name starts with the prefix, in id order
#[tokio::test]
async fn returns_facilities_matching_the_prefix() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let klang = test
        .catalog()
        .insert_mock_seaport("MYPKG", "Port Klang", Some("MYPKG"))
        .await?;
    let sudan = test
        .catalog()
        .insert_mock_seaport("SDPZU", "Port Sudan", Some("SDPZU"))
        .await?;
    test.catalog()
        .insert_mock_seaport("NLRTM", "Rotterdam", Some("NLRTM"))
        .await?;

    let facility_repo = FacilityRepository::new(&test.db);
    let result = facility_repo.find_by_name_prefix("port", 10).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let found = result.unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].id, klang.id);
    assert_eq!(found[1].id, sudan.id);

    Ok(())
}

/// Expect Ok with no more rows than the limit allows
#[tokio::test]
async fn caps_the_result_at_the_limit() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog()
        .insert_mock_seaport("MYPKG", "Port Klang", Some("MYPKG"))
        .await?;
    test.catalog()
        .insert_mock_seaport("SDPZU", "Port Sudan", Some("SDPZU"))
        .await?;
    test.catalog()
        .insert_mock_seaport("USPEV", "Port Everglades", Some("USPEV"))
        .await?;

    let facility_repo = FacilityRepository::new(&test.db);
    let found = facility_repo.find_by_name_prefix("Port", 2).await?;

    assert_eq!(found.len(), 2);

    Ok(())
}

/// Expect Ok with an empty result, LIKE wildcards in the prefix match literally
#[tokio::test]
async fn treats_wildcard_characters_literally() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog()
        .insert_mock_seaport("NLRTM", "Rotterdam", Some("NLRTM"))
        .await?;

    let facility_repo = FacilityRepository::new(&test.db);
    let underscore = facility_repo.find_by_name_prefix("R_tt", 10).await?;
    let percent = facility_repo.find_by_name_prefix("R%", 10).await?;

    assert!(underscore.is_empty());
    assert!(percent.is_empty());

    Ok(())
}
