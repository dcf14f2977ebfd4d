//! Tests for the resolution cascade's stage priorities.
//!
//! This module verifies that code lookups outrank name lookups, that IATA
//! matches are never overridden by a mode hint, and that ambiguity is
//! resolved closed: when two equally qualified facilities remain and no
//! tie-break signal exists, the engine returns no match instead of
//! guessing.

use super::*;

/// Tests that a 3-letter IATA code wins against a facility code.
///
/// Verifies that the airport stage runs before the generic code stage by
/// seeding a seaport whose facility code collides with an airport's IATA
/// code; the seaport is inserted first so an id-ordered scan would find it.
///
/// Expected: Ok(Some) with the airport
#[tokio::test]
async fn iata_lookup_beats_generic_code() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog()
        .insert_mock_seaport("AMS", "Amsterdam Seaport", Some("NLAMS"))
        .await?;
    let airport = test
        .catalog()
        .insert_mock_airport(
            "EHAM",
            "Amsterdam Airport Schiphol",
            Some("AMS"),
            Some("NLAMS"),
        )
        .await?;

    let resolver = ResolverService::new(&test.db);
    let mut cache = ResolutionCache::new();
    let result = resolver.resolve_one("AMS", None, &mut cache).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap().map(|f| f.id), Some(airport.id));

    Ok(())
}

/// Tests that IATA precedence survives a contradicting mode hint.
///
/// Verifies that resolving an IATA code with a sea mode hint still returns
/// the airport; the hint only breaks ties, it never overrides a code.
///
/// Expected: Ok(Some) with the airport despite mode SEA
#[tokio::test]
async fn iata_precedence_holds_under_sea_mode() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog()
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

    let resolver = ResolverService::new(&test.db);
    let mut cache = ResolutionCache::new();
    let resolved = resolver
        .resolve_one("JFK", Some(TransportMode::Sea), &mut cache)
        .await
        .unwrap();

    assert_eq!(resolved.map(|f| f.id), Some(airport.id));

    Ok(())
}

/// Tests mode-driven disambiguation inside one city cluster.
///
/// Verifies that a UN/LOCODE shared by an airport and a seaport resolves
/// to the member matching the mode hint, and defaults to the seaport when
/// no hint is given.
///
/// Expected: airport under AIR, seaport under SEA, seaport without a mode
#[tokio::test]
async fn unlocode_cluster_prefers_mode_then_seaport() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let airport = test
        .catalog()
        .insert_mock_airport(
            "JFK",
            "John F. Kennedy International Airport",
            Some("JFK"),
            Some("USNYC"),
        )
        .await?;
    let port = test
        .catalog()
        .insert_mock_seaport("USNYC", "New York", Some("USNYC"))
        .await?;

    let resolver = ResolverService::new(&test.db);
    let mut cache = ResolutionCache::new();

    let by_air = resolver
        .resolve_one("USNYC", Some(TransportMode::Air), &mut cache)
        .await
        .unwrap();
    let by_sea = resolver
        .resolve_one("USNYC", Some(TransportMode::Sea), &mut cache)
        .await
        .unwrap();
    let unhinted = resolver.resolve_one("USNYC", None, &mut cache).await.unwrap();

    assert_eq!(by_air.map(|f| f.id), Some(airport.id));
    assert_eq!(by_sea.map(|f| f.id), Some(port.id));
    assert_eq!(unhinted.map(|f| f.id), Some(port.id));

    Ok(())
}

/// Tests that an ambiguous shared name needs an explicit mode.
///
/// Verifies that a name carried by two co-located facilities resolves only
/// when a mode hint picks one of them; without a hint the engine returns
/// no match rather than defaulting.
///
/// Expected: Ok(None) without a mode, the airport under AIR
#[tokio::test]
async fn ambiguous_name_requires_mode() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog()
        .insert_mock_seaport("USNYC", "New York", Some("USNYC"))
        .await?;
    let airport = test
        .catalog()
        .insert_mock_airport("JFK", "New York", Some("JFK"), Some("USNYC"))
        .await?;

    let resolver = ResolverService::new(&test.db);
    let mut cache = ResolutionCache::new();

    let unhinted = resolver
        .resolve_one("New York", None, &mut cache)
        .await
        .unwrap();
    let by_air = resolver
        .resolve_one("New York", Some(TransportMode::Air), &mut cache)
        .await
        .unwrap();

    assert!(unhinted.is_none());
    assert_eq!(by_air.map(|f| f.id), Some(airport.id));

    Ok(())
}

/// Tests that a facility code match outranks an exact name match.
///
/// Expected: Ok(Some) with the code holder, not the name holder
#[tokio::test]
async fn generic_code_beats_exact_name() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog()
        .insert_mock_seaport("MATNG", "Tanger", Some("MATNG"))
        .await?;
    let depot = test
        .catalog()
        .insert_mock_inland_depot("TANGER", "Tanger Free Zone", Some("MATNG"))
        .await?;

    let resolver = ResolverService::new(&test.db);
    let mut cache = ResolutionCache::new();
    let resolved = resolver.resolve_one("tanger", None, &mut cache).await.unwrap();

    assert_eq!(resolved.map(|f| f.id), Some(depot.id));

    Ok(())
}

/// Tests that an exact alias match outranks a name prefix match.
///
/// Verifies that an operator-entered alias wins against a facility whose
/// name merely starts with the input.
///
/// Expected: Ok(Some) with the aliased facility
#[tokio::test]
async fn alias_outranks_name_prefix() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog()
        .insert_mock_inland_depot("XGT2", "Gateway Terminal Two", None)
        .await?;
    let port = test
        .catalog()
        .insert_mock_seaport("YPORT", "Yard Port", None)
        .await?;
    test.catalog()
        .insert_mock_alias(port.id, "Gateway Terminal")
        .await?;

    let resolver = ResolverService::new(&test.db);
    let mut cache = ResolutionCache::new();
    let resolved = resolver
        .resolve_one("Gateway Terminal", None, &mut cache)
        .await
        .unwrap();

    assert_eq!(resolved.map(|f| f.id), Some(port.id));

    Ok(())
}
