//! Catalog database insertion utilities.
//!
//! This module provides methods for inserting facility and alias records into
//! the test database. Convenience methods cover the common shapes; tests with
//! unusual needs can build an active model through the factory functions,
//! adjust fields, and insert it directly.

use entity::{facility, facility_alias};
use sea_orm::EntityTrait;

use crate::{
    error::TestError,
    fixtures::catalog::{factory, CatalogFixtures},
    model::{FacilityAliasModel, FacilityModel},
};

impl CatalogFixtures<'_> {
    /// Insert a facility active model into the database.
    ///
    /// # Arguments
    /// - `model` - The facility active model to insert
    ///
    /// # Returns
    /// - `Ok(FacilityModel)` - The inserted facility record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_facility(
        &self,
        model: facility::ActiveModel,
    ) -> Result<FacilityModel, TestError> {
        Ok(entity::prelude::Facility::insert(model)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    /// Insert an alias active model into the database.
    ///
    /// # Arguments
    /// - `model` - The alias active model to insert
    ///
    /// # Returns
    /// - `Ok(FacilityAliasModel)` - The inserted alias record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_alias(
        &self,
        model: facility_alias::ActiveModel,
    ) -> Result<FacilityAliasModel, TestError> {
        Ok(entity::prelude::FacilityAlias::insert(model)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    /// Insert a mock sea port into the database.
    ///
    /// # Arguments
    /// - `code` - The primary facility code
    /// - `name` - The port display name
    /// - `city_unlocode` - Optional UN/LOCODE of the city the port belongs to
    ///
    /// # Returns
    /// - `Ok(FacilityModel)` - The inserted sea port record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_seaport(
        &self,
        code: &str,
        name: &str,
        city_unlocode: Option<&str>,
    ) -> Result<FacilityModel, TestError> {
        self.insert_facility(factory::mock_seaport(code, name, city_unlocode))
            .await
    }

    /// Insert a mock airport into the database.
    ///
    /// # Arguments
    /// - `code` - The primary facility code
    /// - `name` - The airport display name
    /// - `iata_code` - Optional IATA code
    /// - `city_unlocode` - Optional UN/LOCODE of the city the airport belongs to
    ///
    /// # Returns
    /// - `Ok(FacilityModel)` - The inserted airport record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_airport(
        &self,
        code: &str,
        name: &str,
        iata_code: Option<&str>,
        city_unlocode: Option<&str>,
    ) -> Result<FacilityModel, TestError> {
        self.insert_facility(factory::mock_airport(code, name, iata_code, city_unlocode))
            .await
    }

    /// Insert a mock inland container depot into the database.
    ///
    /// # Arguments
    /// - `code` - The primary facility code
    /// - `name` - The depot display name
    /// - `city_unlocode` - Optional UN/LOCODE of the city the depot belongs to
    ///
    /// # Returns
    /// - `Ok(FacilityModel)` - The inserted depot record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_inland_depot(
        &self,
        code: &str,
        name: &str,
        city_unlocode: Option<&str>,
    ) -> Result<FacilityModel, TestError> {
        self.insert_facility(factory::mock_inland_depot(code, name, city_unlocode))
            .await
    }

    /// Insert a mock alias pointing at a facility.
    ///
    /// # Arguments
    /// - `facility_id` - The facility record ID the alias points at
    /// - `alias_text` - The alias as operations staff would enter it
    ///
    /// # Returns
    /// - `Ok(FacilityAliasModel)` - The inserted alias record
    /// - `Err(TestError::DbErr)` - Database insert operation failed
    pub async fn insert_mock_alias(
        &self,
        facility_id: i32,
        alias_text: &str,
    ) -> Result<FacilityAliasModel, TestError> {
        self.insert_alias(factory::mock_alias(facility_id, alias_text))
            .await
    }
}
