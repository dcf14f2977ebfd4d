use sea_orm::entity::prelude::*;

/// Facility classification derived from reference data at ingest time.
///
/// Stored as a string column so rows loaded by newer builds stay readable
/// by older ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum FacilityCategory {
    #[sea_orm(string_value = "SEA_PORT")]
    SeaPort,
    #[sea_orm(string_value = "AIRPORT")]
    Airport,
    #[sea_orm(string_value = "ICD")]
    Icd,
    #[sea_orm(string_value = "UNKNOWN")]
    Unknown,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "facility")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Primary lookup key: UN/LOCODE for ports and depots, IATA or ICAO
    /// for airports, carrier-agreed codes for everything else. Uppercase.
    #[sea_orm(unique)]
    pub code: String,
    pub name: String,
    pub country: String,
    pub region: Option<String>,
    pub category: FacilityCategory,
    pub unlocode: Option<String>,
    /// UN/LOCODE of the city this facility belongs to. Facilities sharing
    /// a value form a city cluster.
    pub city_unlocode: Option<String>,
    #[sea_orm(unique)]
    pub iata_code: Option<String>,
    #[sea_orm(unique)]
    pub icao_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_active: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::facility_alias::Entity")]
    FacilityAlias,
}

impl Related<super::facility_alias::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FacilityAlias.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
