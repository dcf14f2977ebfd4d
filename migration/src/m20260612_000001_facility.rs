use sea_orm_migration::{prelude::*, schema::*};

static IDX_FACILITY_UNLOCODE: &str = "idx-facility-unlocode";
static IDX_FACILITY_CITY_UNLOCODE: &str = "idx-facility-city_unlocode";
static IDX_FACILITY_NAME: &str = "idx-facility-name";
static IDX_FACILITY_IATA_CODE: &str = "idx-facility-iata_code";
static IDX_FACILITY_ICAO_CODE: &str = "idx-facility-icao_code";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facility::Table)
                    .if_not_exists()
                    .col(pk_auto(Facility::Id))
                    .col(string_uniq(Facility::Code))
                    .col(string(Facility::Name))
                    .col(string(Facility::Country))
                    .col(string_null(Facility::Region))
                    .col(string(Facility::Category))
                    .col(string_null(Facility::Unlocode))
                    .col(string_null(Facility::CityUnlocode))
                    .col(string_null(Facility::IataCode))
                    .col(string_null(Facility::IcaoCode))
                    .col(double_null(Facility::Latitude))
                    .col(double_null(Facility::Longitude))
                    .col(boolean(Facility::IsActive))
                    .col(timestamp(Facility::CreatedAt))
                    .col(timestamp(Facility::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACILITY_UNLOCODE)
                    .table(Facility::Table)
                    .col(Facility::Unlocode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACILITY_CITY_UNLOCODE)
                    .table(Facility::Table)
                    .col(Facility::CityUnlocode)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACILITY_NAME)
                    .table(Facility::Table)
                    .col(Facility::Name)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACILITY_IATA_CODE)
                    .table(Facility::Table)
                    .col(Facility::IataCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACILITY_ICAO_CODE)
                    .table(Facility::Table)
                    .col(Facility::IcaoCode)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACILITY_ICAO_CODE)
                    .table(Facility::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACILITY_IATA_CODE)
                    .table(Facility::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACILITY_NAME)
                    .table(Facility::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACILITY_CITY_UNLOCODE)
                    .table(Facility::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACILITY_UNLOCODE)
                    .table(Facility::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Facility::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Facility {
    Table,
    Id,
    Code,
    Name,
    Country,
    Region,
    Category,
    Unlocode,
    CityUnlocode,
    IataCode,
    IcaoCode,
    Latitude,
    Longitude,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
