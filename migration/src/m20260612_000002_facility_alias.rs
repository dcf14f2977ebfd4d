use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260612_000001_facility::Facility;

static IDX_FACILITY_ALIAS_FACILITY_ID: &str = "idx-facility_alias-facility_id";
static FK_FACILITY_ALIAS_FACILITY_ID: &str = "fk-facility_alias-facility_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FacilityAlias::Table)
                    .if_not_exists()
                    .col(pk_auto(FacilityAlias::Id))
                    .col(integer(FacilityAlias::FacilityId))
                    .col(string(FacilityAlias::AliasText))
                    .col(string_uniq(FacilityAlias::AliasNormalized))
                    .col(boolean(FacilityAlias::IsActive))
                    .col(timestamp(FacilityAlias::CreatedAt))
                    .col(timestamp(FacilityAlias::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FACILITY_ALIAS_FACILITY_ID)
                    .table(FacilityAlias::Table)
                    .col(FacilityAlias::FacilityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FACILITY_ALIAS_FACILITY_ID)
                    .from_tbl(FacilityAlias::Table)
                    .from_col(FacilityAlias::FacilityId)
                    .to_tbl(Facility::Table)
                    .to_col(Facility::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FACILITY_ALIAS_FACILITY_ID)
                    .table(FacilityAlias::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FACILITY_ALIAS_FACILITY_ID)
                    .table(FacilityAlias::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FacilityAlias::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum FacilityAlias {
    Table,
    Id,
    FacilityId,
    AliasText,
    AliasNormalized,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
