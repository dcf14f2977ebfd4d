use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{model::db::FacilityAliasModel, util::text};

pub struct AliasRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AliasRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_normalized(
        &self,
        alias: &str,
    ) -> Result<Option<FacilityAliasModel>, DbErr> {
        entity::prelude::FacilityAlias::find()
            .filter(entity::facility_alias::Column::AliasNormalized.eq(alias.to_lowercase()))
            .filter(entity::facility_alias::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    pub async fn find_by_normalized_prefix(
        &self,
        prefix: &str,
        limit: u64,
    ) -> Result<Vec<FacilityAliasModel>, DbErr> {
        let pattern = format!("{}%", text::escape_like(&prefix.to_lowercase()));

        entity::prelude::FacilityAlias::find()
            .filter(
                entity::facility_alias::Column::AliasNormalized
                    .like(LikeExpr::new(pattern).escape('\\')),
            )
            .filter(entity::facility_alias::Column::IsActive.eq(true))
            .order_by_asc(entity::facility_alias::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Stores the alias verbatim alongside its lookup key, so the original
    /// spelling survives for audit while matching stays case-insensitive.
    pub async fn create(
        &self,
        facility_id: i32,
        alias_text: &str,
    ) -> Result<FacilityAliasModel, DbErr> {
        let now = Utc::now().naive_utc();
        let alias = entity::facility_alias::ActiveModel {
            facility_id: ActiveValue::Set(facility_id),
            alias_text: ActiveValue::Set(alias_text.to_string()),
            alias_normalized: ActiveValue::Set(text::alias_key(alias_text)),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        alias.insert(self.db).await
    }
}
