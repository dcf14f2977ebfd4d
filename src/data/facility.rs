use chrono::Utc;
use entity::facility::FacilityCategory;
use sea_orm::{
    sea_query::{Expr, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::{db::FacilityModel, record::FacilityRecord},
    util::text,
};

pub struct FacilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacilityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_active_by_id(&self, id: i32) -> Result<Option<FacilityModel>, DbErr> {
        entity::prelude::Facility::find()
            .filter(entity::facility::Column::Id.eq(id))
            .filter(entity::facility::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// All active facilities carrying the given UN/LOCODE, in id order.
    /// More than one row means a city cluster shares the code.
    pub async fn find_by_unlocode(&self, unlocode: &str) -> Result<Vec<FacilityModel>, DbErr> {
        entity::prelude::Facility::find()
            .filter(entity::facility::Column::Unlocode.eq(unlocode.to_uppercase()))
            .filter(entity::facility::Column::IsActive.eq(true))
            .order_by_asc(entity::facility::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_iata(&self, iata_code: &str) -> Result<Option<FacilityModel>, DbErr> {
        entity::prelude::Facility::find()
            .filter(entity::facility::Column::IataCode.eq(iata_code.to_uppercase()))
            .filter(entity::facility::Column::Category.eq(FacilityCategory::Airport))
            .filter(entity::facility::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    pub async fn find_by_icao(&self, icao_code: &str) -> Result<Option<FacilityModel>, DbErr> {
        entity::prelude::Facility::find()
            .filter(entity::facility::Column::IcaoCode.eq(icao_code.to_uppercase()))
            .filter(entity::facility::Column::Category.eq(FacilityCategory::Airport))
            .filter(entity::facility::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<FacilityModel>, DbErr> {
        entity::prelude::Facility::find()
            .filter(entity::facility::Column::Code.eq(code.to_uppercase()))
            .filter(entity::facility::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    pub async fn find_by_exact_name(&self, name: &str) -> Result<Vec<FacilityModel>, DbErr> {
        entity::prelude::Facility::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::facility::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .filter(entity::facility::Column::IsActive.eq(true))
            .order_by_asc(entity::facility::Column::Id)
            .all(self.db)
            .await
    }

    /// Case-insensitive "starts with" on `name`, capped at `limit` rows.
    /// LIKE wildcards in the prefix are escaped so user text matches
    /// literally.
    pub async fn find_by_name_prefix(
        &self,
        prefix: &str,
        limit: u64,
    ) -> Result<Vec<FacilityModel>, DbErr> {
        let pattern = format!("{}%", text::escape_like(&prefix.to_lowercase()));

        entity::prelude::Facility::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::facility::Column::Name)))
                    .like(LikeExpr::new(pattern).escape('\\')),
            )
            .filter(entity::facility::Column::IsActive.eq(true))
            .order_by_asc(entity::facility::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }

    pub async fn find_by_city_cluster(
        &self,
        city_unlocode: &str,
    ) -> Result<Vec<FacilityModel>, DbErr> {
        entity::prelude::Facility::find()
            .filter(entity::facility::Column::CityUnlocode.eq(city_unlocode.to_uppercase()))
            .filter(entity::facility::Column::IsActive.eq(true))
            .order_by_asc(entity::facility::Column::Id)
            .all(self.db)
            .await
    }

    /// Lookup by code without the active filter. The loader uses this so a
    /// deactivated facility is updated in place rather than re-inserted.
    pub async fn find_any_by_code(&self, code: &str) -> Result<Option<FacilityModel>, DbErr> {
        entity::prelude::Facility::find()
            .filter(entity::facility::Column::Code.eq(code.to_uppercase()))
            .one(self.db)
            .await
    }

    pub async fn create(&self, record: &FacilityRecord) -> Result<FacilityModel, DbErr> {
        let now = Utc::now().naive_utc();
        let facility = entity::facility::ActiveModel {
            code: ActiveValue::Set(record.code.clone()),
            name: ActiveValue::Set(record.name.clone()),
            country: ActiveValue::Set(record.country.clone()),
            region: ActiveValue::Set(record.region.clone()),
            category: ActiveValue::Set(record.category),
            unlocode: ActiveValue::Set(record.unlocode.clone()),
            city_unlocode: ActiveValue::Set(record.city_unlocode.clone()),
            iata_code: ActiveValue::Set(record.iata_code.clone()),
            icao_code: ActiveValue::Set(record.icao_code.clone()),
            latitude: ActiveValue::Set(record.latitude),
            longitude: ActiveValue::Set(record.longitude),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        facility.insert(self.db).await
    }

    /// Overwrite a facility's reference fields from a freshly parsed record.
    /// `is_active` is left untouched: deactivation is an operator decision
    /// and a reference reload must not undo it.
    pub async fn update_from_record(
        &self,
        facility: FacilityModel,
        record: &FacilityRecord,
    ) -> Result<FacilityModel, DbErr> {
        let mut facility = facility.into_active_model();
        facility.name = ActiveValue::Set(record.name.clone());
        facility.country = ActiveValue::Set(record.country.clone());
        facility.region = ActiveValue::Set(record.region.clone());
        facility.category = ActiveValue::Set(record.category);
        facility.unlocode = ActiveValue::Set(record.unlocode.clone());
        facility.city_unlocode = ActiveValue::Set(record.city_unlocode.clone());
        facility.iata_code = ActiveValue::Set(record.iata_code.clone());
        facility.icao_code = ActiveValue::Set(record.icao_code.clone());
        facility.latitude = ActiveValue::Set(record.latitude);
        facility.longitude = ActiveValue::Set(record.longitude);
        facility.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        facility.update(self.db).await
    }
}
