use sea_orm::ActiveEnum;
use serde::{Deserialize, Serialize};

use crate::model::{db::FacilityModel, resolution::ResolutionReport};

/// Serializable view of a resolved facility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedFacilityDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub country: String,
    pub category: String,
}

impl From<&FacilityModel> for ResolvedFacilityDto {
    fn from(facility: &FacilityModel) -> Self {
        Self {
            id: facility.id,
            code: facility.code.clone(),
            name: facility.name.clone(),
            country: facility.country.clone(),
            category: facility.category.to_value(),
        }
    }
}

/// Serializable view of a compound resolution outcome, consumed by the
/// nightly alias-gap report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionReportDto {
    pub facilities: Vec<ResolvedFacilityDto>,
    pub unresolved_tokens: Vec<String>,
}

impl From<&ResolutionReport> for ResolutionReportDto {
    fn from(report: &ResolutionReport) -> Self {
        Self {
            facilities: report
                .facilities
                .iter()
                .map(ResolvedFacilityDto::from)
                .collect(),
            unresolved_tokens: report.unresolved_tokens.clone(),
        }
    }
}
