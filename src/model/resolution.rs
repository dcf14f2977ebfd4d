use serde::{Deserialize, Serialize};

use crate::model::db::FacilityModel;

/// Transport mode hint supplied by the caller.
///
/// Used only to break ties when multiple active facilities legitimately
/// match the same input; it never overrides an explicit structured code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransportMode {
    Sea,
    Air,
}

/// Outcome of resolving a compound free-text reference.
///
/// `facilities` is the union of resolved facilities deduplicated by
/// identity; `unresolved_tokens` holds the normalized tokens that matched
/// nothing, so reporting consumers can drive future alias seeding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionReport {
    pub facilities: Vec<FacilityModel>,
    pub unresolved_tokens: Vec<String>,
}
