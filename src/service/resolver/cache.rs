use std::collections::HashMap;

use crate::model::{db::FacilityModel, resolution::TransportMode};

/// Session-scoped memo of resolution outcomes, misses included.
///
/// One pricing run resolves the same handful of strings dozens of times, so
/// each session owns a cache it discards afterwards. Entries are keyed on the
/// normalized input together with the mode hint, since the hint can change
/// which cluster member wins a tie.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entries: HashMap<(String, Option<TransportMode>), Option<FacilityModel>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &self,
        input: &str,
        mode: Option<TransportMode>,
    ) -> Option<Option<FacilityModel>> {
        self.entries.get(&(input.to_string(), mode)).cloned()
    }

    pub fn insert(
        &mut self,
        input: &str,
        mode: Option<TransportMode>,
        outcome: Option<FacilityModel>,
    ) {
        self.entries.insert((input.to_string(), mode), outcome);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
