//! Free-text place reference resolution.
//!
//! The engine runs an ordered cascade of lookup strategies, from the most
//! specific identifier shape down to fuzzy name prefixes: UN/LOCODE, IATA,
//! ICAO, parenthetical code, plain code, exact name, alias, then prefix
//! search. The first stage with a definitive answer ends the cascade, and a
//! stage facing an ambiguity it cannot break settles on no match instead of
//! picking a facility arbitrarily.

use entity::facility::FacilityCategory;
use sea_orm::{DatabaseConnection, DbErr};
use tracing::debug;

use crate::{
    data::{alias::AliasRepository, facility::FacilityRepository},
    error::Error,
    model::{
        db::FacilityModel,
        resolution::{ResolutionReport, TransportMode},
    },
    util::text,
};

pub mod cache;
mod split;


pub use cache::ResolutionCache;

/// Candidate rows a prefix lookup may return while still counting as
/// unambiguous.
const PREFIX_WINDOW: u64 = 5;

/// What a single cascade stage concluded about the input.
enum StageOutcome {
    Hit(FacilityModel),
    Unresolved,
    FallThrough,
}

impl StageOutcome {
    /// A settled stage ends the cascade; `FallThrough` hands the input on.
    fn settled(self) -> Option<Option<FacilityModel>> {
        match self {
            StageOutcome::Hit(facility) => Some(Some(facility)),
            StageOutcome::Unresolved => Some(None),
            StageOutcome::FallThrough => None,
        }
    }
}

pub struct ResolverService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResolverService<'a> {
    /// Creates a new instance of [`ResolverService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolve one place reference to at most one facility.
    ///
    /// The mode hint only breaks ties between co-located facilities; it never
    /// overrides an explicit code. Malformed or unknown input is a normal
    /// no-match outcome, not an error.
    pub async fn resolve_one(
        &self,
        input: &str,
        mode: Option<TransportMode>,
        cache: &mut ResolutionCache,
    ) -> Result<Option<FacilityModel>, Error> {
        let normalized = text::normalize(input);
        if normalized.is_empty() {
            return Ok(None);
        }

        if let Some(outcome) = cache.get(&normalized, mode) {
            return Ok(outcome);
        }

        let outcome = self.run_cascade(&normalized, mode).await?;
        cache.insert(&normalized, mode, outcome.clone());

        Ok(outcome)
    }

    /// Resolve a combined reference like "CAS/TFN" to the facilities its
    /// tokens name, dropping tokens that resolve to nothing.
    pub async fn resolve_many(
        &self,
        input: &str,
        cache: &mut ResolutionCache,
    ) -> Result<Vec<FacilityModel>, Error> {
        Ok(self
            .resolve_many_with_report(input, cache)
            .await?
            .facilities)
    }

    /// Like [`Self::resolve_many`], but also reports the tokens that did not
    /// resolve so callers can drive alias seeding from them.
    pub async fn resolve_many_with_report(
        &self,
        input: &str,
        cache: &mut ResolutionCache,
    ) -> Result<ResolutionReport, Error> {
        let mut report = ResolutionReport::default();

        for token in split::split_compound(input) {
            match self.resolve_one(&token, None, cache).await? {
                Some(facility) => {
                    if !report.facilities.iter().any(|f| f.id == facility.id) {
                        report.facilities.push(facility);
                    }
                }
                None => report.unresolved_tokens.push(token),
            }
        }

        Ok(report)
    }

    /// Resolve a reference and expand it to every active facility serving
    /// the same city, airports and inland terminals included.
    pub async fn resolve_by_city(
        &self,
        input: &str,
        cache: &mut ResolutionCache,
    ) -> Result<Vec<FacilityModel>, Error> {
        let Some(facility) = self.resolve_one(input, None, cache).await? else {
            return Ok(Vec::new());
        };

        let Some(city_unlocode) = facility.city_unlocode.clone() else {
            return Ok(vec![facility]);
        };

        Ok(FacilityRepository::new(self.db)
            .find_by_city_cluster(&city_unlocode)
            .await?)
    }

    /// Canonical uppercased code for a reference, or `None` when the
    /// reference does not resolve.
    pub async fn normalize_code(
        &self,
        input: &str,
        cache: &mut ResolutionCache,
    ) -> Result<Option<String>, Error> {
        Ok(self
            .resolve_one(input, None, cache)
            .await?
            .map(|facility| facility.code.to_uppercase()))
    }

    async fn run_cascade(
        &self,
        input: &str,
        mode: Option<TransportMode>,
    ) -> Result<Option<FacilityModel>, DbErr> {
        if let Some(result) = self.unlocode_stage(input, mode).await?.settled() {
            return Ok(result);
        }
        if let Some(result) = self.iata_stage(input).await?.settled() {
            return Ok(result);
        }
        if let Some(result) = self.icao_stage(input).await?.settled() {
            return Ok(result);
        }
        if let Some(result) = self.parenthetical_stage(input).await?.settled() {
            return Ok(result);
        }
        if let Some(result) = self.code_stage(input).await?.settled() {
            return Ok(result);
        }
        if let Some(result) = self.name_stage(input, mode).await?.settled() {
            return Ok(result);
        }
        if let Some(result) = self.alias_stage(input, mode).await?.settled() {
            return Ok(result);
        }
        if let Some(result) = self.prefix_stage(input).await?.settled() {
            return Ok(result);
        }

        Ok(None)
    }

    /// Stage 1: 5-character UN/LOCODE lookup. A city cluster sharing the
    /// code is broken by the mode preference, falling back to the first
    /// member rather than failing.
    async fn unlocode_stage(
        &self,
        input: &str,
        mode: Option<TransportMode>,
    ) -> Result<StageOutcome, DbErr> {
        if !text::is_unlocode_shape(input) {
            return Ok(StageOutcome::FallThrough);
        }

        let matches = FacilityRepository::new(self.db)
            .find_by_unlocode(input)
            .await?;

        match pick_from_cluster(matches, mode) {
            Some(facility) => Ok(StageOutcome::Hit(facility)),
            None => Ok(StageOutcome::FallThrough),
        }
    }

    /// Stage 2: 3-letter IATA lookup. An explicit airport code wins even
    /// under a sea mode hint.
    async fn iata_stage(&self, input: &str) -> Result<StageOutcome, DbErr> {
        if !text::is_iata_shape(input) {
            return Ok(StageOutcome::FallThrough);
        }

        match FacilityRepository::new(self.db).find_by_iata(input).await? {
            Some(facility) => Ok(StageOutcome::Hit(facility)),
            None => Ok(StageOutcome::FallThrough),
        }
    }

    /// Stage 3: 4-letter ICAO lookup.
    async fn icao_stage(&self, input: &str) -> Result<StageOutcome, DbErr> {
        if !text::is_icao_shape(input) {
            return Ok(StageOutcome::FallThrough);
        }

        match FacilityRepository::new(self.db).find_by_icao(input).await? {
            Some(facility) => Ok(StageOutcome::Hit(facility)),
            None => Ok(StageOutcome::FallThrough),
        }
    }

    /// Stage 4: code lifted from a parenthetical group, e.g.
    /// "Rotterdam (NLRTM)".
    async fn parenthetical_stage(&self, input: &str) -> Result<StageOutcome, DbErr> {
        let Some(code) = text::parenthetical_code(input) else {
            return Ok(StageOutcome::FallThrough);
        };

        match FacilityRepository::new(self.db).find_by_code(code).await? {
            Some(facility) => Ok(StageOutcome::Hit(facility)),
            None => Ok(StageOutcome::FallThrough),
        }
    }

    /// Stage 5: the input itself as a 2-6 character facility code.
    async fn code_stage(&self, input: &str) -> Result<StageOutcome, DbErr> {
        if !text::is_code_shape(input) {
            return Ok(StageOutcome::FallThrough);
        }

        match FacilityRepository::new(self.db).find_by_code(input).await? {
            Some(facility) => Ok(StageOutcome::Hit(facility)),
            None => Ok(StageOutcome::FallThrough),
        }
    }

    /// Stage 6: case-insensitive exact name match. Duplicates within one
    /// city cluster need an explicit mode naming exactly one member;
    /// duplicates across cities stay unresolved.
    async fn name_stage(
        &self,
        input: &str,
        mode: Option<TransportMode>,
    ) -> Result<StageOutcome, DbErr> {
        let mut matches = FacilityRepository::new(self.db)
            .find_by_exact_name(input)
            .await?;

        if matches.len() <= 1 {
            return Ok(match matches.pop() {
                Some(facility) => StageOutcome::Hit(facility),
                None => StageOutcome::FallThrough,
            });
        }

        let cluster = matches[0].city_unlocode.clone();
        let same_cluster = cluster.is_some() && matches.iter().all(|f| f.city_unlocode == cluster);
        if !same_cluster {
            debug!("name '{input}' matches {} unrelated facilities", matches.len());
            return Ok(StageOutcome::Unresolved);
        }

        let Some(mode) = mode else {
            debug!("name '{input}' is ambiguous within its city without a mode");
            return Ok(StageOutcome::Unresolved);
        };

        let preferred = preferred_category(Some(mode));
        let mut candidates = matches.into_iter().filter(|f| f.category == preferred);
        match (candidates.next(), candidates.next()) {
            (Some(facility), None) => Ok(StageOutcome::Hit(facility)),
            _ => Ok(StageOutcome::Unresolved),
        }
    }

    /// Stage 7: exact alias match. The normalized alias text is unique, so
    /// at most one facility can come back; when that facility sits in a
    /// multi-member cluster the mode preference may redirect to a sibling,
    /// keeping the aliased facility when no sibling fits.
    async fn alias_stage(
        &self,
        input: &str,
        mode: Option<TransportMode>,
    ) -> Result<StageOutcome, DbErr> {
        let facility_repo = FacilityRepository::new(self.db);

        let Some(alias) = AliasRepository::new(self.db).find_by_normalized(input).await? else {
            return Ok(StageOutcome::FallThrough);
        };
        let Some(facility) = facility_repo.find_active_by_id(alias.facility_id).await? else {
            return Ok(StageOutcome::FallThrough);
        };

        let Some(city_unlocode) = facility.city_unlocode.clone() else {
            return Ok(StageOutcome::Hit(facility));
        };

        let cluster = facility_repo.find_by_city_cluster(&city_unlocode).await?;
        if cluster.len() <= 1 {
            return Ok(StageOutcome::Hit(facility));
        }

        let preferred = preferred_category(mode);
        let redirected = cluster
            .into_iter()
            .find(|f| f.category == preferred)
            .unwrap_or(facility);

        Ok(StageOutcome::Hit(redirected))
    }

    /// Stage 8: starts-with search over names, then aliases. Only a window
    /// holding exactly one candidate counts; anything else is no match.
    async fn prefix_stage(&self, input: &str) -> Result<StageOutcome, DbErr> {
        let facility_repo = FacilityRepository::new(self.db);

        let mut names = facility_repo.find_by_name_prefix(input, PREFIX_WINDOW).await?;
        if names.len() == 1 {
            return Ok(StageOutcome::Hit(names.remove(0)));
        }

        let aliases = AliasRepository::new(self.db)
            .find_by_normalized_prefix(input, PREFIX_WINDOW)
            .await?;
        if aliases.len() == 1 {
            if let Some(facility) = facility_repo.find_active_by_id(aliases[0].facility_id).await? {
                return Ok(StageOutcome::Hit(facility));
            }
        }

        Ok(StageOutcome::FallThrough)
    }
}

/// Canonical display string for a facility, e.g. `"Rotterdam (NLRTM), NL"`.
pub fn format_canonical(facility: &FacilityModel) -> String {
    format!(
        "{} ({}), {}",
        facility.name,
        facility.code.to_uppercase(),
        facility.country
    )
}

fn preferred_category(mode: Option<TransportMode>) -> FacilityCategory {
    match mode {
        Some(TransportMode::Air) => FacilityCategory::Airport,
        // UN/LOCODEs conventionally designate the seaport unless qualified.
        Some(TransportMode::Sea) | None => FacilityCategory::SeaPort,
    }
}

/// Tiebreak for facilities sharing one code: the preferred category wins,
/// the first member in id order stands in when that category is absent.
fn pick_from_cluster(
    matches: Vec<FacilityModel>,
    mode: Option<TransportMode>,
) -> Option<FacilityModel> {
    let preferred = preferred_category(mode);
    let mut fallback = None;

    for facility in matches {
        if facility.category == preferred {
            return Some(facility);
        }
        fallback.get_or_insert(facility);
    }

    fallback
}
