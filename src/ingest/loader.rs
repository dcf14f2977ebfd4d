//! Upsert of parsed reference records into the facility catalog.

use std::{fs::File, path::Path};

use sea_orm::{DatabaseConnection, DbErr};
use tracing::info;

use crate::{
    data::facility::FacilityRepository,
    error::{ingest::IngestError, Error},
    ingest::{airports::AirportsReader, unlocode::UnlocodeReader},
    model::record::FacilityRecord,
};

/// Row counts for one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub inserted: u64,
    pub updated: u64,
}

/// Drains reference data readers into the facility catalog.
///
/// Records are keyed on their facility code: an unknown code inserts a new
/// active row, a known code overwrites that row's reference fields in
/// place. Activation state is operator-managed and never touched here.
pub struct ReferenceDataLoader<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceDataLoader<'a> {
    /// Creates a new instance of [`ReferenceDataLoader`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upsert every record into the catalog, counting inserts and updates.
    pub async fn load(
        &self,
        records: impl IntoIterator<Item = FacilityRecord>,
    ) -> Result<IngestSummary, DbErr> {
        let facility_repo = FacilityRepository::new(self.db);
        let mut summary = IngestSummary::default();

        for record in records {
            match facility_repo.find_any_by_code(&record.code).await? {
                Some(existing) => {
                    facility_repo.update_from_record(existing, &record).await?;
                    summary.updated += 1;
                }
                None => {
                    facility_repo.create(&record).await?;
                    summary.inserted += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Load a UN/LOCODE code-list file into the catalog.
    pub async fn load_unlocode_file(&self, path: &Path) -> Result<IngestSummary, Error> {
        let file = open_reference_file(path)?;
        let summary = self.load(UnlocodeReader::new(file)).await?;

        info!(
            "Loaded UN/LOCODE file {}: {} inserted, {} updated",
            path.display(),
            summary.inserted,
            summary.updated
        );

        Ok(summary)
    }

    /// Load an airport reference file into the catalog.
    pub async fn load_airports_file(&self, path: &Path) -> Result<IngestSummary, Error> {
        let file = open_reference_file(path)?;
        let summary = self.load(AirportsReader::new(file)).await?;

        info!(
            "Loaded airports file {}: {} inserted, {} updated",
            path.display(),
            summary.inserted,
            summary.updated
        );

        Ok(summary)
    }
}

fn open_reference_file(path: &Path) -> Result<File, IngestError> {
    File::open(path).map_err(|source| IngestError::OpenFile {
        path: path.to_path_buf(),
        source,
    })
}
