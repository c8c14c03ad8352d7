use chrono::NaiveDate;

use super::catalog::{CatalogError, DriveCatalog};
use super::domain::{
    Application, ApplicationId, ApplicationStatus, Drive, DriveDraft, DriveId, DriveStatus,
    StudentId, StudentProfile, StudentRecord,
};
use super::eligibility::{filter_eligible_drives, is_eligible};
use super::ledger::{ApplicationLedger, LedgerError};

/// Errors surfaced by the placement service.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    #[error("drive {0} is not open for applications")]
    DriveNotOpen(DriveId),
    #[error("student {student} does not meet the eligibility criteria for drive {drive}")]
    NotEligible { student: StudentId, drive: DriveId },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

/// Composes the drive catalog and the application ledger behind the apply
/// flow, keeping each drive's cached counter in step with the ledger for
/// its own writes.
#[derive(Debug, Default)]
pub struct PlacementService {
    catalog: DriveCatalog,
    ledger: ApplicationLedger,
}

impl PlacementService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stores(catalog: DriveCatalog, ledger: ApplicationLedger) -> Self {
        Self { catalog, ledger }
    }

    pub fn catalog(&self) -> &DriveCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &ApplicationLedger {
        &self.ledger
    }

    /// Apply `student` to a drive, enforcing the full gate: the drive must
    /// exist, be active, and admit the student's profile, and the student
    /// must not have applied to it before. A refused application leaves
    /// both stores untouched. On success the drive's cached counter moves
    /// up by one alongside the new ledger record.
    pub fn apply_to_drive(
        &mut self,
        student: &StudentRecord,
        drive_id: DriveId,
        today: NaiveDate,
    ) -> Result<Application, PlacementError> {
        let drive = self
            .catalog
            .get(drive_id)
            .ok_or(CatalogError::DriveNotFound(drive_id))?;
        if drive.status != DriveStatus::Active {
            return Err(PlacementError::DriveNotOpen(drive_id));
        }
        if !is_eligible(&student.profile, &drive.eligibility) {
            return Err(PlacementError::NotEligible {
                student: student.id.clone(),
                drive: drive_id,
            });
        }
        let cached = drive.applications;
        let application = self.ledger.apply(&student.id, drive, today)?.clone();
        self.catalog
            .set_applications(drive_id, cached.saturating_add(1))?;
        Ok(application)
    }

    /// Rewrite every drive's cached counter from the ledger's true counts,
    /// repairing whatever drift admin edits have introduced.
    pub fn reconcile_application_counts(&mut self) -> Result<(), PlacementError> {
        let counts: Vec<(DriveId, u32)> = self
            .catalog
            .drives()
            .iter()
            .map(|drive| (drive.id, self.ledger.count_for_drive(drive.id)))
            .collect();
        for (id, count) in counts {
            self.catalog.set_applications(id, count)?;
        }
        Ok(())
    }

    /// Active drives the profile qualifies for, in catalog order.
    pub fn eligible_drives(&self, profile: &StudentProfile) -> Vec<&Drive> {
        filter_eligible_drives(profile, self.catalog.drives())
    }

    pub fn create_drive(&mut self, draft: DriveDraft) -> Result<&Drive, PlacementError> {
        Ok(self.catalog.create(draft)?)
    }

    pub fn update_drive(&mut self, id: DriveId, draft: DriveDraft) -> Result<&Drive, PlacementError> {
        Ok(self.catalog.update(id, draft)?)
    }

    /// Delete a drive. Ledger records for it survive as historical entries
    /// under their copied company and position.
    pub fn delete_drive(&mut self, id: DriveId) -> Result<Drive, PlacementError> {
        Ok(self.catalog.delete(id)?)
    }

    pub fn set_drive_status(
        &mut self,
        id: DriveId,
        status: DriveStatus,
    ) -> Result<&Drive, PlacementError> {
        Ok(self.catalog.set_status(id, status)?)
    }

    pub fn set_application_status(
        &mut self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<&Application, PlacementError> {
        Ok(self.ledger.set_status(id, status)?)
    }
}
