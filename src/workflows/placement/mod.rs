//! Placement workflow: the drive catalog, the application ledger, the
//! eligibility evaluator sitting between them, and the read models the
//! dashboard derives from all three.

pub mod catalog;
pub mod companies;
pub mod domain;
pub mod eligibility;
pub mod export;
pub mod ledger;
pub mod report;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{CatalogError, DriveCatalog};
pub use companies::{CompanyDirectory, DirectoryError, DirectoryMetrics};
pub use domain::{
    Application, ApplicationId, ApplicationStatus, Company, CompanyDraft, CompanyId,
    CompanyStatus, Drive, DriveDraft, DriveId, DriveStatus, EligibilityCriteria, StatusFilter,
    StudentId, StudentProfile, StudentRecord, ValidationError,
};
pub use eligibility::{
    evaluate, filter_eligible_drives, is_eligible, Criterion, CriterionCheck,
    EligibilityBreakdown,
};
pub use export::{
    drives_to_csv, eligibility_summary, write_drives_csv, ExportError, EXPORT_FILE_NAME,
};
pub use ledger::{ApplicationLedger, LedgerError};
pub use report::{monthly_activity, student_snapshot, DashboardSnapshot};
pub use service::{PlacementError, PlacementService};
