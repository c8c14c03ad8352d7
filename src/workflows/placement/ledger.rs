use chrono::NaiveDate;

use super::domain::{
    Application, ApplicationId, ApplicationStatus, Drive, DriveId, StudentId,
};

/// Errors surfaced by application ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("student {student} has already applied to drive {drive}")]
    AlreadyApplied { student: StudentId, drive: DriveId },
    #[error("application {0} not found")]
    ApplicationNotFound(ApplicationId),
    #[error("application status may not move from {from:?} to {to:?}")]
    TransitionBlocked {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },
}

/// Append-ordered record of every application made through the system.
///
/// The ledger enforces exactly one record per student and drive. It does
/// not gate on drive state or eligibility; that belongs to the service
/// sitting in front of it.
#[derive(Debug, Default)]
pub struct ApplicationLedger {
    applications: Vec<Application>,
}

impl ApplicationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an application against `drive`, copying company and position
    /// as they stand right now. Later edits to the drive leave the record
    /// untouched. New records start in `Applied`.
    pub fn apply(
        &mut self,
        student: &StudentId,
        drive: &Drive,
        applied_on: NaiveDate,
    ) -> Result<&Application, LedgerError> {
        if self.has_applied(student, drive.id) {
            return Err(LedgerError::AlreadyApplied {
                student: student.clone(),
                drive: drive.id,
            });
        }
        let application = Application {
            id: self.next_id(),
            student_id: student.clone(),
            drive_id: drive.id,
            company: drive.company.clone(),
            position: drive.position.clone(),
            applied_on,
            status: ApplicationStatus::Applied,
        };
        let index = self.applications.len();
        self.applications.push(application);
        Ok(&self.applications[index])
    }

    pub fn set_status(
        &mut self,
        id: ApplicationId,
        status: ApplicationStatus,
    ) -> Result<&Application, LedgerError> {
        let index = self
            .applications
            .iter()
            .position(|application| application.id == id)
            .ok_or(LedgerError::ApplicationNotFound(id))?;
        let current = self.applications[index].status;
        if !current.transition_allowed(status) {
            return Err(LedgerError::TransitionBlocked {
                from: current,
                to: status,
            });
        }
        self.applications[index].status = status;
        Ok(&self.applications[index])
    }

    pub fn get(&self, id: ApplicationId) -> Option<&Application> {
        self.applications
            .iter()
            .find(|application| application.id == id)
    }

    pub fn for_student(&self, student: &StudentId) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| &application.student_id == student)
            .collect()
    }

    pub fn for_drive(&self, drive: DriveId) -> Vec<&Application> {
        self.applications
            .iter()
            .filter(|application| application.drive_id == drive)
            .collect()
    }

    /// True count of applications for `drive`, regardless of what the
    /// drive's cached counter says.
    pub fn count_for_drive(&self, drive: DriveId) -> u32 {
        self.applications
            .iter()
            .filter(|application| application.drive_id == drive)
            .count() as u32
    }

    pub fn has_applied(&self, student: &StudentId, drive: DriveId) -> bool {
        self.applications
            .iter()
            .any(|application| &application.student_id == student && application.drive_id == drive)
    }

    /// All applications in the order they were recorded.
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }

    fn next_id(&self) -> ApplicationId {
        ApplicationId(
            self.applications
                .iter()
                .map(|application| application.id.0)
                .max()
                .unwrap_or(0)
                + 1,
        )
    }
}
