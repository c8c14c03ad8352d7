use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a student, typically the roll number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier assigned to a recruitment drive by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriveId(pub u32);

impl fmt::Display for DriveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to an application record by the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub u32);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier assigned to a partner company by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId(pub u32);

impl fmt::Display for CompanyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Academic profile a student presents to the eligibility evaluator.
///
/// The three percentage fields are optional because not every student has
/// every credential on record; a missing value satisfies any threshold a
/// drive may set for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub gpa: f64,
    pub backlogs: u32,
    pub branch: String,
    pub batch_year: i32,
    #[serde(default)]
    pub tenth_percentage: Option<f64>,
    #[serde(default)]
    pub twelfth_percentage: Option<f64>,
    #[serde(default)]
    pub diploma_percentage: Option<f64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resume_url: Option<String>,
}

/// A student as the placement cell tracks them: identity plus profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: StudentId,
    pub name: String,
    pub profile: StudentProfile,
}

/// Requirements a drive imposes on applicants. Every criterion must hold
/// for a profile to qualify.
///
/// An empty `branches` set means the drive is open to all branches.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EligibilityCriteria {
    pub min_cgpa: f64,
    pub max_backlogs: u32,
    #[serde(default)]
    pub branches: BTreeSet<String>,
    pub batch_year: i32,
    #[serde(default)]
    pub tenth_percentage: Option<f64>,
    #[serde(default)]
    pub twelfth_percentage: Option<f64>,
    #[serde(default)]
    pub diploma_percentage: Option<f64>,
    #[serde(default)]
    pub additional_requirements: String,
}

/// Lifecycle state of a recruitment drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriveStatus {
    Draft,
    Active,
    Archived,
}

impl DriveStatus {
    /// Pairs that may not transition directly. Every pair is currently
    /// legal; tightening the lifecycle means adding entries here.
    const FORBIDDEN: &'static [(DriveStatus, DriveStatus)] = &[];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Active => "Active",
            Self::Archived => "Archived",
        }
    }

    pub const fn ordered() -> [Self; 3] {
        [Self::Draft, Self::Active, Self::Archived]
    }

    pub fn transition_allowed(self, next: DriveStatus) -> bool {
        !Self::FORBIDDEN.contains(&(self, next))
    }
}

/// Review state of a submitted application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Rejected,
    Accepted,
}

impl ApplicationStatus {
    const FORBIDDEN: &'static [(ApplicationStatus, ApplicationStatus)] = &[];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Shortlisted => "Shortlisted",
            Self::Rejected => "Rejected",
            Self::Accepted => "Accepted",
        }
    }

    pub const fn ordered() -> [Self; 4] {
        [Self::Applied, Self::Shortlisted, Self::Rejected, Self::Accepted]
    }

    pub fn transition_allowed(self, next: ApplicationStatus) -> bool {
        !Self::FORBIDDEN.contains(&(self, next))
    }
}

/// Relationship state of a partner company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyStatus {
    Active,
    Draft,
    Inactive,
}

impl CompanyStatus {
    const FORBIDDEN: &'static [(CompanyStatus, CompanyStatus)] = &[];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Draft => "Draft",
            Self::Inactive => "Inactive",
        }
    }

    pub const fn ordered() -> [Self; 3] {
        [Self::Active, Self::Draft, Self::Inactive]
    }

    pub fn transition_allowed(self, next: CompanyStatus) -> bool {
        !Self::FORBIDDEN.contains(&(self, next))
    }
}

/// Status constraint applied by store searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S: Copy + PartialEq> StatusFilter<S> {
    pub fn admits(self, status: S) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// A recruitment drive as the catalog stores it.
///
/// `applications` is a display counter maintained alongside the ledger, not
/// derived from it on read; admins may set it directly and the service
/// reconciles it against the ledger on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drive {
    pub id: DriveId,
    pub company: String,
    pub position: String,
    pub applications: u32,
    pub deadline: NaiveDate,
    pub package: String,
    pub status: DriveStatus,
    pub eligibility: EligibilityCriteria,
}

/// Input for creating or fully replacing a drive. The catalog assigns the
/// identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveDraft {
    pub company: String,
    pub position: String,
    pub package: String,
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub applications: u32,
    pub status: DriveStatus,
    pub eligibility: EligibilityCriteria,
}

impl Default for DriveDraft {
    fn default() -> Self {
        Self {
            company: String::new(),
            position: String::new(),
            package: String::new(),
            deadline: None,
            applications: 0,
            status: DriveStatus::Draft,
            eligibility: EligibilityCriteria::default(),
        }
    }
}

impl DriveDraft {
    pub(crate) fn into_drive(self, id: DriveId) -> Result<Drive, ValidationError> {
        let company = required_text("company", self.company)?;
        let position = required_text("position", self.position)?;
        let package = required_text("package", self.package)?;
        let deadline = self
            .deadline
            .ok_or(ValidationError::MissingField("deadline"))?;
        Ok(Drive {
            id,
            company,
            position,
            applications: self.applications,
            deadline,
            package,
            status: self.status,
            eligibility: self.eligibility,
        })
    }
}

/// A single application a student has made to a drive.
///
/// `company` and `position` are copied from the drive at apply time so the
/// record stays readable even after the drive is edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub student_id: StudentId,
    pub drive_id: DriveId,
    pub company: String,
    pub position: String,
    pub applied_on: NaiveDate,
    pub status: ApplicationStatus,
}

/// A partner company in the relations directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub last_contact: NaiveDate,
    pub status: CompanyStatus,
    pub partnership_since: NaiveDate,
}

/// Input for creating or fully replacing a company record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDraft {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub last_contact: NaiveDate,
    pub status: CompanyStatus,
    pub partnership_since: NaiveDate,
}

impl CompanyDraft {
    /// Blank form with the dates prefilled to `today` and status `Draft`,
    /// mirroring how a new company is entered.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            contact_person: String::new(),
            email: String::new(),
            phone: String::new(),
            last_contact: today,
            status: CompanyStatus::Draft,
            partnership_since: today,
        }
    }

    pub(crate) fn into_company(self, id: CompanyId) -> Result<Company, ValidationError> {
        let name = required_text("name", self.name)?;
        let contact_person = required_text("contact_person", self.contact_person)?;
        let email = required_text("email", self.email)?;
        let phone = required_text("phone", self.phone)?;
        Ok(Company {
            id,
            name,
            contact_person,
            email,
            phone,
            last_contact: self.last_contact,
            status: self.status,
            partnership_since: self.partnership_since,
        })
    }
}

/// Rejection raised when a draft is missing a required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field `{0}` is missing or blank")]
    MissingField(&'static str),
}

fn required_text(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(value)
}
