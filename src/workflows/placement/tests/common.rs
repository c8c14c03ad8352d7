use chrono::NaiveDate;

use crate::workflows::placement::catalog::DriveCatalog;
use crate::workflows::placement::domain::{
    CompanyDraft, CompanyStatus, DriveDraft, DriveId, DriveStatus, EligibilityCriteria,
    StudentId, StudentProfile, StudentRecord,
};
use crate::workflows::placement::service::PlacementService;

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Baseline profile that satisfies [`criteria`] exactly at every boundary.
pub(super) fn profile() -> StudentProfile {
    StudentProfile {
        gpa: 8.5,
        backlogs: 0,
        branch: "Computer Science".to_string(),
        batch_year: 2025,
        tenth_percentage: Some(91.0),
        twelfth_percentage: Some(89.0),
        diploma_percentage: None,
        skills: vec!["Rust".to_string()],
        resume_url: None,
    }
}

/// Baseline criteria: CGPA 8.5+, no backlogs, CS or IT, batch 2025.
pub(super) fn criteria() -> EligibilityCriteria {
    EligibilityCriteria {
        min_cgpa: 8.5,
        max_backlogs: 0,
        branches: ["Computer Science", "Information Technology"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        batch_year: 2025,
        tenth_percentage: None,
        twelfth_percentage: None,
        diploma_percentage: None,
        additional_requirements: String::new(),
    }
}

/// Open-to-everyone criteria a baseline profile always passes.
pub(super) fn open_criteria() -> EligibilityCriteria {
    EligibilityCriteria {
        min_cgpa: 0.0,
        max_backlogs: 10,
        branches: Default::default(),
        batch_year: 2025,
        ..EligibilityCriteria::default()
    }
}

pub(super) fn draft(company: &str, position: &str, status: DriveStatus) -> DriveDraft {
    DriveDraft {
        company: company.to_string(),
        position: position.to_string(),
        package: "₹10 LPA".to_string(),
        deadline: Some(date(2025, 3, 1)),
        applications: 0,
        status,
        eligibility: criteria(),
    }
}

pub(super) fn open_draft(company: &str, position: &str, status: DriveStatus) -> DriveDraft {
    DriveDraft {
        eligibility: open_criteria(),
        ..draft(company, position, status)
    }
}

pub(super) fn student(id: &str, name: &str, branch: &str, gpa: f64) -> StudentRecord {
    StudentRecord {
        id: StudentId(id.to_string()),
        name: name.to_string(),
        profile: StudentProfile {
            gpa,
            branch: branch.to_string(),
            ..profile()
        },
    }
}

pub(super) fn company_draft(name: &str, contact_person: &str, status: CompanyStatus) -> CompanyDraft {
    CompanyDraft {
        name: name.to_string(),
        contact_person: contact_person.to_string(),
        email: format!("contact@{}.example.com", name.to_lowercase()),
        phone: "+91 98000 00000".to_string(),
        last_contact: date(2025, 1, 15),
        status,
        partnership_since: date(2020, 6, 1),
    }
}

/// Service holding one active open-criteria drive, returning its id.
pub(super) fn service_with_open_drive() -> (PlacementService, DriveId) {
    let mut service = PlacementService::new();
    let id = service
        .create_drive(open_draft(
            "Globex",
            "Graduate Engineer",
            DriveStatus::Active,
        ))
        .expect("drive created")
        .id;
    (service, id)
}

/// Catalog holding one drive per status, oldest to newest: archived,
/// draft, active.
pub(super) fn mixed_status_catalog() -> DriveCatalog {
    let mut catalog = DriveCatalog::new();
    catalog
        .create(open_draft("Initech", "Analyst", DriveStatus::Archived))
        .expect("archived drive created");
    catalog
        .create(open_draft("Umbrella", "Researcher", DriveStatus::Draft))
        .expect("draft drive created");
    catalog
        .create(open_draft("Globex", "Graduate Engineer", DriveStatus::Active))
        .expect("active drive created");
    catalog
}
