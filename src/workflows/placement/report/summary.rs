use std::collections::{BTreeMap, HashSet};

use chrono::Datelike;
use serde::Serialize;

use super::super::catalog::DriveCatalog;
use super::super::companies::CompanyDirectory;
use super::super::domain::{ApplicationStatus, Drive, DriveStatus, StudentId, StudentProfile, StudentRecord};
use super::super::eligibility::filter_eligible_drives;
use super::super::ledger::ApplicationLedger;
use super::views::{
    DepartmentPlacementRow, DriveRow, MonthlyActivityEntry, StatCards, StudentSnapshot,
    TopCompanyEntry,
};

const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Point-in-time read model for the admin dashboard. Recomputed from the
/// stores on every call; nothing here is cached or incrementally
/// maintained.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub stat_cards: StatCards,
    pub departments: Vec<DepartmentPlacementRow>,
    pub top_companies: Vec<TopCompanyEntry>,
    pub recent_drives: Vec<DriveRow>,
}

impl DashboardSnapshot {
    /// Derive the dashboard from the current store contents. A student
    /// counts as placed when any of their applications is accepted. The
    /// company ranking reads each drive's cached counter and keeps at most
    /// `top_n` entries; ties keep catalog order.
    pub fn compute(
        catalog: &DriveCatalog,
        ledger: &ApplicationLedger,
        directory: &CompanyDirectory,
        students: &[StudentRecord],
        top_n: usize,
    ) -> Self {
        let placed: HashSet<&StudentId> = ledger
            .applications()
            .iter()
            .filter(|application| application.status == ApplicationStatus::Accepted)
            .map(|application| &application.student_id)
            .collect();

        let total_students = students.len();
        let placed_students = students
            .iter()
            .filter(|student| placed.contains(&student.id))
            .count();
        let active_drives = catalog
            .drives()
            .iter()
            .filter(|drive| drive.status == DriveStatus::Active)
            .count();

        let stat_cards = StatCards {
            total_students,
            active_drives,
            placement_rate: rate(placed_students, total_students),
            companies: directory.len(),
        };

        let mut by_department: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for student in students {
            let entry = by_department
                .entry(student.profile.branch.as_str())
                .or_default();
            entry.0 += 1;
            if placed.contains(&student.id) {
                entry.1 += 1;
            }
        }
        let departments = by_department
            .into_iter()
            .map(|(department, (students, placed))| DepartmentPlacementRow {
                department: department.to_string(),
                students,
                placed,
                placement_rate: rate(placed, students),
            })
            .collect();

        let mut ranked: Vec<&Drive> = catalog.drives().iter().collect();
        ranked.sort_by(|a, b| b.applications.cmp(&a.applications));
        let top_companies = ranked
            .into_iter()
            .take(top_n)
            .map(|drive| TopCompanyEntry {
                company: drive.company.clone(),
                applications: drive.applications,
                package: drive.package.clone(),
                status: drive.status,
                status_label: drive.status.label(),
            })
            .collect();

        let recent_drives = catalog
            .drives()
            .iter()
            .map(|drive| DriveRow {
                id: drive.id,
                company: drive.company.clone(),
                position: drive.position.clone(),
                applications: drive.applications,
                deadline: drive.deadline,
                package: drive.package.clone(),
                status: drive.status,
                status_label: drive.status.label(),
            })
            .collect();

        Self {
            stat_cards,
            departments,
            top_companies,
            recent_drives,
        }
    }
}

/// Bucket the ledger's records for `year` into twelve calendar months.
/// Placements count accepted applications by the month they were applied
/// in, the way the activity chart reads them.
pub fn monthly_activity(ledger: &ApplicationLedger, year: i32) -> Vec<MonthlyActivityEntry> {
    let mut entries: Vec<MonthlyActivityEntry> = (1..=12)
        .map(|month| MonthlyActivityEntry {
            month,
            month_label: MONTH_LABELS[(month - 1) as usize],
            applications: 0,
            placements: 0,
        })
        .collect();
    for application in ledger.applications() {
        if application.applied_on.year() != year {
            continue;
        }
        let index = (application.applied_on.month() - 1) as usize;
        entries[index].applications += 1;
        if application.status == ApplicationStatus::Accepted {
            entries[index].placements += 1;
        }
    }
    entries
}

/// Stat cards for one student: open drives they qualify for and the state
/// of their own applications. Pending covers applied and shortlisted.
pub fn student_snapshot(
    student: &StudentId,
    profile: &StudentProfile,
    catalog: &DriveCatalog,
    ledger: &ApplicationLedger,
) -> StudentSnapshot {
    let available_drives = filter_eligible_drives(profile, catalog.drives()).len();
    let mine = ledger.for_student(student);
    let pending = mine
        .iter()
        .filter(|application| {
            matches!(
                application.status,
                ApplicationStatus::Applied | ApplicationStatus::Shortlisted
            )
        })
        .count();
    StudentSnapshot {
        available_drives,
        applications: mine.len(),
        pending,
        gpa: profile.gpa,
    }
}

fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}
