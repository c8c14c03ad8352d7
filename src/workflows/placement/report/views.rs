//! Serialization-friendly shapes for dashboard consumers. Each view
//! carries the raw status alongside its display label so clients can
//! branch on one and print the other.

use chrono::NaiveDate;
use serde::Serialize;

use super::super::domain::{DriveId, DriveStatus};

/// Headline numbers for the admin dashboard's stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatCards {
    pub total_students: usize,
    pub active_drives: usize,
    /// Fraction of the roster with at least one accepted application,
    /// in `0.0..=1.0`. Rounding happens only at display time.
    pub placement_rate: f64,
    pub companies: usize,
}

impl StatCards {
    pub fn placement_rate_label(&self) -> String {
        format!("{}%", (self.placement_rate * 100.0).round())
    }
}

/// Placement standing of one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentPlacementRow {
    pub department: String,
    pub students: usize,
    pub placed: usize,
    pub placement_rate: f64,
}

impl DepartmentPlacementRow {
    pub fn rate_label(&self) -> String {
        format!("{}%", (self.placement_rate * 100.0).round())
    }
}

/// One entry of the top-hiring-companies ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCompanyEntry {
    pub company: String,
    pub applications: u32,
    pub package: String,
    pub status: DriveStatus,
    pub status_label: &'static str,
}

/// One row of the recent-drives table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DriveRow {
    pub id: DriveId,
    pub company: String,
    pub position: String,
    pub applications: u32,
    pub deadline: NaiveDate,
    pub package: String,
    pub status: DriveStatus,
    pub status_label: &'static str,
}

/// Application and placement volume for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyActivityEntry {
    pub month: u32,
    pub month_label: &'static str,
    pub applications: usize,
    pub placements: usize,
}

/// Stat cards for a single student's dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StudentSnapshot {
    pub available_drives: usize,
    pub applications: usize,
    pub pending: usize,
    pub gpa: f64,
}
