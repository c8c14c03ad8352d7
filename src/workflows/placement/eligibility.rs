//! Pure eligibility evaluation: a profile either meets every criterion a
//! drive sets or it does not. No store access and no clock; callers pass
//! everything in.

use serde::Serialize;

use super::domain::{Drive, DriveStatus, EligibilityCriteria, StudentProfile};

/// Percentage assumed for a credential the student has no record of. A
/// missing value never blocks an application.
const ASSUMED_PERCENTAGE: f64 = 100.0;

/// Whether `profile` satisfies every criterion in `criteria`.
///
/// The gate fails closed: equality with a threshold passes, anything short
/// of one fails, and the batch year must match exactly.
pub fn is_eligible(profile: &StudentProfile, criteria: &EligibilityCriteria) -> bool {
    profile.gpa >= criteria.min_cgpa
        && profile.backlogs <= criteria.max_backlogs
        && branch_admitted(criteria, &profile.branch)
        && profile.batch_year == criteria.batch_year
        && meets_percentage(criteria.tenth_percentage, profile.tenth_percentage)
        && meets_percentage(criteria.twelfth_percentage, profile.twelfth_percentage)
        && meets_percentage(criteria.diploma_percentage, profile.diploma_percentage)
}

/// Drives the student can currently apply to: active and eligible, in the
/// order the slice already carries.
pub fn filter_eligible_drives<'a>(
    profile: &StudentProfile,
    drives: &'a [Drive],
) -> Vec<&'a Drive> {
    drives
        .iter()
        .filter(|drive| {
            drive.status == DriveStatus::Active && is_eligible(profile, &drive.eligibility)
        })
        .collect()
}

fn branch_admitted(criteria: &EligibilityCriteria, branch: &str) -> bool {
    criteria.branches.is_empty() || criteria.branches.contains(branch)
}

fn meets_percentage(required: Option<f64>, achieved: Option<f64>) -> bool {
    match required {
        Some(threshold) => achieved.unwrap_or(ASSUMED_PERCENTAGE) >= threshold,
        None => true,
    }
}

/// One criterion the evaluator looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Cgpa,
    Backlogs,
    Branch,
    BatchYear,
    TenthPercentage,
    TwelfthPercentage,
    DiplomaPercentage,
}

impl Criterion {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cgpa => "CGPA",
            Self::Backlogs => "Backlogs",
            Self::Branch => "Branch",
            Self::BatchYear => "Batch year",
            Self::TenthPercentage => "10th percentage",
            Self::TwelfthPercentage => "12th percentage",
            Self::DiplomaPercentage => "Diploma percentage",
        }
    }
}

/// Verdict on a single criterion, with a human-readable note for review
/// screens and audit logs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriterionCheck {
    pub criterion: Criterion,
    pub satisfied: bool,
    pub note: String,
}

/// Full account of an eligibility decision. Percentage criteria a drive
/// does not set are omitted rather than reported as trivially satisfied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EligibilityBreakdown {
    pub eligible: bool,
    pub checks: Vec<CriterionCheck>,
}

/// Evaluate `profile` against `criteria` and explain the outcome per
/// criterion. `eligible` agrees with [`is_eligible`]: both consult the same
/// gate helpers.
pub fn evaluate(profile: &StudentProfile, criteria: &EligibilityCriteria) -> EligibilityBreakdown {
    let mut checks = Vec::new();

    checks.push(CriterionCheck {
        criterion: Criterion::Cgpa,
        satisfied: profile.gpa >= criteria.min_cgpa,
        note: format!(
            "CGPA {:.2} against minimum {:.2}",
            profile.gpa, criteria.min_cgpa
        ),
    });

    checks.push(CriterionCheck {
        criterion: Criterion::Backlogs,
        satisfied: profile.backlogs <= criteria.max_backlogs,
        note: format!(
            "{} backlog(s), at most {} allowed",
            profile.backlogs, criteria.max_backlogs
        ),
    });

    checks.push(CriterionCheck {
        criterion: Criterion::Branch,
        satisfied: branch_admitted(criteria, &profile.branch),
        note: if criteria.branches.is_empty() {
            format!("{} admitted, drive is open to all branches", profile.branch)
        } else {
            format!(
                "{} against allowed {}",
                profile.branch,
                criteria
                    .branches
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join("/")
            )
        },
    });

    checks.push(CriterionCheck {
        criterion: Criterion::BatchYear,
        satisfied: profile.batch_year == criteria.batch_year,
        note: format!(
            "batch {} against required {}",
            profile.batch_year, criteria.batch_year
        ),
    });

    checks.extend(percentage_check(
        Criterion::TenthPercentage,
        criteria.tenth_percentage,
        profile.tenth_percentage,
    ));
    checks.extend(percentage_check(
        Criterion::TwelfthPercentage,
        criteria.twelfth_percentage,
        profile.twelfth_percentage,
    ));
    checks.extend(percentage_check(
        Criterion::DiplomaPercentage,
        criteria.diploma_percentage,
        profile.diploma_percentage,
    ));

    let eligible = checks.iter().all(|check| check.satisfied);
    EligibilityBreakdown { eligible, checks }
}

fn percentage_check(
    criterion: Criterion,
    required: Option<f64>,
    achieved: Option<f64>,
) -> Option<CriterionCheck> {
    let threshold = required?;
    Some(CriterionCheck {
        criterion,
        satisfied: meets_percentage(required, achieved),
        note: match achieved {
            Some(value) => format!("{value:.1}% against required {threshold:.1}%"),
            None => format!(
                "not on record, counted as meeting the {threshold:.1}% requirement"
            ),
        },
    })
}
