use super::common::{criteria, date, draft, open_draft, profile};
use crate::workflows::placement::catalog::DriveCatalog;
use crate::workflows::placement::domain::DriveStatus;
use crate::workflows::placement::eligibility::{
    evaluate, filter_eligible_drives, is_eligible, Criterion,
};

#[test]
fn boundary_equal_gpa_is_eligible() {
    let profile = profile();
    let criteria = criteria();
    assert_eq!(profile.gpa, criteria.min_cgpa);
    assert!(is_eligible(&profile, &criteria));
}

#[test]
fn gpa_below_minimum_fails_only_the_gpa_check() {
    let mut profile = profile();
    profile.gpa = 8.49;
    let criteria = criteria();

    assert!(!is_eligible(&profile, &criteria));

    let breakdown = evaluate(&profile, &criteria);
    assert!(!breakdown.eligible);
    let failing: Vec<_> = breakdown
        .checks
        .iter()
        .filter(|check| !check.satisfied)
        .map(|check| check.criterion)
        .collect();
    assert_eq!(failing, vec![Criterion::Cgpa]);
}

#[test]
fn backlogs_above_cap_are_rejected() {
    let mut profile = profile();
    profile.backlogs = 1;
    assert!(!is_eligible(&profile, &criteria()));

    profile.backlogs = 0;
    assert!(is_eligible(&profile, &criteria()));
}

#[test]
fn branch_outside_the_set_is_rejected() {
    let mut profile = profile();
    profile.branch = "Mechanical".to_string();
    assert!(!is_eligible(&profile, &criteria()));
}

#[test]
fn empty_branch_set_admits_every_branch() {
    let mut criteria = criteria();
    criteria.branches.clear();

    let mut profile = profile();
    profile.branch = "Mechanical".to_string();
    assert!(is_eligible(&profile, &criteria));
}

#[test]
fn batch_year_must_match_exactly() {
    let criteria = criteria();

    let mut profile = profile();
    profile.batch_year = 2024;
    assert!(!is_eligible(&profile, &criteria));

    profile.batch_year = 2026;
    assert!(!is_eligible(&profile, &criteria));

    profile.batch_year = 2025;
    assert!(is_eligible(&profile, &criteria));
}

#[test]
fn missing_percentage_satisfies_any_threshold() {
    let mut criteria = criteria();
    criteria.tenth_percentage = Some(85.0);

    let mut profile = profile();
    profile.tenth_percentage = None;
    assert!(is_eligible(&profile, &criteria));

    profile.tenth_percentage = Some(80.0);
    assert!(!is_eligible(&profile, &criteria));

    profile.tenth_percentage = Some(85.0);
    assert!(is_eligible(&profile, &criteria));
}

#[test]
fn unset_percentage_requirement_ignores_profile_values() {
    let criteria = criteria();
    let mut profile = profile();
    profile.tenth_percentage = Some(10.0);
    profile.twelfth_percentage = Some(10.0);
    assert!(is_eligible(&profile, &criteria));
}

#[test]
fn filter_keeps_only_active_drives_in_catalog_order() {
    let mut catalog = DriveCatalog::new();
    catalog
        .create(open_draft("Initech", "Analyst", DriveStatus::Archived))
        .expect("drive created");
    catalog
        .create(open_draft("Umbrella", "Researcher", DriveStatus::Active))
        .expect("drive created");
    catalog
        .create(open_draft("Globex", "Engineer", DriveStatus::Draft))
        .expect("drive created");
    catalog
        .create(open_draft("Acme", "Developer", DriveStatus::Active))
        .expect("drive created");

    let eligible = filter_eligible_drives(&profile(), catalog.drives());
    let companies: Vec<_> = eligible.iter().map(|drive| drive.company.as_str()).collect();
    assert_eq!(companies, vec!["Acme", "Umbrella"]);
}

#[test]
fn filter_skips_active_drives_whose_criteria_fail() {
    let mut catalog = DriveCatalog::new();
    catalog
        .create(open_draft("Acme", "Developer", DriveStatus::Active))
        .expect("drive created");
    let mut strict = draft("Stark", "Engineer", DriveStatus::Active);
    strict.eligibility.min_cgpa = 9.5;
    catalog.create(strict).expect("drive created");

    let eligible = filter_eligible_drives(&profile(), catalog.drives());
    let companies: Vec<_> = eligible.iter().map(|drive| drive.company.as_str()).collect();
    assert_eq!(companies, vec!["Acme"]);
}

#[test]
fn evaluate_agrees_with_is_eligible() {
    let mut strict = criteria();
    strict.tenth_percentage = Some(90.0);
    strict.twelfth_percentage = Some(85.0);

    let mut failing = profile();
    failing.gpa = 7.0;
    failing.batch_year = 2024;

    let mut missing_records = profile();
    missing_records.tenth_percentage = None;
    missing_records.twelfth_percentage = None;

    for criteria in [criteria(), strict] {
        for profile in [profile(), failing.clone(), missing_records.clone()] {
            let breakdown = evaluate(&profile, &criteria);
            assert_eq!(
                breakdown.eligible,
                is_eligible(&profile, &criteria),
                "verdicts diverged for profile {profile:?} against {criteria:?}"
            );
        }
    }
}

#[test]
fn breakdown_marks_exactly_the_failing_criteria() {
    let mut criteria = criteria();
    criteria.tenth_percentage = Some(95.0);

    let mut profile = profile();
    profile.gpa = 8.0;
    profile.batch_year = 2024;
    profile.tenth_percentage = Some(91.0);

    let breakdown = evaluate(&profile, &criteria);
    assert!(!breakdown.eligible);

    let failing: Vec<_> = breakdown
        .checks
        .iter()
        .filter(|check| !check.satisfied)
        .map(|check| check.criterion)
        .collect();
    assert_eq!(
        failing,
        vec![Criterion::Cgpa, Criterion::BatchYear, Criterion::TenthPercentage]
    );
}

#[test]
fn breakdown_omits_unset_percentage_criteria() {
    let breakdown = evaluate(&profile(), &criteria());
    assert!(breakdown
        .checks
        .iter()
        .all(|check| check.criterion != Criterion::TenthPercentage
            && check.criterion != Criterion::TwelfthPercentage
            && check.criterion != Criterion::DiplomaPercentage));
    assert_eq!(breakdown.checks.len(), 4);
}

#[test]
fn deadline_does_not_gate_eligibility() {
    let mut catalog = DriveCatalog::new();
    let mut past = open_draft("Acme", "Developer", DriveStatus::Active);
    past.deadline = Some(date(2020, 1, 1));
    catalog.create(past).expect("drive created");

    let eligible = filter_eligible_drives(&profile(), catalog.drives());
    assert_eq!(eligible.len(), 1);
}
