use super::common::{date, draft, open_draft, service_with_open_drive, student};
use crate::workflows::placement::catalog::CatalogError;
use crate::workflows::placement::domain::{
    ApplicationStatus, DriveId, DriveStatus, StudentId,
};
use crate::workflows::placement::ledger::LedgerError;
use crate::workflows::placement::service::{PlacementError, PlacementService};

#[test]
fn apply_records_the_application_and_bumps_the_counter() {
    let (mut service, drive_id) = service_with_open_drive();
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);

    let application = service
        .apply_to_drive(&john, drive_id, date(2025, 1, 10))
        .expect("application accepted");

    assert_eq!(application.student_id, john.id);
    assert_eq!(application.drive_id, drive_id);
    assert_eq!(application.company, "Globex");
    assert_eq!(application.status, ApplicationStatus::Applied);
    assert_eq!(service.catalog().get(drive_id).expect("drive present").applications, 1);
    assert_eq!(service.ledger().count_for_drive(drive_id), 1);
}

#[test]
fn apply_to_a_draft_drive_is_refused() {
    let mut service = PlacementService::new();
    let drive_id = service
        .create_drive(open_draft("Globex", "Graduate Engineer", DriveStatus::Draft))
        .expect("drive created")
        .id;
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);

    let res = service.apply_to_drive(&john, drive_id, date(2025, 1, 10));
    match res {
        Err(PlacementError::DriveNotOpen(refused)) => assert_eq!(refused, drive_id),
        other => panic!("expected DriveNotOpen, got {other:?}"),
    }
    assert!(service.ledger().is_empty());
    assert_eq!(service.catalog().get(drive_id).expect("drive present").applications, 0);
}

#[test]
fn apply_to_an_archived_drive_is_refused() {
    let mut service = PlacementService::new();
    let drive_id = service
        .create_drive(open_draft(
            "Globex",
            "Graduate Engineer",
            DriveStatus::Archived,
        ))
        .expect("drive created")
        .id;
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);

    let res = service.apply_to_drive(&john, drive_id, date(2025, 1, 10));
    match res {
        Err(PlacementError::DriveNotOpen(_)) => {}
        other => panic!("expected DriveNotOpen, got {other:?}"),
    }
    assert!(service.ledger().is_empty());
}

#[test]
fn ineligible_student_is_refused_without_any_write() {
    let mut service = PlacementService::new();
    let drive_id = service
        .create_drive(draft("Globex", "Graduate Engineer", DriveStatus::Active))
        .expect("drive created")
        .id;
    let outsider = student("STU-9", "Max Weber", "Mechanical", 9.9);

    let res = service.apply_to_drive(&outsider, drive_id, date(2025, 1, 10));
    match res {
        Err(PlacementError::NotEligible { student, drive }) => {
            assert_eq!(student, StudentId("STU-9".to_string()));
            assert_eq!(drive, drive_id);
        }
        other => panic!("expected NotEligible, got {other:?}"),
    }
    assert!(service.ledger().is_empty());
    assert_eq!(service.catalog().get(drive_id).expect("drive present").applications, 0);
}

#[test]
fn apply_to_a_missing_drive_reports_not_found() {
    let mut service = PlacementService::new();
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);

    let res = service.apply_to_drive(&john, DriveId(42), date(2025, 1, 10));
    match res {
        Err(PlacementError::Catalog(CatalogError::DriveNotFound(DriveId(42)))) => {}
        other => panic!("expected DriveNotFound, got {other:?}"),
    }
}

#[test]
fn duplicate_apply_is_refused_and_the_counter_stays_put() {
    let (mut service, drive_id) = service_with_open_drive();
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);

    service
        .apply_to_drive(&john, drive_id, date(2025, 1, 10))
        .expect("application accepted");
    let res = service.apply_to_drive(&john, drive_id, date(2025, 1, 11));
    match res {
        Err(PlacementError::Ledger(LedgerError::AlreadyApplied { .. })) => {}
        other => panic!("expected AlreadyApplied, got {other:?}"),
    }
    assert_eq!(service.catalog().get(drive_id).expect("drive present").applications, 1);
    assert_eq!(service.ledger().len(), 1);
}

#[test]
fn apply_moves_the_cached_counter_up_from_wherever_it_sits() {
    let mut service = PlacementService::new();
    let mut prefilled = open_draft("Globex", "Graduate Engineer", DriveStatus::Active);
    prefilled.applications = 145;
    let drive_id = service
        .create_drive(prefilled)
        .expect("drive created")
        .id;
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);

    service
        .apply_to_drive(&john, drive_id, date(2025, 1, 10))
        .expect("application accepted");

    assert_eq!(service.catalog().get(drive_id).expect("drive present").applications, 146);
    assert_eq!(service.ledger().count_for_drive(drive_id), 1);
}

#[test]
fn reconcile_rewrites_counters_from_the_ledger() {
    let mut service = PlacementService::new();
    let mut drifted = open_draft("Globex", "Graduate Engineer", DriveStatus::Active);
    drifted.applications = 999;
    let busy = service.create_drive(drifted).expect("drive created").id;
    let idle = service
        .create_drive(open_draft("Acme", "Developer", DriveStatus::Active))
        .expect("drive created")
        .id;

    service
        .apply_to_drive(
            &student("STU-1", "John Doe", "Computer Science", 9.2),
            busy,
            date(2025, 1, 10),
        )
        .expect("application accepted");
    service
        .apply_to_drive(
            &student("STU-2", "Jane Smith", "Computer Science", 8.8),
            busy,
            date(2025, 1, 11),
        )
        .expect("application accepted");

    service
        .reconcile_application_counts()
        .expect("counters reconciled");

    assert_eq!(service.catalog().get(busy).expect("drive present").applications, 2);
    assert_eq!(service.catalog().get(idle).expect("drive present").applications, 0);
}

#[test]
fn eligible_drives_skips_closed_and_failing_drives() {
    let mut service = PlacementService::new();
    service
        .create_drive(open_draft("Initech", "Analyst", DriveStatus::Archived))
        .expect("drive created");
    service
        .create_drive(draft("Umbrella", "Researcher", DriveStatus::Active))
        .expect("drive created");
    service
        .create_drive(open_draft("Globex", "Graduate Engineer", DriveStatus::Active))
        .expect("drive created");
    let outsider = student("STU-9", "Max Weber", "Mechanical", 9.9);

    let open = service.eligible_drives(&outsider.profile);
    let companies: Vec<_> = open.iter().map(|drive| drive.company.as_str()).collect();
    assert_eq!(companies, vec!["Globex"]);
}

#[test]
fn deleting_a_drive_keeps_its_ledger_records() {
    let (mut service, drive_id) = service_with_open_drive();
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);
    service
        .apply_to_drive(&john, drive_id, date(2025, 1, 10))
        .expect("application accepted");

    service.delete_drive(drive_id).expect("drive deleted");

    assert!(service.catalog().is_empty());
    let survivors = service.ledger().for_drive(drive_id);
    assert_eq!(survivors.len(), 1);
    assert_eq!(survivors[0].company, "Globex");
}

#[test]
fn editing_a_drive_leaves_recorded_snapshots_alone() {
    let (mut service, drive_id) = service_with_open_drive();
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);
    service
        .apply_to_drive(&john, drive_id, date(2025, 1, 10))
        .expect("application accepted");

    let mut renamed = open_draft("Globex Robotics", "Automation Engineer", DriveStatus::Active);
    renamed.applications = 1;
    service
        .update_drive(drive_id, renamed)
        .expect("drive updated");

    let records = service.ledger().for_drive(drive_id);
    assert_eq!(records[0].company, "Globex");
    assert_eq!(records[0].position, "Graduate Engineer");
}

#[test]
fn application_status_moves_through_the_service() {
    let (mut service, drive_id) = service_with_open_drive();
    let john = student("STU-1", "John Doe", "Computer Science", 9.2);
    let id = service
        .apply_to_drive(&john, drive_id, date(2025, 1, 10))
        .expect("application accepted")
        .id;

    let moved = service
        .set_application_status(id, ApplicationStatus::Shortlisted)
        .expect("status moved");
    assert_eq!(moved.status, ApplicationStatus::Shortlisted);
}

#[test]
fn drive_status_moves_through_the_service() {
    let (mut service, drive_id) = service_with_open_drive();
    let archived = service
        .set_drive_status(drive_id, DriveStatus::Archived)
        .expect("status moved");
    assert_eq!(archived.status, DriveStatus::Archived);
}
