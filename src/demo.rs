use chrono::NaiveDate;
use placement_ops::error::AppError;
use placement_ops::workflows::placement::{
    evaluate, filter_eligible_drives, ApplicationStatus, CompanyDirectory, CompanyDraft,
    CompanyStatus, DirectoryMetrics, DriveCatalog, DriveDraft, DriveStatus, EligibilityCriteria,
    PlacementService, StudentId, StudentProfile, StudentRecord,
};
use placement_ops::workflows::placement::report::views::MonthlyActivityEntry;
use placement_ops::workflows::placement::DashboardSnapshot;

/// Everything the demo commands operate on, seeded to resemble one
/// placement season in flight.
pub(crate) struct DemoData {
    pub(crate) service: PlacementService,
    pub(crate) directory: CompanyDirectory,
    pub(crate) students: Vec<StudentRecord>,
}

/// Build the bundled demo season through the same public operations the
/// dashboard uses: last season's drives take real applications and are
/// archived, this season's drives arrive with admin-entered counters.
pub(crate) fn demo_data() -> Result<DemoData, AppError> {
    let john = StudentRecord {
        id: StudentId("STU-2025-001".to_string()),
        name: "John Doe".to_string(),
        profile: StudentProfile {
            gpa: 9.2,
            backlogs: 0,
            branch: "Computer Science".to_string(),
            batch_year: 2025,
            tenth_percentage: Some(92.4),
            twelfth_percentage: Some(90.1),
            diploma_percentage: None,
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            resume_url: Some("https://campus.example.edu/resumes/john-doe.pdf".to_string()),
        },
    };
    let jane = StudentRecord {
        id: StudentId("STU-2025-002".to_string()),
        name: "Jane Smith".to_string(),
        profile: StudentProfile {
            gpa: 8.8,
            backlogs: 0,
            branch: "Electronics & Communication".to_string(),
            batch_year: 2025,
            tenth_percentage: Some(88.2),
            twelfth_percentage: Some(86.5),
            diploma_percentage: None,
            skills: vec!["Embedded C".to_string(), "VHDL".to_string()],
            resume_url: None,
        },
    };
    let mike = StudentRecord {
        id: StudentId("STU-2025-003".to_string()),
        name: "Mike Johnson".to_string(),
        profile: StudentProfile {
            gpa: 9.0,
            backlogs: 0,
            branch: "Information Technology".to_string(),
            batch_year: 2025,
            tenth_percentage: Some(90.0),
            twelfth_percentage: Some(89.3),
            diploma_percentage: None,
            skills: vec!["Java".to_string(), "Kubernetes".to_string()],
            resume_url: None,
        },
    };
    let sarah = StudentRecord {
        id: StudentId("STU-2025-004".to_string()),
        name: "Sarah Wilson".to_string(),
        profile: StudentProfile {
            gpa: 8.9,
            backlogs: 1,
            branch: "Computer Science".to_string(),
            batch_year: 2025,
            tenth_percentage: Some(91.7),
            twelfth_percentage: Some(88.0),
            diploma_percentage: None,
            skills: vec!["Python".to_string(), "ML".to_string()],
            resume_url: None,
        },
    };

    let mut service = PlacementService::new();

    // Last season's drives: open while applications come in, archived after.
    let tcs = service
        .create_drive(drive_draft(
            "TCS",
            "Software Engineer",
            "₹7 LPA",
            date(2025, 1, 20),
            0,
            DriveStatus::Active,
            criteria(6.0, 2, &[], 2025),
        ))?
        .id;
    let infosys = service
        .create_drive(drive_draft(
            "Infosys",
            "System Engineer",
            "₹6.5 LPA",
            date(2025, 1, 18),
            0,
            DriveStatus::Active,
            criteria(6.5, 1, &[], 2025),
        ))?
        .id;
    let wipro = service
        .create_drive(drive_draft(
            "Wipro",
            "Developer",
            "₹6 LPA",
            date(2025, 1, 15),
            0,
            DriveStatus::Active,
            criteria(6.0, 1, &[], 2025),
        ))?
        .id;

    let john_wipro = service.apply_to_drive(&john, wipro, date(2025, 1, 5))?.id;
    let john_infosys = service.apply_to_drive(&john, infosys, date(2025, 1, 8))?.id;
    service.apply_to_drive(&john, tcs, date(2025, 1, 10))?;
    let mike_tcs = service.apply_to_drive(&mike, tcs, date(2025, 1, 12))?.id;
    let sarah_infosys = service.apply_to_drive(&sarah, infosys, date(2025, 1, 15))?.id;

    service.set_application_status(john_wipro, ApplicationStatus::Rejected)?;
    service.set_application_status(john_infosys, ApplicationStatus::Shortlisted)?;
    service.set_application_status(mike_tcs, ApplicationStatus::Accepted)?;
    service.set_application_status(sarah_infosys, ApplicationStatus::Accepted)?;

    service.set_drive_status(tcs, DriveStatus::Archived)?;
    service.set_drive_status(infosys, DriveStatus::Archived)?;
    service.set_drive_status(wipro, DriveStatus::Archived)?;

    // This season's drives carry the counters the admins keyed in.
    service.create_drive(drive_draft(
        "Amazon",
        "Software Developer",
        "₹22 LPA",
        date(2025, 2, 25),
        67,
        DriveStatus::Draft,
        criteria(9.0, 0, &[], 2025),
    ))?;
    service.create_drive(drive_draft(
        "Microsoft",
        "SDE Intern",
        "₹50k/month",
        date(2025, 2, 20),
        89,
        DriveStatus::Active,
        EligibilityCriteria {
            tenth_percentage: Some(85.0),
            ..criteria(
                8.0,
                0,
                &[
                    "Computer Science",
                    "Electronics & Communication",
                    "Information Technology",
                ],
                2025,
            )
        },
    ))?;
    service.create_drive(drive_draft(
        "Google",
        "Software Engineer",
        "₹25 LPA",
        date(2025, 2, 15),
        145,
        DriveStatus::Active,
        EligibilityCriteria {
            additional_requirements: "Strong DSA fundamentals".to_string(),
            ..criteria(
                8.5,
                0,
                &["Computer Science", "Information Technology"],
                2025,
            )
        },
    ))?;

    let mut directory = CompanyDirectory::new();
    directory.create(company_draft(
        "TCS",
        "Ravi Kumar",
        "campus@tcs.example.com",
        "+91 98100 11223",
        date(2025, 1, 22),
        CompanyStatus::Active,
        date(2015, 6, 1),
    ))?;
    directory.create(company_draft(
        "Google",
        "Priya Sharma",
        "university@google.example.com",
        "+91 98200 44556",
        date(2025, 2, 1),
        CompanyStatus::Active,
        date(2018, 7, 12),
    ))?;
    directory.create(company_draft(
        "Microsoft",
        "Arjun Mehta",
        "campus-hiring@microsoft.example.com",
        "+91 98300 77889",
        date(2025, 1, 28),
        CompanyStatus::Active,
        date(2019, 3, 5),
    ))?;
    directory.create(company_draft(
        "Amazon",
        "Neha Gupta",
        "hiring@amazon.example.com",
        "+91 98400 22334",
        date(2025, 2, 5),
        CompanyStatus::Draft,
        date(2024, 11, 18),
    ))?;

    Ok(DemoData {
        service,
        directory,
        students: vec![john, jane, mike, sarah],
    })
}

pub(crate) fn render_dashboard(
    snapshot: &DashboardSnapshot,
    months: &[MonthlyActivityEntry],
    relations: &DirectoryMetrics,
    today: NaiveDate,
) {
    println!("Placement dashboard (evaluated {today})");

    println!("\nOverview");
    println!("- Total students: {}", snapshot.stat_cards.total_students);
    println!("- Active drives: {}", snapshot.stat_cards.active_drives);
    println!(
        "- Placement rate: {}",
        snapshot.stat_cards.placement_rate_label()
    );
    println!("- Companies: {}", snapshot.stat_cards.companies);

    println!("\nDepartment placement");
    for row in &snapshot.departments {
        println!(
            "- {}: {}/{} placed ({})",
            row.department,
            row.placed,
            row.students,
            row.rate_label()
        );
    }

    println!("\nTop hiring companies");
    for entry in &snapshot.top_companies {
        println!(
            "- {}: {} applications | {} | {}",
            entry.company, entry.applications, entry.package, entry.status_label
        );
    }

    println!("\nRecent drives");
    for drive in &snapshot.recent_drives {
        println!(
            "- {} | {} | {} applications | deadline {} | {} | {}",
            drive.company,
            drive.position,
            drive.applications,
            drive.deadline,
            drive.package,
            drive.status_label
        );
    }

    let active_months: Vec<_> = months
        .iter()
        .filter(|month| month.applications > 0 || month.placements > 0)
        .collect();
    if active_months.is_empty() {
        println!("\nMonthly activity: none this year");
    } else {
        println!("\nMonthly activity");
        for month in active_months {
            println!(
                "- {}: {} applications, {} placements",
                month.month_label, month.applications, month.placements
            );
        }
    }

    println!("\nCompany relations");
    println!(
        "- {} companies | {} active partners | {}+ years partnering",
        relations.total, relations.active_partners, relations.years_partnering
    );
}

pub(crate) fn render_eligibility(profile: &StudentProfile, catalog: &DriveCatalog, list: bool) {
    println!(
        "Eligibility check: CGPA {:.2}, {} backlog(s), {}, batch {}",
        profile.gpa, profile.backlogs, profile.branch, profile.batch_year
    );

    let eligible = filter_eligible_drives(profile, catalog.drives());
    if eligible.is_empty() {
        println!("\nOpen drives this profile can apply to: none");
    } else {
        println!("\nOpen drives this profile can apply to");
        for drive in &eligible {
            println!(
                "- {} | {} | deadline {} | {}",
                drive.company, drive.position, drive.deadline, drive.package
            );
        }
    }

    if list {
        println!("\nCriteria breakdown");
        for drive in catalog.drives() {
            let breakdown = evaluate(profile, &drive.eligibility);
            let verdict = if breakdown.eligible {
                "eligible"
            } else {
                "not eligible"
            };
            println!(
                "- {} | {} [{}]: {}",
                drive.company,
                drive.position,
                drive.status.label(),
                verdict
            );
            for check in &breakdown.checks {
                let mark = if check.satisfied { "pass" } else { "fail" };
                println!("    {} {}: {}", mark, check.criterion.label(), check.note);
            }
        }
    }
}

fn drive_draft(
    company: &str,
    position: &str,
    package: &str,
    deadline: NaiveDate,
    applications: u32,
    status: DriveStatus,
    eligibility: EligibilityCriteria,
) -> DriveDraft {
    DriveDraft {
        company: company.to_string(),
        position: position.to_string(),
        package: package.to_string(),
        deadline: Some(deadline),
        applications,
        status,
        eligibility,
    }
}

fn company_draft(
    name: &str,
    contact_person: &str,
    email: &str,
    phone: &str,
    last_contact: NaiveDate,
    status: CompanyStatus,
    partnership_since: NaiveDate,
) -> CompanyDraft {
    CompanyDraft {
        name: name.to_string(),
        contact_person: contact_person.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        last_contact,
        status,
        partnership_since,
    }
}

fn criteria(
    min_cgpa: f64,
    max_backlogs: u32,
    branches: &[&str],
    batch_year: i32,
) -> EligibilityCriteria {
    EligibilityCriteria {
        min_cgpa,
        max_backlogs,
        branches: branches.iter().map(|branch| branch.to_string()).collect(),
        batch_year,
        ..EligibilityCriteria::default()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
