mod demo;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use placement_ops::config::AppConfig;
use placement_ops::error::AppError;
use placement_ops::telemetry;
use placement_ops::workflows::placement::{
    monthly_activity, write_drives_csv, DashboardSnapshot, StatusFilter, StudentProfile,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Placement Ops",
    about = "Run the campus placement dashboard engine from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the admin dashboard over the bundled demo season (default command)
    Dashboard(DashboardArgs),
    /// Drive catalog operations
    Drives {
        #[command(subcommand)]
        command: DrivesCommand,
    },
    /// Eligibility evaluation helpers
    Eligibility {
        #[command(subcommand)]
        command: EligibilityCommand,
    },
}

#[derive(Args, Debug, Default)]
struct DashboardArgs {
    /// Emit the snapshot as JSON instead of the text rendering
    #[arg(long)]
    json: bool,
    /// Reporting date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
enum DrivesCommand {
    /// Write the drive table to drives_export.csv
    Export(ExportArgs),
}

#[derive(Args, Debug)]
struct ExportArgs {
    /// Directory receiving the export (defaults to APP_EXPORT_DIR)
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum EligibilityCommand {
    /// Evaluate a profile against the bundled drive catalog
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Cumulative GPA on a 10-point scale
    #[arg(long)]
    gpa: f64,
    /// Current number of backlogs
    #[arg(long, default_value_t = 0)]
    backlogs: u32,
    /// Branch as it appears in drive criteria, e.g. "Computer Science"
    #[arg(long)]
    branch: String,
    /// Graduating batch year
    #[arg(long)]
    batch_year: i32,
    /// 10th board percentage, if on record
    #[arg(long)]
    tenth: Option<f64>,
    /// 12th board percentage, if on record
    #[arg(long)]
    twelfth: Option<f64>,
    /// Diploma percentage, if on record
    #[arg(long)]
    diploma: Option<f64>,
    /// Show the per-criterion breakdown for every drive, not just the verdicts
    #[arg(long)]
    list: bool,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Dashboard(DashboardArgs::default()));

    match command {
        Command::Dashboard(args) => run_dashboard(&config, args),
        Command::Drives {
            command: DrivesCommand::Export(args),
        } => run_export(&config, args),
        Command::Eligibility {
            command: EligibilityCommand::Check(args),
        } => run_check(args),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn run_dashboard(config: &AppConfig, args: DashboardArgs) -> Result<(), AppError> {
    let data = demo::demo_data()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let snapshot = DashboardSnapshot::compute(
        data.service.catalog(),
        data.service.ledger(),
        &data.directory,
        &data.students,
        config.reporting.top_companies,
    );
    let months = monthly_activity(data.service.ledger(), today.year());
    let relations = data.directory.metrics(today);

    info!(
        students = data.students.len(),
        drives = data.service.catalog().len(),
        applications = data.service.ledger().len(),
        "dashboard snapshot computed"
    );

    if args.json {
        let payload = json!({
            "dashboard": snapshot,
            "monthly_activity": months,
            "company_relations": relations,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        demo::render_dashboard(&snapshot, &months, &relations, today);
    }

    Ok(())
}

fn run_export(config: &AppConfig, args: ExportArgs) -> Result<(), AppError> {
    let data = demo::demo_data()?;
    let catalog = data.service.catalog();
    let drives = catalog.search("", StatusFilter::All);

    let dir = args
        .out
        .unwrap_or_else(|| config.reporting.export_dir.clone());
    let path = write_drives_csv(&dir, &drives)?;

    info!(path = %path.display(), rows = drives.len(), "drive export written");
    println!("Exported {} drives to {}", drives.len(), path.display());

    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let data = demo::demo_data()?;
    let profile = StudentProfile {
        gpa: args.gpa,
        backlogs: args.backlogs,
        branch: args.branch,
        batch_year: args.batch_year,
        tenth_percentage: args.tenth,
        twelfth_percentage: args.twelfth,
        diploma_percentage: args.diploma,
        skills: Vec::new(),
        resume_url: None,
    };

    demo::render_eligibility(&profile, data.service.catalog(), args.list);

    Ok(())
}
