mod summary;
pub mod views;

pub use summary::{monthly_activity, student_snapshot, DashboardSnapshot};
