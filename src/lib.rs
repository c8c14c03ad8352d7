//! Core engine behind a campus placement dashboard: eligibility
//! evaluation, the recruitment drive catalog, the application ledger,
//! and the read models the dashboard derives from them.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
