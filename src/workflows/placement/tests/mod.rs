mod common;

mod eligibility;
mod service;
