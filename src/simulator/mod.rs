//! Classroom economy simulator for Monte Carlo analysis.
//!
//! Runs a synthetic classroom through many rounds of trivia answers and
//! hack attempts to analyze:
//! - Cred inflation and spread across the cohort
//! - Level curve over a session
//! - Hack outcome rates under the canonical balance constants

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;
