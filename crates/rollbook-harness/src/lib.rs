//! Transcript verification harness for rollbook.
//!
//! This crate provides:
//! - Fixture loading: golden stdin/stdout transcripts as JSON reference data
//! - Fixture verify: replay each stdin script through the collector and
//!   compare the captured transcript against its golden output
//! - Bless: regenerate golden outputs from the current implementation
//! - Report generation: human-readable + machine-readable verification reports

#![forbid(unsafe_code)]

pub mod fixtures;
pub mod report;
pub mod runner;

pub use fixtures::{FixtureError, TranscriptCase, TranscriptSet};
pub use report::{TranscriptReport, VerificationSummary};
pub use runner::{CaseResult, replay, run_case, run_set};
