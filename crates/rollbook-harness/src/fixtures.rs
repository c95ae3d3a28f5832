//! Transcript fixture loading and management.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure while loading a fixture file.
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed fixture JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single golden-transcript case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptCase {
    /// Case identifier.
    pub name: String,
    /// Literal text fed to the collector as stdin.
    pub input: String,
    /// Golden stdout transcript.
    pub expected_output: String,
    /// Expected diagnostic text, or `None` for a successful session.
    #[serde(default)]
    pub expected_error: Option<String>,
}

/// A collection of transcript cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSet {
    /// Schema version.
    pub version: String,
    /// What this set covers.
    pub description: String,
    /// Individual cases.
    pub cases: Vec<TranscriptCase>,
}

impl TranscriptSet {
    /// Load a transcript set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the transcript set to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a transcript set from a file path.
    pub fn from_file(path: &std::path::Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        let set = Self::from_json(&content)?;
        Ok(set)
    }
}
