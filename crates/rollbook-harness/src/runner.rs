//! Fixture execution: replay transcript cases through the collector.

use std::io::Cursor;

use serde::Serialize;

use rollbook_core::Collector;

use crate::fixtures::{TranscriptCase, TranscriptSet};

/// Outcome of replaying one case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub case_name: String,
    pub passed: bool,
    pub expected_output: String,
    pub actual_output: String,
    pub expected_error: Option<String>,
    pub actual_error: Option<String>,
}

/// Raw transcript of one collector run against a scripted stdin.
#[derive(Debug, Clone)]
pub struct CaseRun {
    /// Everything the collector wrote to its output stream.
    pub output: String,
    /// The diagnostic, if the run failed.
    pub error: Option<String>,
}

/// Run the collector against a literal stdin script.
pub fn replay(input: &str) -> CaseRun {
    let mut out = Vec::new();
    let result = Collector::new(Cursor::new(input.as_bytes().to_vec()), &mut out).run();
    CaseRun {
        output: String::from_utf8_lossy(&out).into_owned(),
        error: result.err().map(|err| err.to_string()),
    }
}

/// Replay one case and compare it against its goldens.
pub fn run_case(case: &TranscriptCase) -> CaseResult {
    let run = replay(&case.input);
    let passed = run.output == case.expected_output && run.error == case.expected_error;
    CaseResult {
        case_name: case.name.clone(),
        passed,
        expected_output: case.expected_output.clone(),
        actual_output: run.output,
        expected_error: case.expected_error.clone(),
        actual_error: run.error,
    }
}

/// Replay every case in a set.
pub fn run_set(set: &TranscriptSet) -> Vec<CaseResult> {
    set.cases.iter().map(run_case).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_captures_transcript_and_error() {
        let run = replay("-1\n");
        assert_eq!(run.output, "Enter number of students: ");
        assert_eq!(
            run.error.as_deref(),
            Some("student count must be non-negative, got -1")
        );
    }

    #[test]
    fn test_matching_case_passes() {
        let case = TranscriptCase {
            name: "empty_roster".into(),
            input: "0\n".into(),
            expected_output: "Enter number of students: \n\n===== Student Details =====\n".into(),
            expected_error: None,
        };
        let result = run_case(&case);
        assert!(result.passed, "diverged: {result:?}");
    }

    #[test]
    fn test_stale_golden_fails() {
        let case = TranscriptCase {
            name: "stale".into(),
            input: "0\n".into(),
            expected_output: "something else entirely".into(),
            expected_error: None,
        };
        let result = run_case(&case);
        assert!(!result.passed);
        assert_ne!(result.actual_output, result.expected_output);
    }

    #[test]
    fn test_expected_error_must_match() {
        let case = TranscriptCase {
            name: "wrong_error".into(),
            input: "-1\n".into(),
            expected_output: "Enter number of students: ".into(),
            expected_error: Some("some other diagnostic".into()),
        };
        assert!(!run_case(&case).passed);
    }
}
