//! Verification report generation (markdown + JSON).

use serde::Serialize;

use crate::runner::CaseResult;

/// Aggregate over a batch of case results.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<CaseResult>,
}

impl VerificationSummary {
    pub fn from_results(results: Vec<CaseResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Full verification report document.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptReport {
    pub title: String,
    pub timestamp: String,
    pub summary: VerificationSummary,
}

impl TranscriptReport {
    /// Render the report as markdown. Failed cases include both
    /// transcripts verbatim so a diff needs no re-run.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        md.push_str(&format!("# {}\n\n", self.title));
        md.push_str(&format!("Generated: {}\n\n", self.timestamp));
        md.push_str(&format!(
            "Total: {} | Passed: {} | Failed: {}\n\n",
            self.summary.total, self.summary.passed, self.summary.failed
        ));
        md.push_str("| Case | Status |\n|------|--------|\n");
        for result in &self.summary.results {
            let status = if result.passed { "PASS" } else { "FAIL" };
            md.push_str(&format!("| {} | {} |\n", result.case_name, status));
        }
        for result in &self.summary.results {
            if result.passed {
                continue;
            }
            md.push_str(&format!("\n## {}\n\n", result.case_name));
            md.push_str("Expected transcript:\n\n```\n");
            md.push_str(&result.expected_output);
            md.push_str("\n```\n\nActual transcript:\n\n```\n");
            md.push_str(&result.actual_output);
            md.push_str("\n```\n");
            if result.expected_error != result.actual_error {
                md.push_str(&format!(
                    "\nExpected error: {:?}\nActual error:   {:?}\n",
                    result.expected_error, result.actual_error
                ));
            }
        }
        md
    }

    /// Render the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, passed: bool) -> CaseResult {
        CaseResult {
            case_name: name.into(),
            passed,
            expected_output: "a".into(),
            actual_output: if passed { "a".into() } else { "b".into() },
            expected_error: None,
            actual_error: None,
        }
    }

    #[test]
    fn test_summary_counts() {
        let summary =
            VerificationSummary::from_results(vec![result("x", true), result("y", false)]);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed, 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_markdown_lists_every_case() {
        let report = TranscriptReport {
            title: "rollbook Transcript Report".into(),
            timestamp: "fixed".into(),
            summary: VerificationSummary::from_results(vec![
                result("x", true),
                result("y", false),
            ]),
        };
        let md = report.to_markdown();
        assert!(md.contains("| x | PASS |"));
        assert!(md.contains("| y | FAIL |"));
        assert!(md.contains("## y"), "failed case gets a diff section");
        assert!(!md.contains("## x"), "passing case gets no diff section");
    }

    #[test]
    fn test_json_is_parseable() {
        let report = TranscriptReport {
            title: "t".into(),
            timestamp: "fixed".into(),
            summary: VerificationSummary::from_results(vec![result("x", true)]),
        };
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["summary"]["total"], 1);
    }
}
