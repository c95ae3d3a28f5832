//! CLI entrypoint for the rollbook transcript harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use rollbook_harness::{TranscriptReport, TranscriptSet, VerificationSummary};

/// Transcript tooling for rollbook.
#[derive(Debug, Parser)]
#[command(name = "rollbook-harness")]
#[command(about = "Transcript verification harness for rollbook")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify collector transcripts against golden fixtures.
    Verify {
        /// Fixture JSON file, or a directory of fixture JSON files.
        #[arg(long, default_value = "fixtures")]
        fixture: PathBuf,
        /// Output report path (markdown; a JSON twin is written alongside).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Re-run each case and overwrite its goldens with the actual transcript.
    Bless {
        /// Fixture JSON file to regenerate in place.
        #[arg(long)]
        fixture: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            report,
            timestamp,
        } => {
            let mut fixture_paths: Vec<PathBuf> = if fixture.is_dir() {
                std::fs::read_dir(&fixture)?
                    .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                    .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                    .collect()
            } else {
                vec![fixture.clone()]
            };
            fixture_paths.sort();

            let mut results = Vec::new();
            for path in fixture_paths {
                eprintln!("Verifying transcripts in {}", path.display());
                let set = TranscriptSet::from_file(&path)?;
                results.extend(rollbook_harness::run_set(&set));
            }
            if results.is_empty() {
                return Err(format!("No transcript cases found in {}", fixture.display()).into());
            }

            // Stabilize report ordering for reproducible golden-output diffs.
            results.sort_by(|a, b| a.case_name.cmp(&b.case_name));

            let summary = VerificationSummary::from_results(results);
            let report_doc = TranscriptReport {
                title: String::from("rollbook Transcript Report"),
                timestamp: timestamp
                    .unwrap_or_else(|| format!("{:?}", std::time::SystemTime::now())),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json()?)?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Transcript verification failed".into());
            }
        }
        Command::Bless { fixture } => {
            let mut set = TranscriptSet::from_file(&fixture)?;
            for case in &mut set.cases {
                let run = rollbook_harness::replay(&case.input);
                case.expected_output = run.output;
                case.expected_error = run.error;
            }
            let mut json = set.to_json()?;
            json.push('\n');
            std::fs::write(&fixture, json)?;
            eprintln!("Blessed {} cases in {}", set.cases.len(), fixture.display());
        }
    }

    Ok(())
}
