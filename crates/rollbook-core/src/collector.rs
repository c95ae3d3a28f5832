//! Interactive collection session.
//!
//! The spec's single operation: prompt for a count, read that many
//! records behind per-field prompts, then emit the report. Input and
//! output are injected, so the whole session runs identically against a
//! terminal or against in-memory buffers.
//!
//! Straight-line state: read-count → [read-record]×N → [print-record]×N.
//! The first failure aborts the run; the in-progress roster is discarded
//! and no report is produced.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{CollectError, Prompt};
use crate::field::{BoundedText, OverflowPolicy};
use crate::record::{ADDRESS_MAX, NAME_MAX, Roster, StudentRecord};
use crate::report::write_report;
use crate::scan::{ScanError, TokenScanner};

/// Record collector/reporter over injected streams.
#[derive(Debug)]
pub struct Collector<R, W> {
    scanner: TokenScanner<R>,
    out: W,
    policy: OverflowPolicy,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    /// Collector with the default overflow policy
    /// ([`OverflowPolicy::Reject`]).
    pub fn new(input: R, output: W) -> Self {
        Self::with_policy(input, output, OverflowPolicy::default())
    }

    pub fn with_policy(input: R, output: W, policy: OverflowPolicy) -> Self {
        Self {
            scanner: TokenScanner::new(input),
            out: output,
            policy,
        }
    }

    /// Run one full session: collect the records, print the report.
    ///
    /// Returns the populated roster; its length equals the count the
    /// user entered.
    pub fn run(&mut self) -> Result<Roster, CollectError> {
        let count = self.read_count()?;

        let mut roster = Roster::with_expected(count);
        for index in 1..=count {
            roster.push(self.read_record(index)?);
        }

        write_report(&roster, &mut self.out)?;
        self.out.flush()?;
        Ok(roster)
    }

    fn read_count(&mut self) -> Result<usize, CollectError> {
        self.prompt(Prompt::StudentCount)?;
        let value: i64 = self.read_int(Prompt::StudentCount)?;
        if value < 0 {
            return Err(CollectError::NegativeCount { value });
        }
        Ok(value as usize)
    }

    fn read_record(&mut self, index: usize) -> Result<StudentRecord, CollectError> {
        write!(self.out, "\n--- Student {index} ---\n")?;

        self.prompt(Prompt::Name(index))?;
        let name = self.read_field(Prompt::Name(index), NAME_MAX)?;

        self.prompt(Prompt::Class(index))?;
        let class_number: i32 = self.read_int(Prompt::Class(index))?;

        self.prompt(Prompt::Address(index))?;
        let address = self.read_field(Prompt::Address(index), ADDRESS_MAX)?;

        Ok(StudentRecord {
            name,
            class_number,
            address,
        })
    }

    /// Prompts carry no newline, so the sink must be flushed for them to
    /// appear before the read blocks.
    fn prompt(&mut self, prompt: Prompt) -> Result<(), CollectError> {
        write!(self.out, "{}", prompt.text())?;
        self.out.flush()?;
        Ok(())
    }

    fn read_token(&mut self, prompt: Prompt) -> Result<String, CollectError> {
        match self.scanner.next_token() {
            Ok(Some(token)) => Ok(token),
            Ok(None) => Err(CollectError::UnexpectedEof { prompt }),
            Err(ScanError::Io(err)) => Err(CollectError::Io(err)),
            Err(ScanError::TokenTooLong { limit }) => {
                Err(CollectError::TokenTooLong { prompt, limit })
            }
        }
    }

    /// Read a token that must parse in full as an integer. Trailing
    /// garbage is a parse failure, not a partial read.
    fn read_int<T: FromStr>(&mut self, prompt: Prompt) -> Result<T, CollectError> {
        let token = self.read_token(prompt)?;
        token
            .parse()
            .map_err(|_| CollectError::InvalidInteger { prompt, token })
    }

    fn read_field(&mut self, prompt: Prompt, max: usize) -> Result<BoundedText, CollectError> {
        let token = self.read_token(prompt)?;
        BoundedText::new(token, max, self.policy).map_err(|overflow| CollectError::FieldTooLong {
            prompt,
            len: overflow.len,
            max: overflow.max,
        })
    }
}
