//! Collection error taxonomy.
//!
//! Every failure during a session names the exact prompt it occurred at,
//! so a diagnostic like `expected an integer at the class-of-student-2
//! prompt` needs no session transcript to interpret.

use std::fmt;
use std::io;

use thiserror::Error;

/// Identifies one prompt in the interactive protocol.
///
/// Record-field prompts carry the 1-based student index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    StudentCount,
    Name(usize),
    Class(usize),
    Address(usize),
}

impl Prompt {
    /// The literal prompt text, including the trailing space.
    pub fn text(self) -> &'static str {
        match self {
            Prompt::StudentCount => "Enter number of students: ",
            Prompt::Name(_) => "Enter name: ",
            Prompt::Class(_) => "Enter class: ",
            Prompt::Address(_) => "Enter address: ",
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prompt::StudentCount => write!(f, "student count"),
            Prompt::Name(i) => write!(f, "name of student {i}"),
            Prompt::Class(i) => write!(f, "class of student {i}"),
            Prompt::Address(i) => write!(f, "address of student {i}"),
        }
    }
}

/// Failure during record collection. The first failure aborts the run;
/// no partial report is produced.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error("input ended at the {prompt} prompt")]
    UnexpectedEof { prompt: Prompt },
    #[error("expected an integer for the {prompt}, got {token:?}")]
    InvalidInteger { prompt: Prompt, token: String },
    #[error("student count must be non-negative, got {value}")]
    NegativeCount { value: i64 },
    #[error("{prompt} is {len} characters, maximum is {max}")]
    FieldTooLong {
        prompt: Prompt,
        len: usize,
        max: usize,
    },
    #[error("token for the {prompt} exceeds the {limit}-byte scanner limit")]
    TokenTooLong { prompt: Prompt, limit: usize },
    #[error("io: {0}")]
    Io(#[from] io::Error),
}
