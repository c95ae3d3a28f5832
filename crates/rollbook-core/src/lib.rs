//! # rollbook-core
//!
//! Safe, bounded reimplementation of a fixed-record student roster
//! collector. The original behavior — prompt for a count, read that many
//! {name, class, address} records from tokenized input, print them back
//! in a labeled report — is preserved, while the unsafe parts are
//! replaced with checked equivalents:
//!
//! - unchecked fixed-width text buffers become [`BoundedText`] fields
//!   with an explicit maximum and overflow policy;
//! - the stack-allocated variable-length record array becomes a
//!   heap-backed [`Roster`];
//! - ambient console I/O becomes injected streams (`R: BufRead`,
//!   `W: Write`), so a whole session runs against in-memory buffers.
//!
//! No `unsafe` code is permitted in this crate.

#![forbid(unsafe_code)]

pub mod collector;
pub mod error;
pub mod field;
pub mod record;
pub mod report;
pub mod scan;

pub use collector::Collector;
pub use error::{CollectError, Prompt};
pub use field::{BoundedText, FieldOverflow, OverflowPolicy};
pub use record::{ADDRESS_MAX, NAME_MAX, Roster, StudentRecord};
pub use report::write_report;
pub use scan::{MAX_TOKEN_LEN, ScanError, TokenScanner};
