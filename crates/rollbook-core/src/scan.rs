//! Whitespace tokenizer over a buffered input stream.
//!
//! The interactive protocol is token-oriented, not line-oriented: a name
//! and an address are single whitespace-delimited tokens, and an integer
//! is a token that must parse in full. The scanner works directly on the
//! `BufRead` buffer (`fill_buf`/`consume`) so tokens may span lines and
//! trailing input on a line is not discarded.
//!
//! Design invariant: a single token read is bounded. The scanner caps a
//! token at [`MAX_TOKEN_LEN`] bytes; field-level maxima are applied by
//! the caller afterwards.

use std::io::{self, BufRead};

use thiserror::Error;

/// Hard cap on a single token, in bytes.
pub const MAX_TOKEN_LEN: usize = 4096;

/// Failure while reading a token.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("token exceeds the {limit}-byte scanner limit")]
    TokenTooLong { limit: usize },
}

/// Tokenizer over any buffered reader.
#[derive(Debug)]
pub struct TokenScanner<R> {
    inner: R,
}

impl<R: BufRead> TokenScanner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Read the next whitespace-delimited token.
    ///
    /// Skips leading ASCII whitespace, then consumes bytes up to (but not
    /// including) the next whitespace byte. Returns `Ok(None)` if the
    /// input ends before any token byte is seen. Non-UTF-8 bytes are
    /// replaced rather than failing the read.
    pub fn next_token(&mut self) -> Result<Option<String>, ScanError> {
        self.skip_whitespace()?;

        let mut token = Vec::new();
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let end = buf
                .iter()
                .position(u8::is_ascii_whitespace)
                .unwrap_or(buf.len());
            if token.len() + end > MAX_TOKEN_LEN {
                return Err(ScanError::TokenTooLong {
                    limit: MAX_TOKEN_LEN,
                });
            }
            token.extend_from_slice(&buf[..end]);
            let at_delimiter = end < buf.len();
            self.inner.consume(end);
            if at_delimiter {
                break;
            }
        }

        if token.is_empty() {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }

    fn skip_whitespace(&mut self) -> io::Result<()> {
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                return Ok(());
            }
            match buf.iter().position(|b| !b.is_ascii_whitespace()) {
                Some(0) => return Ok(()),
                Some(pos) => {
                    self.inner.consume(pos);
                    return Ok(());
                }
                None => {
                    let len = buf.len();
                    self.inner.consume(len);
                }
            }
        }
    }
}
