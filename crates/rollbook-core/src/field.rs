//! Bounded text fields.
//!
//! The program this replaces wrote tokens into fixed-width buffers with
//! no length check, so an oversized token silently overran adjacent
//! memory. `BoundedText` keeps the fixed maximum but makes overflow an
//! explicit outcome: either the value is rejected or it is clipped,
//! according to the caller's [`OverflowPolicy`]. A field value can never
//! exceed its maximum once constructed.
//!
//! Lengths are counted in characters, and truncation happens on a
//! character boundary, so a clipped value is always valid UTF-8.

use std::fmt;

/// What to do with a token longer than the field maximum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Refuse the value; the caller sees a [`FieldOverflow`].
    #[default]
    Reject,
    /// Keep the first `max` characters and drop the rest.
    Truncate,
}

/// Reported when a value exceeds the field maximum under
/// [`OverflowPolicy::Reject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOverflow {
    /// Character length of the offending value.
    pub len: usize,
    /// Field maximum it exceeded.
    pub max: usize,
}

/// A text field with an explicit maximum length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundedText {
    value: String,
    max: usize,
}

impl BoundedText {
    /// Construct a field from a raw token.
    ///
    /// Values of at most `max` characters are stored verbatim. Longer
    /// values are rejected or clipped per `policy`.
    pub fn new(raw: String, max: usize, policy: OverflowPolicy) -> Result<Self, FieldOverflow> {
        let len = raw.chars().count();
        if len <= max {
            return Ok(Self { value: raw, max });
        }
        match policy {
            OverflowPolicy::Reject => Err(FieldOverflow { len, max }),
            OverflowPolicy::Truncate => Ok(Self {
                value: raw.chars().take(max).collect(),
                max,
            }),
        }
    }

    /// The stored value.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Character length of the stored value.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// True if the stored value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The maximum this field was constructed with.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl fmt::Display for BoundedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for BoundedText {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
