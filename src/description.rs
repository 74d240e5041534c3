use std::borrow::Cow;

use memchr::{memchr, memrchr};

use crate::attributes::{AttributeKind, Attributes};
use crate::error::{Error, Result};

impl Attributes {
    /// Parse a single FASTA description line into typed attributes.
    ///
    /// The line must begin with the `>` record marker; everything past
    /// the marker is best-effort. Identifier pairs are recorded as `ID`
    /// values, the last bracketed segment as `Organism`, and the
    /// remaining trimmed text as `Name`. Kinds with nothing to record
    /// are left absent rather than holding empty strings.
    pub fn from_description_line(line: &str) -> Result<Self> {
        let Some(rest) = line.strip_prefix('>') else {
            return Err(Error::MissingRecordMarker(line.to_string()));
        };

        let (rest, organism) = split_organism(rest);
        let (ids, name) = split_identifiers(&rest);

        let mut attrs = Attributes::new();
        for id in ids {
            attrs.push(AttributeKind::Id, id);
        }
        if let Some(organism) = organism {
            attrs.push(AttributeKind::Organism, organism.to_string());
        }
        let name = name.trim();
        if !name.is_empty() {
            attrs.push(AttributeKind::Name, name.to_string());
        }
        Ok(attrs)
    }
}

/// Capture the text inside the last `[...]` segment and drop the
/// segment from the line.
///
/// The capture is the text strictly between the last `[` and the first
/// `]` after it, untrimmed. An unpaired `[` leaves the line untouched.
fn split_organism(rest: &str) -> (Cow<'_, str>, Option<&str>) {
    let bytes = rest.as_bytes();
    let Some(open) = memrchr(b'[', bytes) else {
        return (Cow::Borrowed(rest), None);
    };
    let Some(close) = memchr(b']', &bytes[open..]) else {
        return (Cow::Borrowed(rest), None);
    };
    let close = open + close;

    let organism = &rest[open + 1..close];
    let before = &rest[..open];
    let after = &rest[close + 1..];

    // Splice the segment out; borrow when it sat at the end of the line
    let remainder = if after.is_empty() {
        Cow::Borrowed(before)
    } else {
        Cow::Owned(format!("{before}{after}"))
    };
    (remainder, (!organism.is_empty()).then_some(organism))
}

/// Consume the leading run of `key|value|` pairs, leaving the name text.
///
/// Two-phase scan with a one-way transition: pairs are consumed while
/// both tokens are non-empty, whitespace-free, and closed by a trailing
/// `|`; the first position where that fails starts the name. Each pair
/// is emitted as `key|value`.
fn split_identifiers(rest: &str) -> (Vec<String>, &str) {
    let bytes = rest.as_bytes();
    let mut ids = Vec::new();
    let mut cursor = 0;

    loop {
        let Some(key_end) = memchr(b'|', &bytes[cursor..]) else {
            break;
        };
        let key_end = cursor + key_end;
        let Some(value_end) = memchr(b'|', &bytes[key_end + 1..]) else {
            break;
        };
        let value_end = key_end + 1 + value_end;

        let key = &rest[cursor..key_end];
        let value = &rest[key_end + 1..value_end];
        if !is_identifier_token(key) || !is_identifier_token(value) {
            break;
        }

        ids.push(format!("{key}|{value}"));
        cursor = value_end + 1;
    }
    (ids, &rest[cursor..])
}

fn is_identifier_token(token: &str) -> bool {
    !token.is_empty() && !token.bytes().any(|b| b.is_ascii_whitespace())
}
