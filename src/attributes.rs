use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use tinyvec::TinyVec;

use crate::error::{Error, Result};

/// Values of one kind; inline for the common one-or-two case
type Values = TinyVec<[String; 2]>;

/// Classifies a value extracted from a description line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    /// Free-text display name of the record
    Name,
    /// Organism captured from the trailing bracketed segment
    Organism,
    /// A `key|value` database identifier pair
    Id,
    /// A label outside the recognized set
    Other(String),
}

impl AttributeKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "Name",
            Self::Organism => "Organism",
            Self::Id => "ID",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKind {
    type Err = Infallible;

    /// Labels are matched case-sensitively; anything outside the
    /// recognized set becomes [`AttributeKind::Other`].
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "Name" => Self::Name,
            "Organism" => Self::Organism,
            "ID" => Self::Id,
            label => Self::Other(label.to_string()),
        })
    }
}

/// Typed attributes extracted from a single FASTA description line.
///
/// Built once by [`Attributes::from_description_line`] and read-only
/// afterwards. Values of a kind keep the left-to-right order in which
/// they were discovered in the source line.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Attributes {
    /// One entry per kind, in insertion order
    entries: Vec<(AttributeKind, Values)>,
}

impl Attributes {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a value to its kind, keeping discovery order within the kind
    pub(crate) fn push(&mut self, kind: AttributeKind, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, values)) => values.push(value),
            None => {
                let mut values = Values::default();
                values.push(value);
                self.entries.push((kind, values));
            }
        }
    }

    /// All values recorded for `kind`, in discovery order.
    ///
    /// Returns an empty slice when no value of the kind was extracted.
    #[inline]
    pub fn get(&self, kind: &AttributeKind) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// First value recorded for `kind`.
    ///
    /// Unlike [`Attributes::get`], this fails with
    /// [`Error::AttributeNotFound`] when the kind is absent.
    pub fn first(&self, kind: &AttributeKind) -> Result<&str> {
        self.get(kind)
            .first()
            .map(String::as_str)
            .ok_or_else(|| Error::AttributeNotFound(kind.clone()))
    }

    /// Iterate over `(kind, values)` entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&AttributeKind, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
