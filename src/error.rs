use thiserror::Error;

use crate::attributes::AttributeKind;

// Convenience Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The description line does not begin with the `>` record marker
    #[error("Invalid description line ({0:?}), expected leading '>'")]
    MissingRecordMarker(String),

    /// No value of the requested kind was extracted from the line
    #[error("No attribute of kind '{0}' recorded")]
    AttributeNotFound(AttributeKind),
}
