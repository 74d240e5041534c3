#![doc = include_str!("../README.md")]

pub mod attributes;
mod description;
pub mod error;

pub use attributes::{AttributeKind, Attributes};
pub use error::{Error, Result};
