//! Pure name-rewriting logic for renex.
//!
//! Matching a filename against a pattern with named groups and substituting
//! those groups into a name template. Nothing in this crate touches the
//! filesystem.

pub mod error;
pub mod pattern;
pub mod template;

pub use error::PatternError;
pub use pattern::{GroupValues, NamePattern};
pub use template::{ResolvedName, TemplateResolver, describe_groups};
