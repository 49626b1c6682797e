//! Error types for container construction.

use std::error::Error;
use std::fmt;

/// Errors from building a container (construction-time, not per-operation).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// Two children were registered under the same identifier token.
    DuplicateChildId {
        /// The contested identifier.
        id: String,
    },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateChildId { id } => {
                write!(f, "duplicate child identifier '{id}'")
            }
        }
    }
}

impl Error for BuildError {}
