//! Error types for the Cascade model composition framework.
//!
//! Accessor and propagator failures are all [`AccessError`] values; the
//! variant determines whether a caller treats the failure as "this child
//! does not accept the request, try the next one" or as fatal. See the
//! variant docs for which is which.

use std::error::Error;
use std::fmt;

use crate::capability::Capability;

/// Errors from parameter/state access and propagation operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// The component does not support the requested operation.
    ///
    /// Recoverable during fan-out and probing: the caller skips the
    /// component. Fatal only when a caller names a component explicitly
    /// (`reset_states_of`).
    NotSupported {
        /// The missing capability.
        capability: Capability,
    },
    /// No component in the subtree owns the requested qualified name.
    ///
    /// Surfaced from named getters after resolution and exhaustive probing
    /// both fail. During probing it means "ask the next sibling".
    UnknownName {
        /// The name that could not be found.
        name: String,
    },
    /// No component in the subtree accepted a key passed to a setter.
    ///
    /// Surfaced instead of silently dropping the value. During probing it
    /// means "ask the next sibling".
    UnassignableKey {
        /// The key that could not be assigned.
        key: String,
    },
    /// An explicit direct-child identifier did not match any child.
    ///
    /// Fatal: explicit-id operations never fall back to probing.
    UnknownChildId {
        /// The identifier with no matching child.
        id: String,
    },
    /// A component that supports the operation failed while executing it.
    ///
    /// Always propagates; never treated as "unsupported".
    ComponentFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported { capability } => {
                write!(f, "component does not support {capability}")
            }
            Self::UnknownName { name } => {
                write!(f, "no component owns the name '{name}'")
            }
            Self::UnassignableKey { key } => {
                write!(f, "no component accepted the key '{key}'")
            }
            Self::UnknownChildId { id } => {
                write!(f, "no direct child with identifier '{id}'")
            }
            Self::ComponentFailed { reason } => {
                write!(f, "component failed: {reason}")
            }
        }
    }
}

impl Error for AccessError {}

/// Errors from [`Identifier`](crate::Identifier) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IdentifierError {
    /// The token is empty.
    Empty,
    /// The token contains the qualified-name separator.
    ContainsSeparator {
        /// The offending token.
        token: String,
    },
}

impl fmt::Display for IdentifierError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier must be non-empty"),
            Self::ContainsSeparator { token } => {
                write!(f, "identifier '{token}' contains the separator '_'")
            }
        }
    }
}

impl Error for IdentifierError {}
