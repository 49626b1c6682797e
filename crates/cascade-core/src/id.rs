//! Validated identifier tokens and the qualified-name separator.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::IdentifierError;

/// Separator between the tokens of a qualified parameter or state name.
///
/// A qualified name is built by joining ancestor identifier tokens, a
/// direct-child token, and a local name with this character. The local name
/// may itself contain the separator; identifiers may not.
pub const TOKEN_SEPARATOR: char = '_';

/// A short token naming a component within its parent's namespace.
///
/// Identifiers anchor qualified-name resolution: a container locates its own
/// identifier among a name's tokens to find the token of the child that owns
/// the name. An identifier containing [`TOKEN_SEPARATOR`] would split into
/// multiple tokens and could never match an anchor, so construction rejects
/// it up front.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier(String);

impl Identifier {
    /// Create a validated identifier.
    ///
    /// The token must be non-empty and must not contain
    /// [`TOKEN_SEPARATOR`].
    pub fn new(token: impl Into<String>) -> Result<Self, IdentifierError> {
        let token = token.into();
        if token.is_empty() {
            return Err(IdentifierError::Empty);
        }
        if token.contains(TOKEN_SEPARATOR) {
            return Err(IdentifierError::ContainsSeparator { token });
        }
        Ok(Self(token))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Allows index maps keyed by [`Identifier`] to be queried with `&str`
/// tokens produced by name splitting.
impl Borrow<str> for Identifier {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
