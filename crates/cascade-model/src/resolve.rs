//! Qualified-name ownership resolution.
//!
//! [`resolve_owner`] decides which single direct child of a container owns a
//! qualified name. It is a pure function of the name and the container's own
//! identifier and child index: it never recurses into children and never
//! inspects child contents. `None` means unresolved — the caller falls back
//! to exhaustive capability probing across all children.

use cascade_core::{Identifier, TOKEN_SEPARATOR};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Determine which direct child owns `name`.
///
/// The name is split on [`TOKEN_SEPARATOR`] into tokens.
///
/// - Anchored rule (`identifier` is `Some`): the candidate child token is
///   the token immediately after the first occurrence of the identifier in
///   the token sequence. If the identifier does not occur, or occurs only as
///   the final token, the name is unresolved.
/// - Root rule (`identifier` is `None`): the first token that is a key of
///   `index` is the candidate.
///
/// The candidate is then looked up in `index`; a candidate that is not a
/// direct-child key leaves the name unresolved. At most one position is ever
/// returned — an identifier token reoccurring inside a name's local portion
/// can anchor resolution at the wrong spot, in which case the unresolved
/// outcome routes the caller to exhaustive probing instead of to a wrong
/// child.
pub fn resolve_owner(
    identifier: Option<&Identifier>,
    index: &IndexMap<Identifier, usize>,
    name: &str,
) -> Option<usize> {
    let tokens: SmallVec<[&str; 8]> = name.split(TOKEN_SEPARATOR).collect();

    let candidate: &str = match identifier {
        Some(id) => {
            let anchor = tokens.iter().position(|token| *token == id.as_str())?;
            tokens.get(anchor + 1).copied()?
        }
        None => tokens
            .iter()
            .copied()
            .find(|token| index.contains_key(*token))?,
    };

    index.get(candidate).copied()
}
