//! The [`Capability`] enum and the [`CapabilitySet`] bitset.
//!
//! Components declare up front which of the optional operations they
//! support. Containers consult the declared set before fanning an operation
//! out, so "unsupported" is an explicit, typed condition rather than a
//! failure signal to be guessed at.

use std::fmt;

/// One of the optional operations a [`Component`](crate::Component) may
/// support.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Capability {
    /// Read parameters (`get_parameters`, `parameter_names`).
    GetParameters,
    /// Write parameters (`set_parameters`).
    SetParameters,
    /// Read internal states (`get_states`, `state_names`).
    GetStates,
    /// Write internal states (`set_states`).
    SetStates,
    /// Restore internal states to their initial values (`reset_states`).
    ResetStates,
    /// Receive the simulation timestep (`set_timestep`).
    SetTimestep,
    /// Receive the root-finding solver handle (`define_solver`).
    DefineSolver,
}

impl Capability {
    /// Every capability, in declaration order.
    pub const ALL: [Capability; 7] = [
        Capability::GetParameters,
        Capability::SetParameters,
        Capability::GetStates,
        Capability::SetStates,
        Capability::ResetStates,
        Capability::SetTimestep,
        Capability::DefineSolver,
    ];

    fn bit(self) -> u8 {
        match self {
            Capability::GetParameters => 1 << 0,
            Capability::SetParameters => 1 << 1,
            Capability::GetStates => 1 << 2,
            Capability::SetStates => 1 << 3,
            Capability::ResetStates => 1 << 4,
            Capability::SetTimestep => 1 << 5,
            Capability::DefineSolver => 1 << 6,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Capability::GetParameters => "get_parameters",
            Capability::SetParameters => "set_parameters",
            Capability::GetStates => "get_states",
            Capability::SetStates => "set_states",
            Capability::ResetStates => "reset_states",
            Capability::SetTimestep => "set_timestep",
            Capability::DefineSolver => "define_solver",
        };
        write!(f, "{name}")
    }
}

/// A set of capabilities implemented as a single-word bitset.
///
/// Used by components to declare which optional operations they support,
/// enabling containers to skip unsupported children during fan-out without
/// provoking failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CapabilitySet {
    bits: u8,
}

impl CapabilitySet {
    /// Create an empty capability set.
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Create a set containing every capability.
    pub fn all() -> Self {
        Capability::ALL.into_iter().collect()
    }

    /// Insert a capability into the set.
    pub fn insert(&mut self, capability: Capability) {
        self.bits |= capability.bit();
    }

    /// Check whether the set contains a capability.
    pub fn contains(&self, capability: Capability) -> bool {
        self.bits & capability.bit() != 0
    }

    /// Return the union of two sets (`self | other`).
    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Return the intersection of two sets (`self & other`).
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Return the set difference (`self - other`).
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Check whether `self` is a subset of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns `true` if the set contains no capabilities.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of capabilities in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the capabilities in the set, in declaration order.
    pub fn iter(&self) -> CapabilitySetIter {
        CapabilitySetIter {
            set: *self,
            next: 0,
        }
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        let mut set = Self::empty();
        for capability in iter {
            set.insert(capability);
        }
        set
    }
}

impl IntoIterator for &CapabilitySet {
    type Item = Capability;
    type IntoIter = CapabilitySetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the capabilities in a [`CapabilitySet`], in declaration
/// order.
pub struct CapabilitySetIter {
    set: CapabilitySet,
    next: usize,
}

impl Iterator for CapabilitySetIter {
    type Item = Capability;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < Capability::ALL.len() {
            let capability = Capability::ALL[self.next];
            self.next += 1;
            if self.set.contains(capability) {
                return Some(capability);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_capability_set() -> impl Strategy<Value = CapabilitySet> {
        prop::collection::vec(0usize..Capability::ALL.len(), 0..8).prop_map(|picks| {
            picks
                .into_iter()
                .map(|i| Capability::ALL[i])
                .collect::<CapabilitySet>()
        })
    }

    #[test]
    fn empty_contains_nothing() {
        let set = CapabilitySet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        for capability in Capability::ALL {
            assert!(!set.contains(capability));
        }
    }

    #[test]
    fn all_contains_everything() {
        let set = CapabilitySet::all();
        assert_eq!(set.len(), Capability::ALL.len());
        for capability in Capability::ALL {
            assert!(set.contains(capability));
        }
    }

    #[test]
    fn iter_preserves_declaration_order() {
        let set: CapabilitySet = [Capability::DefineSolver, Capability::GetParameters]
            .into_iter()
            .collect();
        let listed: Vec<Capability> = set.iter().collect();
        assert_eq!(
            listed,
            vec![Capability::GetParameters, Capability::DefineSolver]
        );
    }

    #[test]
    fn display_uses_operation_names() {
        assert_eq!(Capability::GetParameters.to_string(), "get_parameters");
        assert_eq!(Capability::DefineSolver.to_string(), "define_solver");
    }

    proptest! {
        #[test]
        fn union_commutative(a in arb_capability_set(), b in arb_capability_set()) {
            prop_assert_eq!(a.union(&b), b.union(&a));
        }

        #[test]
        fn intersection_commutative(a in arb_capability_set(), b in arb_capability_set()) {
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }

        #[test]
        fn union_associative(
            a in arb_capability_set(),
            b in arb_capability_set(),
            c in arb_capability_set(),
        ) {
            prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        }

        #[test]
        fn union_identity(a in arb_capability_set()) {
            prop_assert_eq!(a.union(&CapabilitySet::empty()), a);
        }

        #[test]
        fn difference_removes_common(a in arb_capability_set(), b in arb_capability_set()) {
            let diff = a.difference(&b);
            for capability in diff.iter() {
                prop_assert!(a.contains(capability));
                prop_assert!(!b.contains(capability));
            }
        }

        #[test]
        fn subset_reflexive(a in arb_capability_set()) {
            prop_assert!(a.is_subset(&a));
        }

        #[test]
        fn empty_is_subset(a in arb_capability_set()) {
            prop_assert!(CapabilitySet::empty().is_subset(&a));
        }

        #[test]
        fn len_matches_iter_count(a in arb_capability_set()) {
            prop_assert_eq!(a.len(), a.iter().count());
        }

        #[test]
        fn insert_contains(i in 0usize..Capability::ALL.len()) {
            let mut set = CapabilitySet::empty();
            set.insert(Capability::ALL[i]);
            prop_assert!(set.contains(Capability::ALL[i]));
            prop_assert_eq!(set.len(), 1);
        }
    }
}
