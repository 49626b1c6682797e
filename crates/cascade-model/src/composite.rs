//! The shared routing engine embedded in every container kind.
//!
//! [`Composite`] owns the ordered child collection and the direct-child
//! index, and implements the aggregation, routing, and fan-out semantics
//! that [`Block`](crate::Block), [`Section`](crate::Section), and
//! [`Model`](crate::Model) all share. The containers are thin wrappers that
//! fix what a composite may hold; everything observable happens here.

use std::sync::Arc;

use cascade_core::{AccessError, Capability, Component, Identifier, Solver, ValueMap};
use indexmap::IndexMap;

use crate::error::BuildError;
use crate::resolve::resolve_owner;

/// Ordered child collection plus routing state.
///
/// Structurally immutable after construction: only the values held by
/// descendants (and the propagated timestep/solver) change over the model's
/// lifetime.
pub(crate) struct Composite {
    identifier: Option<Identifier>,
    children: Vec<Box<dyn Component>>,
    child_index: IndexMap<Identifier, usize>,
    dt: Option<f64>,
}

impl Composite {
    /// Build a composite from ordered children.
    ///
    /// Each child's `id()` becomes its token in the child index; two
    /// children sharing a token is a [`BuildError::DuplicateChildId`].
    pub(crate) fn new(
        identifier: Option<Identifier>,
        children: Vec<Box<dyn Component>>,
    ) -> Result<Self, BuildError> {
        let mut child_index = IndexMap::with_capacity(children.len());
        for (position, child) in children.iter().enumerate() {
            let token = child.id().clone();
            if child_index.insert(token, position).is_some() {
                return Err(BuildError::DuplicateChildId {
                    id: child.id().to_string(),
                });
            }
        }
        Ok(Self {
            identifier,
            children,
            child_index,
            dt: None,
        })
    }

    /// Which direct child owns `name`, if resolution can tell.
    fn resolve(&self, name: &str) -> Option<usize> {
        resolve_owner(self.identifier.as_ref(), &self.child_index, name)
    }

    // ── Aggregating accessors ──────────────────────────────────────

    pub(crate) fn get_parameters(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        self.collect(names, Capability::GetParameters, |child, names| {
            child.get_parameters(names)
        })
    }

    pub(crate) fn set_parameters(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        self.assign(values, Capability::SetParameters, |child, values| {
            child.set_parameters(values)
        })
    }

    pub(crate) fn get_states(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        self.collect(names, Capability::GetStates, |child, names| {
            child.get_states(names)
        })
    }

    pub(crate) fn set_states(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        self.assign(values, Capability::SetStates, |child, values| {
            child.set_states(values)
        })
    }

    /// Read values across children, with or without names.
    ///
    /// No names: every child supporting `capability` contributes its full
    /// map, merged FIRST-SEEN-WINS in child order — a key already merged is
    /// never overwritten by a later child.
    ///
    /// With names: each name is routed to its resolved owner, or probed
    /// across all children when unresolved; per-name results merge
    /// LAST-WINS, so later requested names override identically-keyed
    /// earlier ones. The two merge policies are deliberately different and
    /// both observable.
    fn collect<G>(
        &self,
        names: Option<&[&str]>,
        capability: Capability,
        read: G,
    ) -> Result<ValueMap, AccessError>
    where
        G: Fn(&dyn Component, Option<&[&str]>) -> Result<ValueMap, AccessError>,
    {
        let mut merged = ValueMap::new();

        match names {
            None => {
                for child in &self.children {
                    if !child.capabilities().contains(capability) {
                        continue;
                    }
                    let values = read(child.as_ref(), None)?;
                    for (key, value) in values {
                        merged.entry(key).or_insert(value);
                    }
                }
            }
            Some(names) => {
                for &name in names {
                    let single = [name];
                    let values = match self.resolve(name) {
                        // A resolved target answers for the name; any
                        // failure there is a hard failure, not a cue to
                        // probe elsewhere.
                        Some(position) => read(self.children[position].as_ref(), Some(&single))?,
                        None => self.probe(name, capability, &read)?,
                    };
                    for (key, value) in values {
                        merged.insert(key, value);
                    }
                }
            }
        }

        Ok(merged)
    }

    /// Ask every child in order for a single unresolved name.
    ///
    /// Children lacking the capability, and children answering the typed
    /// not-mine outcomes (`NotSupported`, `UnknownName`), are skipped; the
    /// first `Ok` wins. Any other error propagates. Exhaustion means no
    /// descendant owns the name.
    fn probe<G>(&self, name: &str, capability: Capability, read: &G) -> Result<ValueMap, AccessError>
    where
        G: Fn(&dyn Component, Option<&[&str]>) -> Result<ValueMap, AccessError>,
    {
        let single = [name];
        for child in &self.children {
            if !child.capabilities().contains(capability) {
                continue;
            }
            match read(child.as_ref(), Some(&single)) {
                Ok(values) => return Ok(values),
                Err(AccessError::NotSupported { .. } | AccessError::UnknownName { .. }) => continue,
                Err(other) => return Err(other),
            }
        }
        Err(AccessError::UnknownName {
            name: name.to_string(),
        })
    }

    /// Write values key by key, in map order.
    ///
    /// Each key is routed to its resolved owner, or probed across children
    /// when unresolved (first acceptor wins). Exactly one child changes per
    /// key. Application is partial by design: keys already applied stay
    /// applied when a later key fails.
    fn assign<S>(
        &mut self,
        values: &ValueMap,
        capability: Capability,
        write: S,
    ) -> Result<(), AccessError>
    where
        S: Fn(&mut dyn Component, &ValueMap) -> Result<(), AccessError>,
    {
        for (key, value) in values {
            let single = ValueMap::from_iter([(key.clone(), *value)]);
            match self.resolve(key) {
                Some(position) => write(self.children[position].as_mut(), &single)?,
                None => {
                    let mut assigned = false;
                    for child in &mut self.children {
                        if !child.capabilities().contains(capability) {
                            continue;
                        }
                        match write(child.as_mut(), &single) {
                            Ok(()) => {
                                assigned = true;
                                break;
                            }
                            Err(
                                AccessError::NotSupported { .. }
                                | AccessError::UnknownName { .. }
                                | AccessError::UnassignableKey { .. },
                            ) => continue,
                            Err(other) => return Err(other),
                        }
                    }
                    if !assigned {
                        return Err(AccessError::UnassignableKey { key: key.clone() });
                    }
                }
            }
        }
        Ok(())
    }

    // ── Propagators ────────────────────────────────────────────────

    /// Reset every direct child that supports resetting; skip the rest.
    ///
    /// Container children recurse internally through their own
    /// `reset_states`.
    pub(crate) fn reset_states(&mut self) -> Result<(), AccessError> {
        for child in &mut self.children {
            if child.capabilities().contains(Capability::ResetStates) {
                child.reset_states()?;
            }
        }
        Ok(())
    }

    /// Reset exactly the named direct children.
    ///
    /// Each id is a single-token direct-child identifier looked up in the
    /// child index — no qualified-name resolution and no fallback probing.
    /// An unknown id is [`AccessError::UnknownChildId`]; a named child that
    /// does not support resetting propagates its
    /// [`AccessError::NotSupported`]. Both are fatal: the caller named the
    /// child explicitly.
    pub(crate) fn reset_states_of(&mut self, ids: &[&str]) -> Result<(), AccessError> {
        for &id in ids {
            let position = self
                .child_index
                .get(id)
                .copied()
                .ok_or_else(|| AccessError::UnknownChildId { id: id.to_string() })?;
            self.children[position].reset_states()?;
        }
        Ok(())
    }

    /// Record `dt` and forward it to every child supporting timesteps.
    pub(crate) fn set_timestep(&mut self, dt: f64) {
        self.dt = Some(dt);
        for child in &mut self.children {
            if child.capabilities().contains(Capability::SetTimestep) {
                child.set_timestep(dt);
            }
        }
    }

    /// The timestep last propagated through this container, if any.
    pub(crate) fn timestep(&self) -> Option<f64> {
        self.dt
    }

    /// Hand a solver handle to every child supporting one; skip the rest.
    ///
    /// The container keeps nothing: the solver belongs to the elements that
    /// integrate with it.
    pub(crate) fn define_solver(&mut self, solver: &Arc<dyn Solver>) {
        for child in &mut self.children {
            if child.capabilities().contains(Capability::DefineSolver) {
                child.define_solver(Arc::clone(solver));
            }
        }
    }
}
