//! The bottom-level container: a [`Block`] wraps leaf simulation elements.

use std::sync::Arc;

use cascade_core::{
    AccessError, CapabilitySet, Component, Identifier, Solver, ValueMap,
};

use crate::composite::Composite;
use crate::error::BuildError;

/// An ordered collection of leaf elements behind one identifier.
///
/// A block is the innermost container kind: its children are the simulation
/// elements themselves, supplied by the caller as
/// [`Component`] trait objects. Blocks nest inside [`Section`](crate::Section)s
/// and route qualified names of the form `..._<block-id>_<element-id>_<local>`
/// to the owning element.
pub struct Block {
    id: Identifier,
    composite: Composite,
}

impl Block {
    /// Create a block from its identifier and ordered leaf elements.
    ///
    /// Child order is preserved and is the probing/tie-break order for all
    /// operations. Each element's `id()` becomes its token in the block's
    /// child index; duplicate element ids are rejected.
    pub fn new(id: Identifier, elements: Vec<Box<dyn Component>>) -> Result<Self, BuildError> {
        let composite = Composite::new(Some(id.clone()), elements)?;
        Ok(Self { id, composite })
    }

    /// Reset the states of exactly the named direct elements.
    ///
    /// Ids are single-token element identifiers. An unknown id, or a named
    /// element that does not support resetting, is an error — the caller
    /// named it explicitly, so there is no fallback.
    pub fn reset_states_of(&mut self, ids: &[&str]) -> Result<(), AccessError> {
        self.composite.reset_states_of(ids)
    }

    /// The timestep last propagated to this block, if any.
    pub fn timestep(&self) -> Option<f64> {
        self.composite.timestep()
    }
}

impl Component for Block {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::all()
    }

    fn get_parameters(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        self.composite.get_parameters(names)
    }

    fn set_parameters(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        self.composite.set_parameters(values)
    }

    fn get_states(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        self.composite.get_states(names)
    }

    fn set_states(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        self.composite.set_states(values)
    }

    fn reset_states(&mut self) -> Result<(), AccessError> {
        self.composite.reset_states()
    }

    fn set_timestep(&mut self, dt: f64) {
        self.composite.set_timestep(dt);
    }

    fn define_solver(&mut self, solver: Arc<dyn Solver>) {
        self.composite.define_solver(&solver);
    }
}
