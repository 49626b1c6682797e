//! The mid-level container: a [`Section`] wraps [`Block`]s.

use std::sync::Arc;

use cascade_core::{
    AccessError, CapabilitySet, Component, Identifier, Solver, ValueMap,
};

use crate::block::Block;
use crate::composite::Composite;
use crate::error::BuildError;

/// An ordered collection of blocks behind one identifier.
///
/// Sections nest inside a [`Model`](crate::Model). The constructor takes
/// concrete [`Block`]s — the level structure of the tree is fixed by the
/// constructor signatures and erased afterwards; at runtime a section sees
/// its children only through the [`Component`] contract, exactly as a block
/// sees its elements.
pub struct Section {
    id: Identifier,
    composite: Composite,
}

impl Section {
    /// Create a section from its identifier and ordered blocks.
    ///
    /// Each block's identifier becomes its token in the section's child
    /// index; duplicate block ids are rejected.
    pub fn new(id: Identifier, blocks: Vec<Block>) -> Result<Self, BuildError> {
        let children = blocks
            .into_iter()
            .map(|block| Box::new(block) as Box<dyn Component>)
            .collect();
        let composite = Composite::new(Some(id.clone()), children)?;
        Ok(Self { id, composite })
    }

    /// Reset the states of exactly the named direct blocks.
    ///
    /// Ids are single-token block identifiers; an unknown id is an error
    /// with no fallback.
    pub fn reset_states_of(&mut self, ids: &[&str]) -> Result<(), AccessError> {
        self.composite.reset_states_of(ids)
    }

    /// The timestep last propagated to this section, if any.
    pub fn timestep(&self) -> Option<f64> {
        self.composite.timestep()
    }
}

impl Component for Section {
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
