//! The top-level container: a [`Model`] is the root of the tree.

use std::sync::Arc;

use cascade_core::{AccessError, Component, Solver, ValueMap};

use crate::composite::Composite;
use crate::error::BuildError;
use crate::section::Section;

/// The root container of a hierarchical simulation model.
///
/// A model wraps [`Section`]s and carries no identifier of its own: its
/// name-resolution rule scans a qualified name's tokens for any direct
/// child's token instead of anchoring on an identifier. It is never a child
/// of anything, so it exposes the shared operations as inherent methods
/// rather than through the [`Component`](cascade_core::Component) contract.
pub struct Model {
    composite: Composite,
}

impl Model {
    /// Create a model from ordered sections.
    ///
    /// Each section's identifier becomes its token in the model's child
    /// index; duplicate section ids are rejected.
    pub fn new(sections: Vec<Section>) -> Result<Self, BuildError> {
        let children = sections
            .into_iter()
            .map(|section| Box::new(section) as Box<dyn Component>)
            .collect();
        let composite = Composite::new(None, children)?;
        Ok(Self { composite })
    }

    /// Read parameters from the whole tree.
    ///
    /// With `names = None`, aggregates every section's parameters,
    /// first-seen-wins in section order. With names, routes each name to
    /// its owner (falling back to probing) and merges last-wins.
    pub fn get_parameters(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        self.composite.get_parameters(names)
    }

    /// Qualified names of every parameter in the tree, in aggregation
    /// order.
    pub fn parameter_names(&self) -> Result<Vec<String>, AccessError> {
        Ok(self.get_parameters(None)?.into_keys().collect())
    }

    /// Write parameters anywhere in the tree.
    ///
    /// Keys are applied one at a time, in map order; exactly one descendant
    /// element changes per key. Application is partial by design: keys
    /// already applied stay applied when a later key fails.
    pub fn set_parameters(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        self.composite.set_parameters(values)
    }

    /// Read states from the whole tree. Same routing and merge semantics as
    /// [`get_parameters`](Model::get_parameters).
    pub fn get_states(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        self.composite.get_states(names)
    }

    /// Qualified names of every state in the tree, in aggregation order.
    pub fn state_names(&self) -> Result<Vec<String>, AccessError> {
        Ok(self.get_states(None)?.into_keys().collect())
    }

    /// Write states anywhere in the tree. Same routing and partial
    /// application semantics as [`set_parameters`](Model::set_parameters).
    pub fn set_states(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        self.composite.set_states(values)
    }

    /// Reset states across the whole tree, skipping components that do not
    /// support resetting.
    pub fn reset_states(&mut self) -> Result<(), AccessError> {
        self.composite.reset_states()
    }

    /// Reset exactly the named direct sections.
    ///
    /// Ids are single-token section identifiers; an unknown id is an error
    /// with no fallback.
    pub fn reset_states_of(&mut self, ids: &[&str]) -> Result<(), AccessError> {
        self.composite.reset_states_of(ids)
    }

    /// Set the timestep for the whole tree.
    pub fn set_timestep(&mut self, dt: f64) {
        self.composite.set_timestep(dt);
    }

    /// The timestep last set on this model, if any.
    pub fn timestep(&self) -> Option<f64> {
        self.composite.timestep()
    }

    /// Distribute a solver handle to every descendant that integrates with
    /// one.
    pub fn define_solver(&mut self, solver: Arc<dyn Solver>) {
        self.composite.define_solver(&solver);
    }
}
