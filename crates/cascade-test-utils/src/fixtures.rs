//! Reusable leaf-element fixtures for container tests.
//!
//! Four standard elements exercising the capability contract:
//!
//! - [`StorageElement`] — full-capability element holding parameters and
//!   states, recording timestep/solver/reset activity on its probe.
//! - [`ParamOnlyElement`] — read/write parameters, nothing else.
//! - [`InertElement`] — declares no capabilities at all.
//! - [`FaultyElement`] — declares capabilities but fails every fallible
//!   call, for exercising hard-failure propagation.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use cascade_core::{
    AccessError, Capability, CapabilitySet, Component, Identifier, Solver, ValueMap,
};

/// A stub solver carrying only a name.
pub struct StubSolver {
    name: String,
}

impl StubSolver {
    /// Create a stub solver with the given diagnostic name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Solver for StubSolver {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Observations shared between a fixture element and the test that owns it.
///
/// Containers own their children outright, so a test keeps an
/// `Arc<ElementProbe>` to see what reached an element after the tree
/// swallowed it.
#[derive(Default)]
pub struct ElementProbe {
    /// The last timestep the element received.
    pub dt: Mutex<Option<f64>>,
    /// The name of the last solver the element received.
    pub solver: Mutex<Option<String>>,
    /// Number of `reset_states` calls the element served.
    pub resets: AtomicUsize,
}

impl ElementProbe {
    /// The last observed timestep.
    pub fn dt(&self) -> Option<f64> {
        *self.dt.lock().expect("probe lock poisoned")
    }

    /// The name of the last observed solver.
    pub fn solver_name(&self) -> Option<String> {
        self.solver.lock().expect("probe lock poisoned").clone()
    }

    /// How many resets the element has served.
    pub fn reset_count(&self) -> usize {
        self.resets.load(Ordering::Relaxed)
    }
}

fn lookup(values: &ValueMap, names: &[&str]) -> Result<ValueMap, AccessError> {
    let mut out = ValueMap::new();
    for &name in names {
        let value = values.get(name).ok_or_else(|| AccessError::UnknownName {
            name: name.to_string(),
        })?;
        out.insert(name.to_string(), *value);
    }
    Ok(out)
}

fn update(values: &mut ValueMap, updates: &ValueMap) -> Result<(), AccessError> {
    for (key, value) in updates {
        let slot = values
            .get_mut(key)
            .ok_or_else(|| AccessError::UnknownName { name: key.clone() })?;
        *slot = *value;
    }
    Ok(())
}

/// Full-capability leaf element backed by plain value maps.
///
/// Parameter and state names are expected to be fully qualified by the test
/// that builds the tree (the element does no prefixing of its own). States
/// reset to the values the element was constructed with.
pub struct StorageElement {
    id: Identifier,
    parameters: ValueMap,
    states: ValueMap,
    initial_states: ValueMap,
    probe: Arc<ElementProbe>,
}

impl StorageElement {
    /// Create an element with a fresh, unobserved probe.
    pub fn new(id: Identifier, parameters: ValueMap, states: ValueMap) -> Self {
        Self::with_probe(id, parameters, states, Arc::new(ElementProbe::default()))
    }

    /// Create an element sharing `probe` with the calling test.
    pub fn with_probe(
        id: Identifier,
        parameters: ValueMap,
        states: ValueMap,
        probe: Arc<ElementProbe>,
    ) -> Self {
        Self {
            id,
            parameters,
            initial_states: states.clone(),
            states,
            probe,
        }
    }
}

impl Component for StorageElement {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::all()
    }

    fn get_parameters(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        match names {
            None => Ok(self.parameters.clone()),
            Some(names) => lookup(&self.parameters, names),
        }
    }

    fn set_parameters(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        update(&mut self.parameters, values)
    }

    fn get_states(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        match names {
            None => Ok(self.states.clone()),
            Some(names) => lookup(&self.states, names),
        }
    }

    fn set_states(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        update(&mut self.states, values)
    }

    fn reset_states(&mut self) -> Result<(), AccessError> {
        self.states = self.initial_states.clone();
        self.probe.resets.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn set_timestep(&mut self, dt: f64) {
        *self.probe.dt.lock().expect("probe lock poisoned") = Some(dt);
    }

    fn define_solver(&mut self, solver: Arc<dyn Solver>) {
        *self.probe.solver.lock().expect("probe lock poisoned") = Some(solver.name().to_string());
    }
}

/// Element supporting only the parameter accessors.
///
/// Useful for checking that state fan-out and propagation skip it without
/// error.
pub struct ParamOnlyElement {
    id: Identifier,
    parameters: ValueMap,
}

impl ParamOnlyElement {
    /// Create an element owning `parameters`.
    pub fn new(id: Identifier, parameters: ValueMap) -> Self {
        Self { id, parameters }
    }
}

impl Component for ParamOnlyElement {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn capabilities(&self) -> CapabilitySet {
        [Capability::GetParameters, Capability::SetParameters]
            .into_iter()
            .collect()
    }

    fn get_parameters(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        match names {
            None => Ok(self.parameters.clone()),
            Some(names) => lookup(&self.parameters, names),
        }
    }

    fn set_parameters(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        update(&mut self.parameters, values)
    }
}

/// Element declaring no capabilities at all.
///
/// Every fallible operation keeps its `NotSupported` default; fan-out paths
/// must skip it and explicit-id paths must fail on it.
pub struct InertElement {
    id: Identifier,
}

impl InertElement {
    /// Create an inert element.
    pub fn new(id: Identifier) -> Self {
        Self { id }
    }
}

impl Component for InertElement {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::empty()
    }
}

/// Element that declares capabilities but fails every fallible call.
///
/// The failure is [`AccessError::ComponentFailed`], the outcome probing must
/// never swallow.
pub struct FaultyElement {
    id: Identifier,
    capabilities: CapabilitySet,
}

impl FaultyElement {
    /// Create a faulty element declaring every capability.
    pub fn new(id: Identifier) -> Self {
        Self::with_capabilities(id, CapabilitySet::all())
    }

    /// Create a faulty element declaring exactly `capabilities`.
    pub fn with_capabilities(id: Identifier, capabilities: CapabilitySet) -> Self {
        Self { id, capabilities }
    }

    fn failure(&self) -> AccessError {
        AccessError::ComponentFailed {
            reason: format!("{}: injected failure", self.id),
        }
    }
}

impl Component for FaultyElement {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn capabilities(&self) -> CapabilitySet {
        self.capabilities
    }

    fn get_parameters(&self, _names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        Err(self.failure())
    }

    fn set_parameters(&mut self, _values: &ValueMap) -> Result<(), AccessError> {
        Err(self.failure())
    }

    fn get_states(&self, _names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        Err(self.failure())
    }

    fn set_states(&mut self, _values: &ValueMap) -> Result<(), AccessError> {
        Err(self.failure())
    }

    fn reset_states(&mut self) -> Result<(), AccessError> {
        Err(self.failure())
    }
}
