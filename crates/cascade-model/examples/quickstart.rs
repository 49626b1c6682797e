//! Cascade Quickstart — a complete, minimal model tree from scratch.
//!
//! Demonstrates:
//!   1. Implementing a leaf element against the Component contract
//!   2. Assembling Blocks, Sections, and a Model
//!   3. Reading and writing parameters/states by qualified name
//!   4. Propagating a timestep and resetting states between runs
//!
//! Run with:
//!   cargo run --example quickstart

use std::sync::Arc;

use cascade_core::{
    AccessError, Capability, CapabilitySet, Component, Identifier, Solver, ValueMap,
};
use cascade_model::{Block, Model, Section};

// ─── A leaf element: a linear reservoir ─────────────────────────
//
// One parameter (outflow rate) and one state (storage). The element
// receives its fully-qualified names at construction; the containers
// route requests to it without knowing its concrete type.

struct Reservoir {
    id: Identifier,
    rate_name: String,
    store_name: String,
    rate: f64,
    store: f64,
    initial_store: f64,
    dt: f64,
}

impl Reservoir {
    fn new(id: &str, prefix: &str, rate: f64, store: f64) -> Self {
        Self {
            id: Identifier::new(id).expect("valid id"),
            rate_name: format!("{prefix}_{id}_rate"),
            store_name: format!("{prefix}_{id}_store"),
            rate,
            store,
            initial_store: store,
            dt: 1.0,
        }
    }

    /// Outflow over one timestep: the linear-reservoir discharge law.
    fn outflow(&self) -> f64 {
        self.store * self.rate * self.dt
    }

    fn single(&self, name: &str) -> Result<ValueMap, AccessError> {
        if name == self.rate_name {
            Ok(ValueMap::from_iter([(name.to_string(), self.rate)]))
        } else {
            Err(AccessError::UnknownName {
                name: name.to_string(),
            })
        }
    }
}

impl Component for Reservoir {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::all()
    }

    fn get_parameters(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        match names {
            None => Ok(ValueMap::from_iter([(self.rate_name.clone(), self.rate)])),
            Some(names) => {
                let mut out = ValueMap::new();
                for &name in names {
                    out.extend(self.single(name)?);
                }
                Ok(out)
            }
        }
    }

    fn set_parameters(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        for (key, value) in values {
            if *key != self.rate_name {
                return Err(AccessError::UnknownName { name: key.clone() });
            }
            self.rate = *value;
        }
        Ok(())
    }

    fn get_states(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        match names {
            None => Ok(ValueMap::from_iter([(
                self.store_name.clone(),
                self.store,
            )])),
            Some(names) => {
                let mut out = ValueMap::new();
                for &name in names {
                    if name != self.store_name {
                        return Err(AccessError::UnknownName {
                            name: name.to_string(),
                        });
                    }
                    out.insert(name.to_string(), self.store);
                }
                Ok(out)
            }
        }
    }

    fn set_states(&mut self, values: &ValueMap) -> Result<(), AccessError> {
        for (key, value) in values {
            if *key != self.store_name {
                return Err(AccessError::UnknownName { name: key.clone() });
            }
            self.store = *value;
        }
        Ok(())
    }

    fn reset_states(&mut self) -> Result<(), AccessError> {
        self.store = self.initial_store;
        Ok(())
    }

    fn set_timestep(&mut self, dt: f64) {
        self.dt = dt;
    }

    fn define_solver(&mut self, _solver: Arc<dyn Solver>) {
        // A real element would keep the handle for its ODE integration.
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Assemble: 1 model, 2 sections, 1 block each, 2 reservoirs ──

    let r1 = Reservoir::new("r1", "up_fast", 0.8, 10.0);
    println!("r1 initial outflow: {}", r1.outflow());

    let fast = Block::new(
        Identifier::new("fast")?,
        vec![
            Box::new(r1) as Box<dyn Component>,
            Box::new(Reservoir::new("r2", "up_fast", 0.6, 5.0)),
        ],
    )?;
    let slow = Block::new(
        Identifier::new("slow")?,
        vec![Box::new(Reservoir::new("r1", "low_slow", 0.1, 50.0)) as Box<dyn Component>],
    )?;

    let upper = Section::new(Identifier::new("up")?, vec![fast])?;
    let lower = Section::new(Identifier::new("low")?, vec![slow])?;
    let mut model = Model::new(vec![upper, lower])?;

    // ── Inspect the whole tree ─────────────────────────────────────

    println!("parameters: {:?}", model.parameter_names()?);
    println!("states:     {:?}", model.state_names()?);

    // ── Route by qualified name ────────────────────────────────────

    let rate = model.get_parameters(Some(&["up_fast_r2_rate"]))?;
    println!("up_fast_r2_rate = {:?}", rate.get("up_fast_r2_rate"));

    model.set_parameters(&ValueMap::from_iter([(
        "low_slow_r1_rate".to_string(),
        0.05,
    )]))?;

    // ── Propagate and reset ────────────────────────────────────────

    model.set_timestep(0.5);
    println!("timestep = {:?}", model.timestep());

    model.set_states(&ValueMap::from_iter([(
        "up_fast_r1_store".to_string(),
        99.0,
    )]))?;
    model.reset_states()?;
    let stores = model.get_states(None)?;
    println!("stores after reset: {stores:?}");

    Ok(())
}
