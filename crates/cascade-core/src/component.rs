//! The [`Component`] capability contract and the opaque [`Solver`] handle.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::capability::{Capability, CapabilitySet};
use crate::error::AccessError;
use crate::id::Identifier;

/// Ordered mapping from qualified names to numeric values.
///
/// Parameters and states travel through the tree as flat maps. Insertion
/// order is preserved and observable: aggregation merges and setter
/// application both walk maps in order, so results are deterministic.
pub type ValueMap = IndexMap<String, f64>;

/// Opaque root-finding contract distributed to components.
///
/// Cascade never invokes a solver; it only routes `Arc<dyn Solver>` handles
/// to the components that declare [`Capability::DefineSolver`]. The
/// numerical contract between a solver and the elements that integrate with
/// it is owned entirely by those two parties.
pub trait Solver: Send + Sync {
    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;
}

/// The optional-capability contract implemented by every child of a
/// container: leaf simulation elements and nested containers alike.
///
/// # Contract
///
/// - [`capabilities()`](Component::capabilities) MUST list exactly the
///   operations the implementation overrides. Containers consult the set
///   before fanning an operation out, so an undeclared override is never
///   reached and a declared-but-missing one surfaces as
///   [`AccessError::NotSupported`].
/// - Named getters receive fully-qualified names and MUST answer
///   [`AccessError::UnknownName`] for names they do not own; setters answer
///   the same for keys they do not own. Probing callers rely on these typed
///   outcomes to move on to the next sibling.
/// - A supported operation that fails for any other reason reports
///   [`AccessError::ComponentFailed`] (or another fatal variant), never a
///   misleading "unsupported" or "unknown name".
///
/// # Object safety
///
/// The trait is object-safe; containers store children as
/// `Vec<Box<dyn Component>>`.
pub trait Component: Send {
    /// The token under which a parent container registers this component.
    fn id(&self) -> &Identifier;

    /// The set of optional operations this component supports.
    fn capabilities(&self) -> CapabilitySet;

    /// Read parameters.
    ///
    /// With `names = None`, returns every parameter this component (or its
    /// subtree) owns. With a name list, returns exactly the requested
    /// entries.
    fn get_parameters(&self, _names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        Err(AccessError::NotSupported {
            capability: Capability::GetParameters,
        })
    }

    /// Qualified names of every parameter, in aggregation order.
    fn parameter_names(&self) -> Result<Vec<String>, AccessError> {
        Ok(self.get_parameters(None)?.into_keys().collect())
    }

    /// Write parameters. Only the entries to be changed need to be passed.
    fn set_parameters(&mut self, _values: &ValueMap) -> Result<(), AccessError> {
        Err(AccessError::NotSupported {
            capability: Capability::SetParameters,
        })
    }

    /// Read internal states.
    ///
    /// Same name semantics as [`get_parameters`](Component::get_parameters).
    fn get_states(&self, _names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        Err(AccessError::NotSupported {
            capability: Capability::GetStates,
        })
    }

    /// Qualified names of every state, in aggregation order.
    fn state_names(&self) -> Result<Vec<String>, AccessError> {
        Ok(self.get_states(None)?.into_keys().collect())
    }

    /// Write internal states. Only the entries to be changed need to be
    /// passed.
    fn set_states(&mut self, _values: &ValueMap) -> Result<(), AccessError> {
        Err(AccessError::NotSupported {
            capability: Capability::SetStates,
        })
    }

    /// Restore internal states to the values they were constructed with.
    fn reset_states(&mut self) -> Result<(), AccessError> {
        Err(AccessError::NotSupported {
            capability: Capability::ResetStates,
        })
    }

    /// Receive the simulation timestep.
    ///
    /// Infallible: components that do not track time keep the no-op
    /// default and leave [`Capability::SetTimestep`] undeclared.
    fn set_timestep(&mut self, _dt: f64) {}

    /// Receive the root-finding solver handle.
    ///
    /// Infallible: components that do not integrate differential equations
    /// keep the no-op default and leave [`Capability::DefineSolver`]
    /// undeclared.
    fn define_solver(&mut self, _solver: Arc<dyn Solver>) {}
}
