//! Hierarchical simulation model composition.
//!
//! Cascade assembles heterogeneous simulation elements into a three-level
//! composite tree and gives every level one uniform surface: read/write
//! parameters, read/write states, reset states, propagate a timestep, and
//! distribute a numeric solver. Containers route qualified names to the
//! child that owns them and fall back to capability-probing search when
//! resolution cannot decide; requests without names fan out across all
//! supporting children.
//!
//! This crate re-exports the whole public API: the [`Component`] contract,
//! [`Capability`] bitsets, identifiers, value maps, and error types from
//! `cascade-core`, and the [`Block`] / [`Section`] / [`Model`] containers
//! with the [`resolve_owner`] name resolver from `cascade-model`.
//!
//! # Example
//!
//! ```
//! use cascade::{
//!     AccessError, Block, Capability, CapabilitySet, Component, Identifier,
//!     Model, Section, ValueMap,
//! };
//!
//! /// A minimal leaf element exposing one parameter.
//! struct Gain {
//!     id: Identifier,
//!     name: String,
//!     value: f64,
//! }
//!
//! impl Component for Gain {
//!     fn id(&self) -> &Identifier {
//!         &self.id
//!     }
//!
//!     fn capabilities(&self) -> CapabilitySet {
//!         [Capability::GetParameters, Capability::SetParameters]
//!             .into_iter()
//!             .collect()
//!     }
//!
//!     fn get_parameters(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
//!         match names {
//!             None => Ok(ValueMap::from_iter([(self.name.clone(), self.value)])),
//!             Some([name]) if *name == self.name => {
//!                 Ok(ValueMap::from_iter([(self.name.clone(), self.value)]))
//!             }
//!             Some(names) => Err(AccessError::UnknownName {
//!                 name: names.first().copied().unwrap_or_default().to_string(),
//!             }),
//!         }
//!     }
//!
//!     fn set_parameters(&mut self, values: &ValueMap) -> Result<(), AccessError> {
//!         for (key, value) in values {
//!             if *key != self.name {
//!                 return Err(AccessError::UnknownName { name: key.clone() });
//!             }
//!             self.value = *value;
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let gain = Gain {
//!     id: Identifier::new("g1")?,
//!     name: "s1_b1_g1_gain".to_string(),
//!     value: 0.5,
//! };
//! let block = Block::new(Identifier::new("b1")?, vec![Box::new(gain)])?;
//! let section = Section::new(Identifier::new("s1")?, vec![block])?;
//! let mut model = Model::new(vec![section])?;
//!
//! model.set_parameters(&ValueMap::from_iter([("s1_b1_g1_gain".to_string(), 0.9)]))?;
//! let read = model.get_parameters(Some(&["s1_b1_g1_gain"]))?;
//! assert_eq!(read.get("s1_b1_g1_gain"), Some(&0.9));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use cascade_core::{
    AccessError, Capability, CapabilitySet, Component, Identifier, IdentifierError, Solver,
    ValueMap, TOKEN_SEPARATOR,
};
pub use cascade_model::{resolve_owner, Block, BuildError, Model, Section};
