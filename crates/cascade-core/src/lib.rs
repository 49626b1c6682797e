//! Core types and traits for the Cascade model composition framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental abstractions shared across the Cascade workspace: validated
//! identifier tokens, the capability enum and bitset, the value maps
//! exchanged by accessors, error types, and the [`Component`] contract
//! implemented by leaf elements and nested containers alike.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capability;
pub mod component;
pub mod error;
pub mod id;

pub use capability::{Capability, CapabilitySet, CapabilitySetIter};
pub use component::{Component, Solver, ValueMap};
pub use error::{AccessError, IdentifierError};
pub use id::{Identifier, TOKEN_SEPARATOR};
