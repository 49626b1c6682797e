//! Shared element fixtures for the Cascade workspace.
//!
//! Containers take ownership of their children, so these fixtures expose an
//! [`ElementProbe`] handle that tests keep outside the tree to observe
//! propagation effects (timestep, solver, reset counts).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fixtures;

pub use fixtures::{
    ElementProbe, FaultyElement, InertElement, ParamOnlyElement, StorageElement, StubSolver,
};
