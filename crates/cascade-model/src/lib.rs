//! Composite containers for hierarchical simulation models.
//!
//! A model is a three-level tree: a [`Model`] (the root) wraps
//! [`Section`]s, each section wraps [`Block`]s, and each block wraps leaf
//! simulation elements supplied by the caller as
//! [`Component`](cascade_core::Component) trait objects. All three
//! container kinds expose the same operations — read/write parameters,
//! read/write states, reset states, propagate a timestep, distribute a
//! solver — without knowing the concrete types of what they hold.
//!
//! # Routing
//!
//! Requests carrying qualified names are routed by [`resolve_owner`]: the
//! container locates its own identifier among the name's tokens and hands
//! the request to the child named by the following token. When resolution
//! fails, the container probes every child in order and accepts the first
//! one that recognizes the name; only if no child accepts does the request
//! fail. Requests with no names fan out to every child that supports the
//! operation, skipping the rest.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod error;
pub mod model;
pub mod resolve;
pub mod section;

mod composite;

pub use block::Block;
pub use error::BuildError;
pub use model::Model;
pub use resolve::resolve_owner;
pub use section::Section;
