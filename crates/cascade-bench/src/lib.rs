//! Benchmark profiles and utilities for the Cascade workspace.
//!
//! Provides pre-built model trees for benchmarking:
//!
//! - [`reference_model`]: 4 sections x 4 blocks x 8 elements (128 leaves),
//!   one parameter and one state per element.
//! - [`wide_model`]: configurable fan-out for scaling studies.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cascade_core::{Component, Identifier, ValueMap};
use cascade_model::{Block, Model, Section};
use cascade_test_utils::StorageElement;

/// Build a model with the given fan-out at each level.
///
/// Element `e<k>` in block `b<j>` of section `s<i>` owns the parameter
/// `s<i>_b<j>_e<k>_gain` and the state `s<i>_b<j>_e<k>_store`.
pub fn wide_model(sections: usize, blocks: usize, elements: usize) -> Model {
    let sections = (0..sections)
        .map(|i| {
            let blocks = (0..blocks)
                .map(|j| {
                    let elements = (0..elements)
                        .map(|k| {
                            let prefix = format!("s{i}_b{j}_e{k}");
                            let element = StorageElement::new(
                                Identifier::new(format!("e{k}")).unwrap(),
                                ValueMap::from_iter([(format!("{prefix}_gain"), 1.0)]),
                                ValueMap::from_iter([(format!("{prefix}_store"), 0.0)]),
                            );
                            Box::new(element) as Box<dyn Component>
                        })
                        .collect();
                    Block::new(Identifier::new(format!("b{j}")).unwrap(), elements).unwrap()
                })
                .collect();
            Section::new(Identifier::new(format!("s{i}")).unwrap(), blocks).unwrap()
        })
        .collect();
    Model::new(sections).unwrap()
}

/// Build the reference benchmark tree: 4 sections x 4 blocks x 8 elements.
pub fn reference_model() -> Model {
    wide_model(4, 4, 8)
}
