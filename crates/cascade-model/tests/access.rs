//! Aggregation and routing semantics of the parameter/state accessors.

use cascade_core::{
    AccessError, Capability, CapabilitySet, Component, Identifier, ValueMap,
};
use cascade_model::Block;
use cascade_test_utils::{FaultyElement, InertElement, ParamOnlyElement, StorageElement};

fn ident(token: &str) -> Identifier {
    Identifier::new(token).unwrap()
}

fn values(entries: &[(&str, f64)]) -> ValueMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

fn storage(id: &str, parameters: &[(&str, f64)], states: &[(&str, f64)]) -> Box<dyn Component> {
    Box::new(StorageElement::new(
        ident(id),
        values(parameters),
        values(states),
    ))
}

/// Element whose answers always carry a shared auxiliary key, exposing the
/// merge policy of each aggregation path.
struct AliasElement {
    id: Identifier,
    key: String,
    value: f64,
    tag: f64,
}

impl AliasElement {
    fn boxed(id: &str, key: &str, value: f64, tag: f64) -> Box<dyn Component> {
        Box::new(Self {
            id: ident(id),
            key: key.to_string(),
            value,
            tag,
        })
    }
}

impl Component for AliasElement {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn capabilities(&self) -> CapabilitySet {
        [Capability::GetParameters].into_iter().collect()
    }

    fn get_parameters(&self, names: Option<&[&str]>) -> Result<ValueMap, AccessError> {
        let mut out = ValueMap::new();
        if let Some(names) = names {
            for &name in names {
                if name != self.key {
                    return Err(AccessError::UnknownName {
                        name: name.to_string(),
                    });
                }
                out.insert(name.to_string(), self.value);
            }
        } else {
            out.insert(self.key.clone(), self.value);
        }
        out.insert("alias".to_string(), self.tag);
        Ok(out)
    }
}

// ── No-names aggregation ───────────────────────────────────────────

#[test]
fn no_name_aggregation_is_first_seen_wins() {
    let block = Block::new(
        ident("b1"),
        vec![
            AliasElement::boxed("a", "b1_a_k", 10.0, 1.0),
            AliasElement::boxed("b", "b1_b_k", 20.0, 2.0),
        ],
    )
    .unwrap();

    let merged = block.get_parameters(None).unwrap();
    assert_eq!(merged.get("b1_a_k"), Some(&10.0));
    assert_eq!(merged.get("b1_b_k"), Some(&20.0));
    // The first child's value for the contested key survives.
    assert_eq!(merged.get("alias"), Some(&1.0));
}

#[test]
fn no_name_aggregation_skips_unsupporting_children() {
    let block = Block::new(
        ident("b1"),
        vec![
            Box::new(InertElement::new(ident("i1"))),
            storage("e1", &[("b1_e1_k", 3.0)], &[]),
        ],
    )
    .unwrap();

    let merged = block.get_parameters(None).unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged.get("b1_e1_k"), Some(&3.0));
}

#[test]
fn state_aggregation_skips_parameter_only_children() {
    let block = Block::new(
        ident("b1"),
        vec![
            Box::new(ParamOnlyElement::new(
                ident("p1"),
                values(&[("b1_p1_k", 1.0)]),
            )),
            storage("e1", &[], &[("b1_e1_s0", 0.5)]),
        ],
    )
    .unwrap();

    let states = block.get_states(None).unwrap();
    assert_eq!(states.len(), 1);
    assert_eq!(states.get("b1_e1_s0"), Some(&0.5));
}

#[test]
fn name_listing_matches_aggregation_keys() {
    let block = Block::new(
        ident("b1"),
        vec![
            storage("e1", &[("b1_e1_k", 1.0)], &[("b1_e1_s0", 0.0)]),
            storage("e2", &[("b1_e2_k", 2.0)], &[]),
        ],
    )
    .unwrap();

    let names = block.parameter_names().unwrap();
    let aggregated = block.get_parameters(None).unwrap();
    assert_eq!(names.len(), aggregated.len());
    for name in &names {
        assert!(aggregated.contains_key(name.as_str()));
    }
    assert_eq!(block.state_names().unwrap(), vec!["b1_e1_s0"]);
}

#[test]
fn named_request_for_all_names_matches_no_name_aggregation() {
    let block = Block::new(
        ident("b1"),
        vec![
            storage("e1", &[("b1_e1_k", 1.0), ("b1_e1_x", 4.0)], &[]),
            storage("e2", &[("b1_e2_k", 2.0)], &[]),
        ],
    )
    .unwrap();

    let all = block.get_parameters(None).unwrap();
    let names = block.parameter_names().unwrap();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let renamed = block.get_parameters(Some(&name_refs)).unwrap();

    assert_eq!(all, renamed);
}

// ── Named routing ──────────────────────────────────────────────────

#[test]
fn named_merge_is_last_wins_across_requested_names() {
    let block = Block::new(
        ident("b1"),
        vec![
            AliasElement::boxed("a", "b1_a_k", 10.0, 1.0),
            AliasElement::boxed("b", "b1_b_k", 20.0, 2.0),
        ],
    )
    .unwrap();

    // The later requested name's answer overrides the contested key —
    // the opposite policy to the no-names path.
    let merged = block
        .get_parameters(Some(&["b1_a_k", "b1_b_k"]))
        .unwrap();
    assert_eq!(merged.get("alias"), Some(&2.0));

    let merged = block
        .get_parameters(Some(&["b1_b_k", "b1_a_k"]))
        .unwrap();
    assert_eq!(merged.get("alias"), Some(&1.0));
}

#[test]
fn unknown_child_token_after_anchor_is_name_not_found() {
    let block = Block::new(ident("b1"), vec![storage("e1", &[("b1_e1_k", 1.0)], &[])]).unwrap();

    match block.get_parameters(Some(&["b1_zzz_k"])) {
        Err(AccessError::UnknownName { name }) => assert_eq!(name, "b1_zzz_k"),
        other => panic!("expected UnknownName, got {other:?}"),
    }
}

#[test]
fn probing_rescues_names_resolution_cannot_anchor() {
    // The element's key carries no block or element token at all, so
    // resolution fails and the exhaustive probe must find the owner.
    let block = Block::new(ident("b1"), vec![storage("e1", &[("k9", 7.0)], &[])]).unwrap();

    let merged = block.get_parameters(Some(&["k9"])).unwrap();
    assert_eq!(merged.get("k9"), Some(&7.0));
}

#[test]
fn resolved_target_failure_is_a_hard_failure() {
    // "b1_f_k" resolves straight to the faulty element; its failure must
    // propagate rather than divert the request to the healthy sibling.
    let block = Block::new(
        ident("b1"),
        vec![
            Box::new(FaultyElement::new(ident("f"))),
            storage("e1", &[("b1_e1_k", 1.0)], &[]),
        ],
    )
    .unwrap();

    match block.get_parameters(Some(&["b1_f_k"])) {
        Err(AccessError::ComponentFailed { reason }) => {
            assert!(reason.contains("f"), "unexpected reason: {reason}");
        }
        other => panic!("expected ComponentFailed, got {other:?}"),
    }
}

#[test]
fn probing_propagates_component_failures() {
    // An unresolvable name probes children in order; a failing child is a
    // real error, not a cue to continue.
    let block = Block::new(
        ident("b1"),
        vec![
            Box::new(FaultyElement::new(ident("f"))),
            storage("e1", &[("k9", 7.0)], &[]),
        ],
    )
    .unwrap();

    assert!(matches!(
        block.get_parameters(Some(&["k9"])),
        Err(AccessError::ComponentFailed { .. })
    ));
}

// ── Setters ────────────────────────────────────────────────────────

#[test]
fn set_then_get_round_trips() {
    let mut block = Block::new(ident("b1"), vec![storage("e1", &[("b1_e1_k", 1.0)], &[])]).unwrap();

    block
        .set_parameters(&values(&[("b1_e1_k", 5.0)]))
        .unwrap();
    let merged = block.get_parameters(Some(&["b1_e1_k"])).unwrap();
    assert_eq!(merged.get("b1_e1_k"), Some(&5.0));
}

#[test]
fn set_probes_past_children_without_the_capability() {
    // States cannot go to the parameter-only element; the probe must land
    // the key on the storage element behind it.
    let mut block = Block::new(
        ident("b1"),
        vec![
            Box::new(ParamOnlyElement::new(
                ident("p1"),
                values(&[("b1_p1_k", 1.0)]),
            )),
            storage("e1", &[], &[("s0", 0.0)]),
        ],
    )
    .unwrap();

    block.set_states(&values(&[("s0", 9.0)])).unwrap();
    assert_eq!(block.get_states(Some(&["s0"])).unwrap().get("s0"), Some(&9.0));
}

#[test]
fn unassignable_key_is_surfaced() {
    let mut block =
        Block::new(ident("b1"), vec![storage("e1", &[("b1_e1_k", 1.0)], &[])]).unwrap();

    match block.set_parameters(&values(&[("nope", 1.0)])) {
        Err(AccessError::UnassignableKey { key }) => assert_eq!(key, "nope"),
        other => panic!("expected UnassignableKey, got {other:?}"),
    }
}

#[test]
fn set_application_is_partial_on_failure() {
    let mut block =
        Block::new(ident("b1"), vec![storage("e1", &[("b1_e1_k", 1.0)], &[])]).unwrap();

    // First key lands, second key fails; the first stays applied.
    let updates = values(&[("b1_e1_k", 8.0), ("nope", 1.0)]);
    assert!(matches!(
        block.set_parameters(&updates),
        Err(AccessError::UnassignableKey { .. })
    ));
    assert_eq!(
        block.get_parameters(Some(&["b1_e1_k"])).unwrap().get("b1_e1_k"),
        Some(&8.0)
    );
}
