//! End-to-end scenarios crossing the strategy kinds, the container kinds and
//! the trampoline.

use std::rc::Rc;

use crate::heroes::{hero_caps, int_caps, resolve, roster, string_caps, Hero};
use traversal::{
    slot, Collection, Forwarded, Invocation, KeyPath, OrderedSet, Sequence, Set, Shape,
    Trampoline, Traverse, TraverseError, Value,
};

#[test]
fn key_path_filter_over_a_set_of_strings() {
    let words = Set::from_items(["a", "bb", "ccc"]);
    let two_long = words
        .filter_with(KeyPath::matching("length", 2i64, resolve))
        .unwrap();
    assert_eq!(two_long, Set::from_items(["bb"]));
}

#[test]
fn key_path_one_over_heroes() {
    let heroes = roster();
    let selina = heroes
        .one_with(KeyPath::matching("alias", "Catwoman", resolve))
        .unwrap();
    assert_eq!(
        selina.and_then(|v| v.downcast_ref::<Hero>()),
        Some(&Hero::new("Selina Kyle", "Catwoman"))
    );

    let nobody = heroes
        .one_with(KeyPath::matching("alias", "Joker", resolve))
        .unwrap();
    assert_eq!(nobody, None);
}

#[test]
fn key_path_projection_maps_attributes_out() {
    let heroes = roster();
    let aliases = heroes
        .map_with(KeyPath::projecting("alias", resolve))
        .unwrap();
    assert_eq!(
        aliases,
        Sequence::from_items(["Batman", "Catwoman", "Robin"])
    );
}

#[test]
fn reified_uppercase_over_an_ordered_set() {
    let caps = string_caps();
    let letters = OrderedSet::from_items(["x", "y", "z"]);
    let invocation = Invocation::new(&caps, "uppercase", vec![], Shape::Value).unwrap();
    let upper = letters.map_with(invocation).unwrap();
    assert_eq!(upper, OrderedSet::from_items(["X", "Y", "Z"]));
}

#[test]
fn reified_test_with_bound_argument() {
    let caps = hero_caps();
    let heroes = roster();
    let invocation =
        Invocation::new(&caps, "is_named", vec![Value::from("Bruce")], Shape::Bool).unwrap();
    let bruces = heroes.filter_with(invocation).unwrap();
    assert_eq!(bruces.len(), 1);
    assert_eq!(
        bruces.get(0).and_then(|v| v.downcast_ref::<Hero>()),
        Some(&Hero::new("Bruce Wayne", "Batman"))
    );
}

#[test]
fn trampoline_filter_returns_collection_and_fills_the_slot() {
    let numbers = Sequence::from_items([1i64, 2, 3]);
    let caps = int_caps();
    let out = slot();
    let forwarded = Trampoline::filter(&numbers, &caps, Rc::clone(&out))
        .send("greater_than", vec![Value::new(1i64)], Shape::Bool)
        .unwrap();

    let expected = Forwarded::Collection(Sequence::from_items([2i64, 3]));
    assert_eq!(forwarded, expected);
    assert_eq!(out.borrow().clone(), Some(expected));
}

#[test]
fn trampoline_map_replays_a_value_operation() {
    let numbers = Sequence::from_items([1i64, 2, 3]);
    let caps = int_caps();
    let forwarded = Trampoline::map(&numbers, &caps)
        .send("negated", vec![], Shape::Value)
        .unwrap();
    assert_eq!(
        forwarded,
        Forwarded::Collection(Sequence::from_items([-1i64, -2, -3]))
    );
}

#[test]
fn trampoline_one_writes_the_match_through_the_slot() {
    let heroes = roster();
    let caps = hero_caps();
    let out = slot();
    let forwarded = Trampoline::one(&heroes, &caps, Rc::clone(&out))
        .send("is_named", vec![Value::from("Selina")], Shape::Bool)
        .unwrap();

    let expected = Forwarded::Item(Some(Value::new(Hero::new("Selina Kyle", "Catwoman"))));
    assert_eq!(forwarded, expected);
    assert_eq!(out.borrow().clone(), Some(expected));
}

#[test]
fn trampoline_rejects_unknown_operations() {
    let numbers = Sequence::from_items([1i64]);
    let caps = int_caps();
    let err = Trampoline::map(&numbers, &caps)
        .send("halved", vec![], Shape::Value)
        .unwrap_err();
    assert!(matches!(err, TraverseError::UnsupportedOperation { .. }));
}

#[test]
fn mixed_receiver_types_fail_mid_traversal() {
    let caps = string_caps();
    let mixed = Sequence::from_items([Value::from("a"), Value::new(1i64)]);
    let invocation = Invocation::new(&caps, "uppercase", vec![], Shape::Value).unwrap();
    assert!(matches!(
        mixed.map_with(invocation),
        Err(TraverseError::UnsupportedOperation { .. })
    ));
}

#[test]
fn empty_sources_yield_empty_and_absent() {
    let empty = OrderedSet::new();
    let strategy = || KeyPath::matching("length", 1i64, resolve);
    assert!(empty.filter_with(strategy()).unwrap().is_empty());
    assert_eq!(empty.one_with(strategy()).unwrap(), None);

    let caps = string_caps();
    let forwarded = Trampoline::map(&empty, &caps)
        .send("uppercase", vec![], Shape::Value)
        .unwrap();
    assert_eq!(forwarded, Forwarded::Collection(OrderedSet::new()));
}
