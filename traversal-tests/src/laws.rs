//! Property tests for the traversal laws, over arbitrary integer sources.

use proptest::prelude::*;
use traversal::{Callback, Collection, OrderedSet, Sequence, Set, Traverse, Value};

fn is_even() -> Callback {
    Callback::test(|v| v.downcast_ref::<i64>().map_or(false, |n| n % 2 == 0))
}

fn doubled() -> Callback {
    Callback::value(|v| {
        Value::new(
            v.downcast_ref::<i64>()
                .map(|n| n.wrapping_mul(2))
                .unwrap_or_default(),
        )
    })
}

fn arb_items() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..64)
}

proptest! {
    // value-shaped map: one output per input, in source order
    #[test]
    fn map_preserves_length_and_order(items in arb_items()) {
        let source = Sequence::from_items(items.clone());
        let mapped = source.map_with(doubled()).unwrap();
        prop_assert_eq!(mapped.len(), source.len());

        let expected: Sequence = items
            .iter()
            .map(|n| Value::new(n.wrapping_mul(2)))
            .collect();
        prop_assert_eq!(mapped, expected);
    }

    #[test]
    fn filter_shrinks_and_preserves_order(items in arb_items()) {
        let source = Sequence::from_items(items.clone());
        let filtered = source.filter_with(is_even()).unwrap();
        prop_assert!(filtered.len() <= source.len());

        let expected: Sequence = items
            .iter()
            .filter(|n| *n % 2 == 0)
            .map(|n| Value::new(*n))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn filter_is_idempotent(items in arb_items()) {
        let source = Sequence::from_items(items);
        // one strategy, reused by mutable borrow across both passes
        let mut even = is_even();
        let once = source.filter_with(&mut even).unwrap();
        let twice = once.filter_with(&mut even).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn one_agrees_with_filter(items in arb_items()) {
        let source = Sequence::from_items(items);
        let filtered = source.filter_with(is_even()).unwrap();
        match source.one_with(is_even()).unwrap() {
            Some(first) => prop_assert_eq!(Some(first), filtered.iter().next()),
            None => prop_assert!(filtered.is_empty()),
        }
    }

    #[test]
    fn filter_in_place_equals_filter_of_snapshot(items in arb_items()) {
        let source = Sequence::from_items(items);
        let expected = source.filter_with(is_even()).unwrap();

        let mut mutated = source.clone();
        mutated.filter_in_place_with(is_even()).unwrap();
        prop_assert_eq!(mutated, expected);
    }

    #[test]
    fn ordered_set_filter_preserves_insertion_order(items in arb_items()) {
        let source = OrderedSet::from_items(items);
        let filtered = source.filter_with(is_even()).unwrap();

        let expected: OrderedSet = source
            .iter()
            .filter(|v| v.downcast_ref::<i64>().map_or(false, |n| n % 2 == 0))
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn set_filter_keeps_exactly_the_passing_items(items in arb_items()) {
        let source = Set::from_items(items);
        let filtered = source.filter_with(is_even()).unwrap();

        let expected: Set = source
            .iter()
            .filter(|v| v.downcast_ref::<i64>().map_or(false, |n| n % 2 == 0))
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);

        let mut mutated = source.clone();
        mutated.filter_in_place_with(is_even()).unwrap();
        prop_assert_eq!(mutated, source.filter_with(is_even()).unwrap());
    }
}
