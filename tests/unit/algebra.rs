//! Set algebra: dedup, merge, filter, membership, first.

use super::common::{assert_same_type, IsInteger, Meters, Seconds, Unit};
use tyset::{
    are_unique, contains, contains_decayed, len, AnyOf, Decayed, Filtered, FirstOf, Merged,
    Negate, Nil, TypeList, Uniqued,
};

type Mixed = TypeList![Meters, i32, Seconds, Meters, char, i32, Unit];

// ============================================================================
// UNIQUE
// ============================================================================

#[test]
fn test_unique_first_occurrence_order() {
    assert_same_type::<Uniqued<Mixed>, TypeList![Meters, i32, Seconds, char, Unit]>();
}

#[test]
fn test_unique_is_idempotent() {
    assert_same_type::<Uniqued<Uniqued<Mixed>>, Uniqued<Mixed>>();
    assert_same_type::<Uniqued<Nil>, Nil>();
}

#[test]
fn test_unique_has_no_duplicates() {
    assert!(!are_unique::<Mixed>());
    assert!(are_unique::<Uniqued<Mixed>>());
}

#[test]
fn test_unique_preserves_membership() {
    type U = Uniqued<Mixed>;
    assert_eq!(contains::<Meters, Mixed>(), contains::<Meters, U>());
    assert_eq!(contains::<Unit, Mixed>(), contains::<Unit, U>());
    assert_eq!(contains::<u8, Mixed>(), contains::<u8, U>());
    assert!(!contains::<u8, U>());
}

#[test]
fn test_unique_keeps_references_apart() {
    assert_same_type::<Uniqued<TypeList![i32, &i32, i32, &i32]>, TypeList![i32, &i32]>();
}

// ============================================================================
// MERGE
// ============================================================================

#[test]
fn test_merge_lengths_add() {
    type A = TypeList![i32, char];
    type B = TypeList![char, Meters, f64];
    assert_eq!(len::<Merged<A, B>>(), len::<A>() + len::<B>());
    assert_eq!(len::<Merged<Nil, B>>(), 3);
    assert_eq!(len::<Merged<A, Nil>>(), 2);
}

#[test]
fn test_unique_merge_is_union() {
    type A = TypeList![i32, char];
    type B = TypeList![char, Meters, i32];
    assert_same_type::<Uniqued<Merged<A, B>>, TypeList![i32, char, Meters]>();
    assert_same_type::<Uniqued<Merged<B, A>>, TypeList![char, Meters, i32]>();
}

// ============================================================================
// FILTER
// ============================================================================

#[test]
fn test_filter_keeps_satisfying_elements_in_order() {
    type S = TypeList![f64, u8, char, i64, Meters, u16];
    assert_same_type::<Filtered<IsInteger, S>, TypeList![u8, i64, u16]>();
}

#[test]
fn test_filter_is_idempotent() {
    type S = TypeList![f64, u8, char, i64];
    assert_same_type::<Filtered<IsInteger, Filtered<IsInteger, S>>, Filtered<IsInteger, S>>();
}

#[test]
fn test_filter_empty() {
    assert_same_type::<Filtered<IsInteger, Nil>, Nil>();
    assert_same_type::<Filtered<IsInteger, TypeList![f32, char]>, Nil>();
}

#[test]
fn test_filter_through_decay() {
    type S = TypeList![&'static u8, &'static mut f64, i32, &'static &'static char];
    assert_same_type::<Filtered<Decayed<IsInteger>, S>, TypeList![&'static u8, i32]>();
    assert_same_type::<
        Filtered<Negate<Decayed<IsInteger>>, S>,
        TypeList![&'static mut f64, &'static &'static char],
    >();
}

#[test]
fn test_filter_intersection_and_difference() {
    type A = TypeList![Meters, Seconds, Unit, char];
    type B = TypeList![char, Meters];
    assert_same_type::<Filtered<AnyOf<B>, A>, TypeList![Meters, char]>();
    assert_same_type::<Filtered<Negate<AnyOf<B>>, A>, TypeList![Seconds, Unit]>();
}

// ============================================================================
// MEMBERSHIP & FIRST
// ============================================================================

#[test]
fn test_exact_versus_decayed_membership() {
    type S = TypeList![&'static Meters, i32];
    assert!(!contains::<Meters, S>());
    assert!(contains::<&'static Meters, S>());
    assert!(contains_decayed::<Meters, S>());
    assert!(contains_decayed::<&mut i32, S>());
    assert!(!contains_decayed::<Seconds, S>());
}

#[test]
fn test_first() {
    assert_same_type::<FirstOf<Mixed>, Meters>();
    assert_same_type::<FirstOf<Uniqued<TypeList![char, char, i32]>>, char>();
}

#[test]
fn test_answers_usable_in_const_items() {
    const UNIQUE: bool = are_unique::<TypeList![Meters, Seconds, Unit]>();
    const HAS_UNIT: bool = contains::<Unit, Mixed>();
    assert!(UNIQUE);
    assert!(HAS_UNIT);
}
