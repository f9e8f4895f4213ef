//! Owned and aliased slots.

use super::common::Meters;
use tyset::{is_same_object, Exclusive, Owned, Shared, Slot, SlotKind, SlotMut, ValueOrReference};

#[test]
fn test_alias_observes_referent_storage() {
    let x = Meters(1.0);
    let slot = ValueOrReference::reference(&x);
    assert!(is_same_object(slot.get(), &x));
    assert!(is_same_object(&*slot, &x));
}

#[test]
fn test_owned_value_is_moved_not_copied() {
    let text = String::from("moved");
    let before = text.as_ptr();
    let slot = ValueOrReference::value(text);
    assert_eq!(slot.get().as_ptr(), before);
    assert_eq!(slot.into_inner().as_ptr(), before);
}

#[test]
fn test_mutability_rules() {
    let shared = 1_u8;
    let mut exclusive = 2_u8;

    let a = ValueOrReference::reference(&shared);
    let mut b = ValueOrReference::reference_mut(&mut exclusive);
    let mut c = ValueOrReference::from(3_u8);

    assert!(!a.is_mutable());
    *b.get_mut() += 10;
    *c.get_mut() += 10;

    assert_eq!(*a, 1);
    assert_eq!(*b, 12);
    assert_eq!(*c, 13);
    assert_eq!(c.into_inner(), 13);
    drop(b);
    assert_eq!(exclusive, 12);
}

#[test]
fn test_kind_constants() {
    assert!(!Owned::HOLDS_REFERENCE && Owned::MUTABLE);
    assert!(Shared::HOLDS_REFERENCE && !Shared::MUTABLE);
    assert!(Exclusive::HOLDS_REFERENCE && Exclusive::MUTABLE);
}

fn bump<S: SlotMut<Target = u32>>(slot: &mut S) -> u32 {
    *slot.get_mut() += 1;
    *Slot::get(slot)
}

#[test]
fn test_generic_write_over_writable_kinds() {
    let mut n = 1_u32;
    let mut owned = ValueOrReference::value(5_u32);
    assert_eq!(bump(&mut owned), 6);
    assert_eq!(bump(&mut ValueOrReference::reference_mut(&mut n)), 2);
    assert_eq!(n, 2);
}

#[test]
fn test_dropping_alias_leaves_referent() {
    let text = String::from("kept");
    {
        let slot = ValueOrReference::reference(&text);
        assert_eq!(slot.len(), 4);
    }
    assert_eq!(text, "kept");
}

#[test]
fn test_slots_compare_by_value() {
    let x = 5_i32;
    assert_eq!(ValueOrReference::reference(&x), ValueOrReference::value(5));
    assert_eq!(ValueOrReference::value(7).to_string(), "7");
}

#[test]
fn test_debug_names_the_kind() {
    let x = 3_u8;
    assert_eq!(
        format!("{:?}", ValueOrReference::reference(&x)),
        "ValueOrReference(Shared, 3)"
    );
}
