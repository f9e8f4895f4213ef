//! Type identity for built-in and derived descriptors.

use super::common::{legacy, Meters, Seconds, Tagged, Unit};
use tyset::{decayed_eq, type_eq};

#[test]
fn test_derived_types_are_distinct() {
    assert!(type_eq::<Meters, Meters>());
    assert!(!type_eq::<Meters, Seconds>());
    assert!(!type_eq::<Meters, Unit>());
    assert!(!type_eq::<Meters, f64>());
}

#[test]
fn test_explicit_key_disambiguates_same_name() {
    assert!(!type_eq::<Meters, legacy::Meters>());
}

#[test]
fn test_generic_arguments_are_part_of_identity() {
    assert!(type_eq::<Tagged<u8>, Tagged<u8>>());
    assert!(!type_eq::<Tagged<u8>, Tagged<u16>>());
    assert!(!type_eq::<Tagged<Meters>, Tagged<Seconds>>());
    assert!(!type_eq::<Tagged<Vec<u8>>, Vec<Tagged<u8>>>());
}

#[test]
fn test_decay_of_derived_types() {
    assert!(decayed_eq::<&Meters, Meters>());
    assert!(decayed_eq::<&mut &Meters, &Meters>());
    assert!(!decayed_eq::<&Meters, Seconds>());
    // Decay does not look inside generic arguments.
    assert!(!decayed_eq::<Tagged<&u8>, Tagged<u8>>());
}

mod inventory {
    use tyset::TypeDescriptor;

    #[derive(TypeDescriptor, Debug, PartialEq)]
    pub struct Id(pub u8);
}

mod accounts {
    use tyset::TypeDescriptor;

    #[derive(TypeDescriptor, Debug, PartialEq)]
    pub struct Id(pub &'static str);
}

#[test]
fn test_same_name_in_sibling_modules_is_distinct() {
    use tyset::{are_unique, contains, indexed_tuple, len, TypeList, Uniqued};

    type Ids = TypeList![inventory::Id, accounts::Id];
    assert!(!type_eq::<inventory::Id, accounts::Id>());
    assert!(are_unique::<Ids>());
    assert!(!contains::<accounts::Id, TypeList![inventory::Id]>());
    assert_eq!(len::<Uniqued<Ids>>(), 2);

    let t = indexed_tuple![inventory::Id(4), accounts::Id("root")];
    assert_eq!(*t.by_type::<accounts::Id, _>(), accounts::Id("root"));
    assert_eq!(t.index_of::<inventory::Id, _>().value(), 0);
}
