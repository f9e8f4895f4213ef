//! Typed index registry.

use super::common::{Meters, Seconds};
use tyset::{Index, Indexed, TypeList};

type Basic = Indexed<TypeList![i32, char, f64]>;

#[test]
fn test_indices_follow_set_order() {
    assert_eq!(Basic::index_of::<i32, _>().value(), 0);
    assert_eq!(Basic::index_of::<char, _>().value(), 1);
    assert_eq!(Basic::index_of::<f64, _>().value(), 2);
    assert_eq!(Basic::LEN, 3);
}

#[test]
fn test_get_yields_indexed_type() {
    let i: i32 = Basic::get(Basic::index_of::<i32, _>());
    let c: char = Basic::get(Basic::index_of::<char, _>());
    let f: f64 = Basic::get(Basic::index_of::<f64, _>());
    assert_eq!((i, c), (0, '\0'));
    assert!(f == 0.0);
}

#[test]
fn test_index_of_val_matches_type_lookup() {
    let distance = Meters(2.0);
    let index = Indexed::<TypeList![Seconds, Meters]>::index_of_val(&distance);
    assert_eq!(index.value(), 1);
    assert_eq!(Indexed::<TypeList![Seconds, Meters]>::get(index), Meters::default());
}

#[test]
fn test_index_constant_is_static() {
    const AT: usize = {
        let index: Index<TypeList![i32, char, f64], _> = Basic::index_of::<f64, _>();
        index.value()
    };
    assert_eq!(AT, 2);
}

#[test]
fn test_registry_value_is_zero_sized() {
    assert_eq!(std::mem::size_of::<Basic>(), 0);
    assert_eq!(std::mem::size_of_val(&Basic::index_of::<char, _>()), 0);
    let _ = Basic::new();
}
