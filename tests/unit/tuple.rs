//! Heterogeneous indexed container.

use super::common::{drop_log, DropRecorder, Meters, Seconds, Tagged, Unit};
use std::rc::Rc;

use tyset::{indexed_tuple, is_same_object};

#[test]
fn test_values_by_index() {
    let t = indexed_tuple![42_i32, 'K', 12.0_f64];

    let i = t.index_of::<i32, _>();
    let c = t.index_of::<char, _>();
    let f = t.index_of::<f64, _>();

    assert_eq!((i.value(), c.value(), f.value()), (0, 1, 2));
    assert_eq!(*t.get(i), 42);
    assert_eq!(*t.get(c), 'K');
    assert!(*t.get(f) == 12.0);
}

#[test]
fn test_index_of_value() {
    let t = indexed_tuple![Meters(1.5), Seconds(9), Unit::Imperial];
    let sample = Seconds(0);
    assert_eq!(t.index_of_val(&sample).value(), 1);
    assert_eq!(t.index_of_val(&Unit::Metric), t.index_of::<Unit, _>());
    assert_eq!(t.get(t.index_of_val(&Meters(0.0))).0, 1.5);
}

#[test]
fn test_by_type_matches_by_index() {
    let t = indexed_tuple![Meters(1.5), Seconds(9), Unit::Imperial];
    assert!(is_same_object(
        t.by_type::<Seconds, _>(),
        t.get(t.index_of::<Seconds, _>())
    ));
    assert_eq!(*t.by_type::<Unit, _>(), Unit::Imperial);
    assert_eq!(t.len(), 3);
}

#[test]
fn test_mixed_owned_and_aliased() {
    let limit = Seconds(30);
    let mut distance = Meters(0.0);
    let mut t = indexed_tuple![&limit, &mut distance, Unit::Metric];

    assert!(is_same_object(t.by_type::<Seconds, _>(), &limit));
    assert!(!t.slot(t.index_of::<Seconds, _>()).is_mutable());

    t.by_type_mut::<Meters, _>().0 = 4.0;
    *t.by_type_mut::<Unit, _>() = Unit::Imperial;

    let unit = t.slot(t.index_of::<Unit, _>());
    assert!(!unit.holds_reference());
    assert_eq!(*unit.get(), Unit::Imperial);

    drop(t);
    assert_eq!(distance, Meters(4.0));
}

#[test]
fn test_write_through_index() {
    let mut t = indexed_tuple![0_u32, String::new()];
    let s = t.index_of::<String, _>();
    t.get_mut(s).push_str("abc");
    *t.get_mut(t.index_of::<u32, _>()) = 3;
    assert_eq!(t.get(s), "abc");
    assert_eq!(*t.by_type::<u32, _>(), 3);
}

#[test]
fn test_owned_values_drop_in_reverse_order() {
    let log = drop_log();
    {
        let _t = indexed_tuple![
            DropRecorder::<u8>::new("first", &log),
            DropRecorder::<u16>::new("second", &log),
            DropRecorder::<u32>::new("third", &log),
        ];
        assert!(log.borrow().is_empty());
    }
    assert_eq!(*log.borrow(), vec!["third", "second", "first"]);
}

#[test]
fn test_aliased_values_outlive_container() {
    let log = drop_log();
    let outside = DropRecorder::<u8>::new("outside", &log);
    {
        let _t = indexed_tuple![&outside, DropRecorder::<u16>::new("inside", &log)];
    }
    assert_eq!(*log.borrow(), vec!["inside"]);
    drop(outside);
    assert_eq!(*log.borrow(), vec!["inside", "outside"]);
}

#[test]
fn test_generic_instances_are_distinct_elements() {
    let t = indexed_tuple![Tagged::<u8>::default(), Tagged::<i8>::default()];
    assert_eq!(t.index_of::<Tagged<i8>, _>().value(), 1);
}

#[test]
fn test_parenthesized_reference_is_owned() {
    let x = 5_i32;
    let t = indexed_tuple![(&x), 'c'];
    assert!(!t.slot(t.index_of::<&i32, _>()).holds_reference());
    assert!(is_same_object(*t.by_type::<&i32, _>(), &x));
}

#[test]
fn test_shared_pointer_and_single_tuple_elements() {
    let shared = Rc::new(Meters(2.0));
    let mut t = indexed_tuple![Rc::clone(&shared), (Seconds(5),), 'u'];

    assert_eq!(Rc::strong_count(&shared), 2);
    assert!(Rc::ptr_eq(t.by_type::<Rc<Meters>, _>(), &shared));
    assert_eq!(t.index_of::<(Seconds,), _>().value(), 1);

    t.by_type_mut::<(Seconds,), _>().0.0 += 1;
    assert_eq!(t.by_type::<(Seconds,), _>().0, Seconds(6));

    drop(t);
    assert_eq!(Rc::strong_count(&shared), 1);
}
