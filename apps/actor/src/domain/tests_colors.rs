use std::cmp::Ordering;

use serde_json::json;

use crate::domain::{Color, ColorVec};

#[test]
fn componentwise_order_is_partial() {
    let a = ColorVec::new(1, 0, 0, 0, 0, 0);
    let b = ColorVec::new(1, 1, 0, 0, 0, 0);
    assert!(a < b);
    assert!(a <= b);
    assert!(!(a > b));
    assert!(b > a);
    assert!(b >= a);
    assert_eq!(a.partial_cmp(&b), Some(Ordering::Less));

    // more black, less blue: neither direction holds
    let c = ColorVec::new(2, 0, 0, 0, 0, 0);
    assert_eq!(b.partial_cmp(&c), None);
    assert!(!(b < c));
    assert!(!(b > c));
    assert!(!(b <= c));
    assert!(!(b >= c));
    assert_ne!(b, c);

    assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    assert!(a <= a);
    assert!(a >= a);
}

#[test]
fn add_and_sub_are_componentwise() {
    let a = ColorVec::new(1, 2, 3, 0, 0, 1);
    let b = ColorVec::new(0, 1, 1, 0, 0, 1);
    assert_eq!(a + b, ColorVec::new(1, 3, 4, 0, 0, 2));
    assert_eq!(a - b, ColorVec::new(1, 1, 2, 0, 0, 0));

    let mut c = a;
    c += b;
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn saturating_sub_floors_at_zero() {
    let a = ColorVec::new(1, 0, 3, 0, 0, 0);
    let b = ColorVec::new(2, 0, 1, 0, 0, 4);
    assert_eq!(a.saturating_sub(&b), ColorVec::new(0, 0, 2, 0, 0, 0));
    assert_eq!(a.saturating_sub(&ColorVec::empty()), a);
}

#[test]
fn slot_accessors() {
    let mut v = ColorVec::empty();
    v.set(Color::Green, 2);
    v.add(Color::Green, 1);
    v.add(Color::Yellow, 5);
    assert_eq!(v.get(Color::Green), 3);
    assert_eq!(v.get(Color::Yellow), 5);
    assert_eq!(v.total(), 8);

    v.sub(Color::Green, 1);
    assert_eq!(v.get(Color::Green), 2);
    // sub stops at zero
    v.sub(Color::Green, 10);
    assert_eq!(v.get(Color::Green), 0);
}

#[test]
fn wildcard_is_the_last_slot() {
    assert!(Color::WILDCARD.is_wildcard());
    assert!(Color::REGULAR.iter().all(|c| !c.is_wildcard()));
    assert_eq!(Color::ALL.len(), 6);
    assert_eq!(Color::ALL[5], Color::WILDCARD);
}

#[test]
fn color_vec_serializes_as_bare_array() {
    let v = ColorVec::new(1, 1, 0, 0, 2, 1);
    assert_eq!(serde_json::to_value(v).unwrap(), json!([1, 1, 0, 0, 2, 1]));
    let back: ColorVec = serde_json::from_value(json!([1, 1, 0, 0, 2, 1])).unwrap();
    assert_eq!(back, v);
}

#[test]
fn color_serializes_as_lowercase_name() {
    assert_eq!(serde_json::to_value(Color::Black).unwrap(), json!("black"));
    assert_eq!(serde_json::to_value(Color::Yellow).unwrap(), json!("yellow"));
    let back: Color = serde_json::from_value(json!("red")).unwrap();
    assert_eq!(back, Color::Red);
    assert!(serde_json::from_value::<Color>(json!("purple")).is_err());
}
