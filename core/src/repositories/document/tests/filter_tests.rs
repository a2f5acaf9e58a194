//! Unit tests for the field-equality filter

use crate::domain::entities::{Customer, User};
use crate::repositories::Filter;

#[test]
fn test_empty_filter_matches_everything() {
    let filter = Filter::new();
    assert!(filter.is_empty());
    assert!(filter.matches(&Customer::new("Acme")).unwrap());
}

#[test]
fn test_single_condition() {
    let filter = Filter::new().eq("name", "Acme");
    assert!(filter.matches(&Customer::new("Acme")).unwrap());
    assert!(!filter.matches(&Customer::new("Globex")).unwrap());
}

#[test]
fn test_all_conditions_must_hold() {
    let user = User::new("jdoe", "hash").with_name("John");
    let matching = Filter::new().eq("user_name", "jdoe").eq("name", "John");
    let partial = Filter::new().eq("user_name", "jdoe").eq("name", "Jane");

    assert!(matching.matches(&user).unwrap());
    assert!(!partial.matches(&user).unwrap());
    assert_eq!(matching.conditions().len(), 2);
}

#[test]
fn test_unknown_field_never_matches() {
    let filter = Filter::new().eq("nickname", "jd");
    assert!(!filter.matches(&User::new("jdoe", "hash")).unwrap());
}
