//! Tests for destination resolution: new instances, existing instances and
//! explicitly typed destinations

use automap::{Destination, Mapper, MapperError, Model, TypeDescriptor};
use serde_json::json;

use crate::utils::{Person, User, record};

fn user_person_mapper() -> Mapper {
    let mapper = Mapper::new();
    mapper.create_map::<User, Person>().unwrap().build().unwrap();
    mapper
}

#[test]
fn test_existing_destination_is_mutated_and_returned() {
    let mapper = user_person_mapper();
    let mut emma = Person::new("Emma", "Watson");
    let emma_ptr: *const Person = &emma;

    let result = mapper
        .map_into(&User::new("John", "Denver", "john@email.com"), &mut emma)
        .unwrap();
    assert!(std::ptr::eq(result, emma_ptr));
    assert_eq!(*result, Person::new("John", "Denver"));
    assert_eq!(emma, Person::new("John", "Denver"));
}

#[test]
fn test_new_instance_is_always_fresh() {
    let mapper = user_person_mapper();
    let user = User::new("John", "Denver", "john@email.com");

    let first = mapper
        .resolve(&user, Destination::new_instance::<Person>())
        .unwrap();
    let second = mapper
        .resolve(&user, Destination::new_instance::<Person>())
        .unwrap();
    assert!(first.is_created());
    assert!(!std::ptr::addr_eq(first.as_model(), second.as_model()));

    let person = first.into_created::<Person>().unwrap();
    assert_eq!(person, Person::new("John", "Denver"));
}

#[test]
fn test_explicit_type_populates_record_in_place() {
    let mapper = user_person_mapper();
    let mut john = record(json!({ "first_name": "John" }));

    mapper
        .map_into_as(
            &User::new("John", "Denver", "john@email.com"),
            &mut john,
            TypeDescriptor::of::<Person>(),
        )
        .unwrap();

    assert!(john.is_anonymous());
    assert_eq!(
        john,
        record(json!({ "first_name": "John", "last_name": "Denver" }))
    );
}

#[test]
fn test_record_destination_without_type_is_unresolvable() {
    let mapper = user_person_mapper();
    let mut target = record(json!({}));

    let err = mapper
        .map_into(&User::new("John", "Denver", "john@email.com"), &mut target)
        .unwrap_err();
    assert!(matches!(err, MapperError::UnresolvableDestinationType));
    assert!(target.is_empty());
}

#[test]
fn test_resolve_existing_instance_variants() {
    let mapper = user_person_mapper();
    let user = User::new("John", "Denver", "john@email.com");

    let mut person = Person::default();
    let mapped = mapper
        .resolve(&user, Destination::existing(&mut person))
        .unwrap();
    assert!(!mapped.is_created());
    assert!(mapped.into_created::<Person>().is_none());
    assert_eq!(person, Person::new("John", "Denver"));

    let mut target = record(json!({}));
    mapper
        .resolve(&user, Destination::existing_as::<Person>(&mut target))
        .unwrap();
    assert_eq!(
        target,
        record(json!({ "first_name": "John", "last_name": "Denver" }))
    );
}
