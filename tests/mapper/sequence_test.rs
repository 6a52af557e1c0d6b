//! Tests for mapping sequences of sources

use automap::{Mapper, MapperError};
use serde_json::json;

use crate::utils::{Company, Employee, Person, User, UserCompleteRow, employee_mapper, rows};

fn expected_employees() -> Vec<Employee> {
    let company = Company {
        id: 42,
        code: "ACME-01".to_string(),
    };
    vec![
        Employee {
            id: 1,
            full_name: "Emma Watson".to_string(),
            company: company.clone(),
        },
        Employee {
            id: 2,
            full_name: "John Denver".to_string(),
            company,
        },
    ]
}

#[test]
fn test_map_all_element_for_element() {
    let mapper = employee_mapper();
    let rows = rows();

    let employees: Vec<Employee> = mapper.map_all(&rows).unwrap();
    assert_eq!(employees, expected_employees());

    let one_by_one: Vec<Employee> = rows.iter().map(|row| mapper.map(row).unwrap()).collect();
    assert_eq!(employees, one_by_one);
}

#[test]
fn test_map_all_empty() {
    let mapper = employee_mapper();
    let employees: Vec<Employee> = mapper.map_all::<UserCompleteRow, Employee>(&[]).unwrap();
    assert!(employees.is_empty());
}

#[test]
fn test_map_all_aborts_on_first_failure() {
    let mapper = Mapper::new();
    mapper
        .create_map::<UserCompleteRow, Person>()
        .unwrap()
        .for_field("last_name")
        .unwrap()
        .map_from_fn(|src, _dst, _mapper| {
            if src.user_id == 2 {
                Err(MapperError::UnresolvableDestinationType)
            } else {
                Ok(json!(src.last_name))
            }
        })
        .build()
        .unwrap();

    let result = mapper.map_all::<UserCompleteRow, Person>(&rows());
    assert!(matches!(result, Err(MapperError::UnresolvableDestinationType)));
}

#[test]
fn test_par_map_all_keeps_order() {
    let mapper = employee_mapper();
    let rows: Vec<UserCompleteRow> = (0..64)
        .map(|i| UserCompleteRow::new(i, "ACME-01", "Emma", &format!("Watson{i}"), 42))
        .collect();

    let employees: Vec<Employee> = mapper.par_map_all(&rows).unwrap();
    assert_eq!(employees.len(), 64);
    for (i, employee) in employees.iter().enumerate() {
        assert_eq!(employee.id as usize, i);
        assert_eq!(employee.full_name, format!("Emma Watson{i}"));
    }
}

#[test]
fn test_map_all_into_applies_in_order() {
    let mapper = Mapper::new();
    mapper.create_map::<User, Person>().unwrap().build().unwrap();
    let users = vec![
        User::new("John", "Denver", "john@email.com"),
        User::new("Emma", "Watson", "emma@watson.com"),
    ];

    let mut person = Person::default();
    mapper.map_all_into(&users, &mut person).unwrap();
    assert_eq!(person, Person::new("Emma", "Watson"));
}
