//! Shared fixture models for the integration tests

use automap::{Mapper, Model, Record};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source model with a field the person view does not have
#[derive(Debug, Clone, Default, PartialEq, Model, Serialize, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Model, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        }
    }
}

/// Flat row as read from storage
#[derive(Debug, Clone, Default, PartialEq, Model, Serialize, Deserialize)]
pub struct UserCompleteRow {
    pub user_id: u32,
    pub code: String,
    pub first_name: String,
    pub last_name: String,
    pub company_id: u32,
}

impl UserCompleteRow {
    pub fn new(user_id: u32, code: &str, first_name: &str, last_name: &str, company_id: u32) -> Self {
        Self {
            user_id,
            code: code.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            company_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Model, Serialize, Deserialize)]
pub struct Company {
    pub id: u32,
    pub code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Model, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub full_name: String,
    pub company: Company,
}

/// Model with a field hidden from the mapper
#[derive(Debug, Clone, Default, PartialEq, Model, Serialize, Deserialize)]
pub struct Account {
    #[mapper(name = "userName")]
    pub user_name: String,
    #[mapper(skip)]
    pub password_hash: String,
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Model, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
    pub label: String,
}

/// Build a `Record` from a JSON object literal
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Mapper with the row -> employee configuration used across tests
pub fn employee_mapper() -> Mapper {
    let mapper = Mapper::new();
    mapper
        .create_map::<UserCompleteRow, Employee>()
        .unwrap()
        .for_field("company")
        .unwrap()
        .map_from_fn(|src, _dst, mapper| mapper.map_value::<Company>(src))
        .for_field("full_name")
        .unwrap()
        .map_from_fn(|src, _dst, _mapper| Ok(format!("{} {}", src.first_name, src.last_name).into()))
        .for_field("id")
        .unwrap()
        .map_from("user_id")
        .build()
        .unwrap();
    mapper
        .create_map::<UserCompleteRow, Company>()
        .unwrap()
        .for_field("id")
        .unwrap()
        .map_from("company_id")
        .build()
        .unwrap();
    mapper
}

/// Sample rows
pub fn rows() -> Vec<UserCompleteRow> {
    vec![
        UserCompleteRow::new(1, "ACME-01", "Emma", "Watson", 42),
        UserCompleteRow::new(2, "ACME-01", "John", "Denver", 42),
    ]
}
