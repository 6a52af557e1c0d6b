//! Basic mapping between two models
//!
//! Maps a user into a person view: into a new instance, into an existing
//! instance, into a plain record treated as a person, and over a list.

use anyhow::Result;
use automap::{Mapper, Model, TypeDescriptor};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Model, Serialize, Deserialize)]
struct User {
    first_name: String,
    last_name: String,
    email: String,
}

impl User {
    fn new(first_name: &str, last_name: &str, email: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Default, Model, Serialize, Deserialize)]
struct Person {
    first_name: String,
    last_name: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mapper = Mapper::new();
    mapper.create_map::<User, Person>()?.build()?;

    // New instance
    let user = User::new("John", "Denver", "john@email.com");
    let person: Person = mapper.map(&user)?;
    info!("{person:?}");

    // Existing instance: the fields are overwritten in place
    let mut emma = Person {
        first_name: "Emma".to_string(),
        last_name: "Watson".to_string(),
    };
    mapper.map_into(&user, &mut emma)?;
    info!("{emma:?}");

    // A record stays a record, but is populated with the fields of Person
    let mut john = automap::model::record::record_from(json!({ "first_name": "John" }))
        .ok_or_else(|| anyhow::anyhow!("expected a JSON object"))?;
    mapper.map_into_as(&user, &mut john, TypeDescriptor::of::<Person>())?;
    info!("{}", serde_json::Value::Object(john));

    // Every element of a list is mapped, in order
    let users = vec![
        User::new("John", "Denver", "john@email.com"),
        User::new("Emma", "Watson", "emma@watson.com"),
    ];
    let persons: Vec<Person> = mapper.map_all(&users)?;
    info!("{persons:?}");

    Ok(())
}
