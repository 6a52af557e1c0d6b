//! Mapping with per-field rules
//!
//! A flat row is mapped into a user with a nested organization. Field names
//! that differ are mapped explicitly, the organization is built by a nested
//! mapping, and the full name keeps whatever the destination already had.

use anyhow::Result;
use automap::{Mapper, Model, Value};
use log::info;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Default, Model, Serialize, Deserialize)]
struct Row {
    organization_id: u32,
    user_id: u32,
    name: String,
    last_name: String,
}

#[derive(Debug, Default, Model, Serialize, Deserialize)]
struct User {
    id: u32,
    full_name: String,
    organization: Option<Organization>,
}

#[derive(Debug, Default, Model, Serialize, Deserialize)]
struct Organization {
    id: u32,
    name: String,
}

fn configure(mapper: &Mapper) -> Result<()> {
    mapper
        .create_map::<Row, User>()?
        .for_field("id")?
        .map_from("user_id")
        .for_field("organization")?
        .map_from_fn(|src, _dst, mapper| mapper.map_value::<Organization>(src))
        .for_field("full_name")?
        .map_from_fn(|src, dst, _mapper| match dst.get_field("full_name")? {
            Some(Value::String(current)) if !current.is_empty() => Ok(json!(current)),
            _ => Ok(json!(format!("{} {}", src.name, src.last_name))),
        })
        .build()?;

    mapper
        .create_map::<Row, Organization>()?
        .for_field("id")?
        .map_from("organization_id")
        // the row's name belongs to the user
        .for_field("name")?
        .ignore()
        .build()?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mapper = Mapper::new();
    configure(&mapper)?;

    let row = Row {
        organization_id: 1,
        user_id: 1,
        name: "John".to_string(),
        last_name: "Denver".to_string(),
    };

    let user: User = mapper.map(&row)?;
    info!("{user:?}");

    let organization: Organization = mapper.map(&row)?;
    info!("{organization:?}");

    let mut existing = User {
        id: 1,
        full_name: "Emma Watson".to_string(),
        organization: None,
    };
    mapper.map_into(&row, &mut existing)?;
    info!("{existing:?}");

    Ok(())
}
