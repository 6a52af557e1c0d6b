//! Tests for the process-wide mapper
//!
//! The global registry is shared by every test in this binary, so these
//! tests use types that no other test registers.

use automap::{Mapper, MapperError, Model};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::utils::record;

#[derive(Debug, Default, PartialEq, Model, Serialize, Deserialize)]
struct Invoice {
    number: u32,
    customer: String,
    total: f64,
}

#[derive(Debug, Default, PartialEq, Model, Serialize, Deserialize)]
struct InvoiceSummary {
    number: u32,
    label: String,
}

#[test]
fn test_global_create_and_map() {
    automap::create_map::<Invoice, InvoiceSummary>()
        .unwrap()
        .for_field("label")
        .unwrap()
        .map_from_fn(|src, _dst, _mapper| Ok(json!(format!("#{} {}", src.number, src.customer))))
        .build()
        .unwrap();

    let invoice = Invoice {
        number: 7,
        customer: "ACME".to_string(),
        total: 12.5,
    };
    let summary: InvoiceSummary = automap::map(&invoice).unwrap();
    assert_eq!(
        summary,
        InvoiceSummary {
            number: 7,
            label: "#7 ACME".to_string(),
        }
    );

    let mut existing = InvoiceSummary::default();
    automap::map_into(&invoice, &mut existing).unwrap();
    assert_eq!(existing, summary);

    let summaries: Vec<InvoiceSummary> = automap::map_all(&[invoice]).unwrap();
    assert_eq!(summaries, vec![summary]);

    let err = automap::create_map::<Invoice, InvoiceSummary>().err().unwrap();
    assert!(matches!(err, MapperError::DuplicateMapping { .. }));
}

#[test]
fn test_global_anonymous_source() {
    let mut target = record(json!({}));
    automap::map_into_as(
        &record(json!({ "number": 3, "customer": "ACME" })),
        &mut target,
        automap::TypeDescriptor::of::<Invoice>(),
    )
    .unwrap();
    assert_eq!(
        target,
        record(json!({ "number": 3, "customer": "ACME", "total": null }))
    );
}

#[test]
fn test_global_is_a_single_instance() {
    assert!(std::ptr::eq(Mapper::global(), Mapper::global()));
}
