use boiler_quote::{PropertyAnalysis, QuoteResult};
use schemars::schema_for;

#[test]
fn test_generate_input_json_schema() {
    let schema = schema_for!(PropertyAnalysis);
    let json = serde_json::to_value(&schema).unwrap();
    assert!(json["properties"]["propertyType"].is_object());
    assert!(json["required"]
        .as_array()
        .unwrap()
        .contains(&"postcode".into()));
}

#[test]
fn test_generate_quote_json_schema() {
    let schema = schema_for!(QuoteResult);
    assert!(serde_json::to_string_pretty(&schema).is_ok());
}
