use schemars::generate::SchemaSettings;
use serde_json::{json, Value};
use wherefix_core::{CleanRequest, CleanResult};

fn generate_schema() -> Value {
    let settings = SchemaSettings::draft07();
    let generator = settings.into_generator();
    json!({
        "CleanRequest": generator.clone().into_root_schema_for::<CleanRequest>(),
        "CleanResult": generator.into_root_schema_for::<CleanResult>(),
    })
}

fn required(schema: &Value) -> Vec<&str> {
    schema["required"]
        .as_array()
        .map(|names| names.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

#[test]
fn request_schema_uses_camel_case_and_requires_only_clause() {
    let schema = generate_schema();
    let request = &schema["CleanRequest"];

    assert_eq!(request["properties"]["clause"]["type"], "string");
    assert!(request["properties"].get("columns").is_some());
    assert!(request["properties"].get("options").is_some());
    assert_eq!(required(request), vec!["clause"]);
}

#[test]
fn result_schema_exposes_wire_names() {
    let schema = generate_schema();
    let result = &schema["CleanResult"];

    for name in [
        "clause",
        "whereClause",
        "limit",
        "columns",
        "selectList",
        "issues",
    ] {
        assert!(
            result["properties"].get(name).is_some(),
            "missing property {name}"
        );
    }
    assert_eq!(required(result), vec!["clause", "whereClause"]);
}

#[test]
#[ignore]
fn print_api_schema() {
    println!(
        "{}",
        serde_json::to_string_pretty(&generate_schema()).expect("serialize schema")
    );
}
