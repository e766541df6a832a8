use jsonschema::JSONSchema;
use packlab_core::sample_pack;
use packlab_parse::pack_json_schema;

#[test]
fn sample_pack_conforms_to_emitted_schema() {
    let schema_json = serde_json::to_value(pack_json_schema()).expect("serialize pack schema");
    let compiled = JSONSchema::compile(&schema_json).expect("compile pack schema");

    let instance = serde_json::to_value(sample_pack()).expect("serialize sample pack");
    assert!(compiled.is_valid(&instance));
}

#[test]
fn emitted_schema_rejects_missing_title() {
    let schema_json = serde_json::to_value(pack_json_schema()).expect("serialize pack schema");
    let compiled = JSONSchema::compile(&schema_json).expect("compile pack schema");

    let instance = serde_json::json!({ "items": [] });
    assert!(!compiled.is_valid(&instance));
}
