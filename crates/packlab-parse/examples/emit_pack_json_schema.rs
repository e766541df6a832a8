use packlab_parse::pack_json_schema;

fn main() {
    let schema = pack_json_schema();
    let json = serde_json::to_string_pretty(&schema).expect("serialize pack json schema");
    println!("{json}");
}
