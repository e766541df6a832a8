use packlab_core::Pack;
use schemars::schema::RootSchema;
use schemars::schema_for;

/// Emit the JSON Schema for the pack wire format.
///
/// Handy as a machine-readable contract for the generators that author
/// packs.
pub fn pack_json_schema() -> RootSchema {
    schema_for!(Pack)
}
