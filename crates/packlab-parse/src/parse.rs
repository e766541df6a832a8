use packlab_core::{IssueSeverity, Pack, ValidationIssue, ValidationReport};
use serde_json::Value;

use crate::errors::{ParseError, Result};
use crate::preprocess::preprocess;
use crate::shape;

/// Parse raw pack text into a validated [`Pack`].
///
/// Runs the preprocessor, the structural JSON parse, and the schema check.
/// Schema failures carry every violation, not just the first.
pub fn parse_pack_text(text: &str) -> Result<Pack> {
    let value = parse_json_text(text)?;
    parse_pack_value(&value)
}

/// Validate an already-parsed JSON value as a pack.
pub fn parse_pack_value(value: &Value) -> Result<Pack> {
    let report = shape::check_pack_value(value);
    if !report.is_ok() {
        return Err(ParseError::Schema(report));
    }

    // The shape check guarantees this succeeds; a failure here is still
    // normalized into the report shape rather than propagated raw.
    serde_json::from_value(value.clone()).map_err(|err| {
        let mut report = ValidationReport::default();
        report.push_error(ValidationIssue::new(
            IssueSeverity::Error,
            "invalid_pack_json",
            "",
            err.to_string(),
            None,
        ));
        ParseError::Schema(report)
    })
}

/// Preprocess and structurally parse pack text, without schema validation.
pub(crate) fn parse_json_text(text: &str) -> Result<Value> {
    let cleaned = preprocess(text);
    serde_json::from_str(&cleaned).map_err(|err| ParseError::Syntax {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })
}
