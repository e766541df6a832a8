//! Field-level shape checks over the raw JSON value tree.
//!
//! Collects every violation instead of stopping at the first. Items whose
//! own shape is clean additionally get the cross-field invariant check, so a
//! malformed option in one item never hides an invariant violation in
//! another.

use std::collections::HashSet;

use packlab_core::{validate_item, IssueSeverity, Item, ValidationIssue, ValidationReport};
use serde_json::Value;

const ITEM_KINDS: [&str; 3] = ["single", "multi", "text"];

pub(crate) fn check_pack_value(value: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(object) = value.as_object() else {
        report.push_error(error(
            "invalid_type",
            "",
            "expected a JSON object".to_string(),
        ));
        return report;
    };

    check_required_string(object.get("title"), "title", true, &mut report);
    if let Some(description) = object.get("description") {
        if !description.is_string() {
            report.push_error(error(
                "invalid_type",
                "description",
                "expected a string".to_string(),
            ));
        }
    }
    if let Some(tags) = object.get("tags") {
        match tags.as_array() {
            Some(entries) => {
                for (idx, tag) in entries.iter().enumerate() {
                    if !tag.is_string() {
                        report.push_error(error(
                            "invalid_type",
                            &format!("tags.{idx}"),
                            "expected a string".to_string(),
                        ));
                    }
                }
            }
            None => report.push_error(error(
                "invalid_type",
                "tags",
                "expected an array of strings".to_string(),
            )),
        }
    }
    if let Some(public) = object.get("public") {
        if !public.is_boolean() {
            report.push_error(error(
                "invalid_type",
                "public",
                "expected a boolean".to_string(),
            ));
        }
    }

    match object.get("items") {
        None => report.push_error(error(
            "missing_field",
            "items",
            "required field is missing".to_string(),
        )),
        Some(Value::Array(entries)) => check_items(entries, &mut report),
        Some(_) => report.push_error(error(
            "invalid_type",
            "items",
            "expected an array".to_string(),
        )),
    }

    report
}

fn check_items(entries: &[Value], report: &mut ValidationReport) {
    let mut clean_items: Vec<(usize, Item)> = Vec::new();

    for (idx, raw) in entries.iter().enumerate() {
        let base_path = format!("items.{idx}");
        let errors_before = report.errors.len();
        check_item_value(raw, &base_path, report);
        if report.errors.len() > errors_before {
            continue;
        }
        match serde_json::from_value::<Item>(raw.clone()) {
            Ok(item) => {
                validate_item(&item, &base_path, report);
                clean_items.push((idx, item));
            }
            Err(err) => report.push_error(error("invalid_pack_json", &base_path, err.to_string())),
        }
    }

    let mut seen = HashSet::new();
    for (idx, item) in &clean_items {
        if !seen.insert(item.id.as_str()) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "duplicate_item_id",
                format!("items.{idx}.id"),
                format!("duplicate item id '{}'", item.id),
                Some("give every item a unique id".to_string()),
            ));
        }
    }
}

fn check_item_value(value: &Value, base_path: &str, report: &mut ValidationReport) {
    let Some(object) = value.as_object() else {
        report.push_error(error(
            "invalid_type",
            base_path,
            "expected an object".to_string(),
        ));
        return;
    };

    check_required_string(
        object.get("id"),
        &format!("{base_path}.id"),
        false,
        report,
    );
    check_required_string(
        object.get("text"),
        &format!("{base_path}.text"),
        true,
        report,
    );

    // The only permitted default: an absent `type` becomes `single` during
    // deserialization. A present-but-invalid value is a hard error.
    if let Some(kind) = object.get("type") {
        match kind.as_str() {
            Some(name) if ITEM_KINDS.contains(&name) => {}
            Some(name) => report.push_error(error(
                "invalid_item_kind",
                &format!("{base_path}.type"),
                format!("invalid item type '{name}' (expected single, multi, or text)"),
            )),
            None => report.push_error(error(
                "invalid_type",
                &format!("{base_path}.type"),
                "expected a string".to_string(),
            )),
        }
    }

    if let Some(options) = object.get("options") {
        match options.as_array() {
            Some(entries) => {
                for (idx, option) in entries.iter().enumerate() {
                    check_option_value(option, &format!("{base_path}.options.{idx}"), report);
                }
            }
            None => report.push_error(error(
                "invalid_type",
                &format!("{base_path}.options"),
                "expected an array".to_string(),
            )),
        }
    }

    if let Some(explanation) = object.get("explanation") {
        if !explanation.is_string() {
            report.push_error(error(
                "invalid_type",
                &format!("{base_path}.explanation"),
                "expected a string".to_string(),
            ));
        }
    }
}

fn check_option_value(value: &Value, base_path: &str, report: &mut ValidationReport) {
    let Some(object) = value.as_object() else {
        report.push_error(error(
            "invalid_type",
            base_path,
            "expected an object".to_string(),
        ));
        return;
    };

    check_required_string(
        object.get("id"),
        &format!("{base_path}.id"),
        false,
        report,
    );
    check_required_string(
        object.get("text"),
        &format!("{base_path}.text"),
        true,
        report,
    );

    // A missing `correct` is its own violation, never folded into the
    // kind/options cross-field message.
    match object.get("correct") {
        None => report.push_error(error(
            "missing_field",
            &format!("{base_path}.correct"),
            "required field is missing".to_string(),
        )),
        Some(correct) if !correct.is_boolean() => report.push_error(error(
            "invalid_type",
            &format!("{base_path}.correct"),
            "expected a boolean".to_string(),
        )),
        Some(_) => {}
    }

    if let Some(explanation) = object.get("explanation") {
        if !explanation.is_string() {
            report.push_error(error(
                "invalid_type",
                &format!("{base_path}.explanation"),
                "expected a string".to_string(),
            ));
        }
    }
}

fn check_required_string(
    value: Option<&Value>,
    path: &str,
    reject_empty: bool,
    report: &mut ValidationReport,
) {
    match value {
        None => report.push_error(error(
            "missing_field",
            path,
            "required field is missing".to_string(),
        )),
        Some(Value::String(text)) => {
            if reject_empty && text.is_empty() {
                report.push_error(error(
                    "empty_field",
                    path,
                    "must not be empty".to_string(),
                ));
            }
        }
        Some(_) => report.push_error(error(
            "invalid_type",
            path,
            "expected a string".to_string(),
        )),
    }
}

fn error(code: &str, path: &str, message: String) -> ValidationIssue {
    ValidationIssue::new(IssueSeverity::Error, code, path, message, None)
}
