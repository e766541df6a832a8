use std::collections::HashSet;

use crate::model::{Item, ItemKind, Pack};
use crate::report::{IssueSeverity, ValidationIssue, ValidationReport};

/// Validate the cross-field invariants of an already-typed pack.
///
/// Field-level shape checks (types, presence, empty strings) belong to the
/// raw-value walker in the parsing crate; this pass covers the relations a
/// typed value can still violate: item kind vs. options vs. correct-count,
/// and id uniqueness.
pub fn validate_pack(pack: &Pack) -> ValidationReport {
    let mut report = ValidationReport::default();

    let mut seen = HashSet::new();
    for (idx, item) in pack.items.iter().enumerate() {
        let base_path = format!("items.{idx}");
        validate_item(item, &base_path, &mut report);
        if !seen.insert(item.id.as_str()) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "duplicate_item_id",
                format!("{base_path}.id"),
                format!("duplicate item id '{}'", item.id),
                Some("give every item a unique id".to_string()),
            ));
        }
    }

    report
}

/// Validate a single item's kind/options/correct-count invariant.
///
/// `base_path` locates the item within its pack, e.g. `items.3`.
pub fn validate_item(item: &Item, base_path: &str, report: &mut ValidationReport) {
    match item.kind {
        ItemKind::Text => {
            if !item.options.is_empty() {
                report.push_error(ValidationIssue::new(
                    IssueSeverity::Error,
                    "options_forbidden",
                    format!("{base_path}.options"),
                    "text items must not carry options".to_string(),
                    Some("remove the options array or change the item type".to_string()),
                ));
            }
        }
        ItemKind::Single | ItemKind::Multi => {
            if item.options.is_empty() {
                report.push_error(ValidationIssue::new(
                    IssueSeverity::Error,
                    "options_required",
                    format!("{base_path}.options"),
                    format!("{} items require at least one option", item.kind.as_str()),
                    Some("add an options array with at least one entry".to_string()),
                ));
            } else {
                let correct = item.correct_count();
                if item.kind == ItemKind::Single && correct != 1 {
                    report.push_error(ValidationIssue::new(
                        IssueSeverity::Error,
                        "correct_count",
                        format!("{base_path}.options"),
                        "single items require exactly one option marked correct".to_string(),
                        Some("mark exactly one option as correct".to_string()),
                    ));
                }
                if item.kind == ItemKind::Multi && correct == 0 {
                    report.push_error(ValidationIssue::new(
                        IssueSeverity::Error,
                        "correct_count",
                        format!("{base_path}.options"),
                        "multi items require at least one option marked correct".to_string(),
                        Some("mark at least one option as correct".to_string()),
                    ));
                }
            }
        }
    }

    let mut seen = HashSet::new();
    for (idx, option) in item.options.iter().enumerate() {
        if !seen.insert(option.id.as_str()) {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "duplicate_option_id",
                format!("{base_path}.options.{idx}.id"),
                format!("duplicate option id '{}' within item", option.id),
                None,
            ));
        }
    }
}
