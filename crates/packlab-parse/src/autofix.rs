//! Deterministic repair of structurally incomplete pack drafts.

use serde_json::{json, Value};

use crate::errors::Result;
use crate::parse::parse_json_text;

/// Repair a loosely-structured candidate into a schema-conformant draft.
///
/// Pure and total: always returns an object, never judges correctness. The
/// result is a best-effort draft and must be re-run through the validator.
/// Structurally required gaps are filled with neutral defaults; a `correct`
/// flag is never fabricated as `true` and authored content is never deleted.
/// For the fill-in rules, null, `false`, `0`, and the empty string all count
/// as "missing".
pub fn auto_fix(candidate: &Value) -> Value {
    let mut fixed = candidate.as_object().cloned().unwrap_or_default();

    if is_falsy(fixed.get("title")) {
        fixed.insert("title".to_string(), json!("Untitled Pack"));
    }
    if is_falsy(fixed.get("description")) {
        fixed.insert("description".to_string(), json!(""));
    }
    if is_falsy(fixed.get("tags")) {
        fixed.insert("tags".to_string(), json!([]));
    }
    if !matches!(fixed.get("public"), Some(Value::Bool(_))) {
        fixed.insert("public".to_string(), json!(false));
    }

    // A non-array `items` would make the per-item pass meaningless, so it is
    // replaced outright to keep the fixer total.
    let items = match fixed.get("items") {
        Some(Value::Array(entries)) => entries.clone(),
        _ => Vec::new(),
    };
    let repaired: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(idx, raw)| fix_item(raw, idx))
        .collect();
    fixed.insert("items".to_string(), Value::Array(repaired));

    Value::Object(fixed)
}

/// Preprocess, parse, and auto-fix pack text in one step.
///
/// Fails only when the text is not JSON at all; the returned draft still
/// needs a validation pass.
pub fn fix_pack_text(text: &str) -> Result<Value> {
    Ok(auto_fix(&parse_json_text(text)?))
}

fn fix_item(raw: &Value, index: usize) -> Value {
    let mut item = raw.as_object().cloned().unwrap_or_default();

    if is_falsy(item.get("id")) {
        item.insert("id".to_string(), json!(format!("item-{}", index + 1)));
    }
    if is_falsy(item.get("text")) {
        item.insert("text".to_string(), json!(format!("Question {}", index + 1)));
    }

    let kind_valid = matches!(
        item.get("type").and_then(Value::as_str),
        Some("single" | "multi" | "text")
    );
    if !kind_valid {
        let inferred = match item.get("options") {
            Some(Value::Array(options)) if !options.is_empty() => {
                let correct = options
                    .iter()
                    .filter(|option| option.get("correct").is_some_and(is_truthy))
                    .count();
                if correct > 1 { "multi" } else { "single" }
            }
            _ => "text",
        };
        item.insert("type".to_string(), json!(inferred));
    }

    let is_text = item.get("type").and_then(Value::as_str) == Some("text");
    if !is_text {
        if let Some(Value::Array(options)) = item.get("options") {
            let repaired: Vec<Value> = options
                .iter()
                .enumerate()
                .map(|(idx, option)| fix_option(option, idx))
                .collect();
            item.insert("options".to_string(), Value::Array(repaired));
        }
    }

    Value::Object(item)
}

fn fix_option(raw: &Value, index: usize) -> Value {
    let mut option = raw.as_object().cloned().unwrap_or_default();

    if is_falsy(option.get("id")) {
        // Sequential letters assume at most 26 options per item.
        let id = char::from_u32('a' as u32 + index as u32)
            .map(String::from)
            .unwrap_or_else(|| format!("opt-{}", index + 1));
        option.insert("id".to_string(), json!(id));
    }
    if is_falsy(option.get("text")) {
        option.insert("text".to_string(), json!(format!("Option {}", index + 1)));
    }
    if !matches!(option.get("correct"), Some(Value::Bool(_))) {
        option.insert("correct".to_string(), json!(false));
    }

    Value::Object(option)
}

fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(number)) => number.as_f64() == Some(0.0),
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

fn is_truthy(value: &Value) -> bool {
    !is_falsy(Some(value))
}
