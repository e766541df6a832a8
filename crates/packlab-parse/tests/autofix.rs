use packlab_parse::{auto_fix, fix_pack_text, parse_pack_value};
use serde_json::json;

#[test]
fn fills_empty_object_with_neutral_defaults() {
    let fixed = auto_fix(&json!({}));

    assert_eq!(
        fixed,
        json!({
            "title": "Untitled Pack",
            "description": "",
            "tags": [],
            "items": [],
            "public": false
        })
    );
    assert!(parse_pack_value(&fixed).is_ok());
}

#[test]
fn fixed_draft_validates_when_only_structural_fields_were_missing() {
    let candidate = json!({
        "title": "T",
        "items": [
            {"options": [{"text": "A", "correct": true}, {"text": "B"}]}
        ]
    });

    let fixed = auto_fix(&candidate);
    let pack = parse_pack_value(&fixed).expect("fixed draft validates");

    assert_eq!(pack.items[0].id, "item-1");
    assert_eq!(pack.items[0].text, "Question 1");
    assert_eq!(pack.items[0].options[0].id, "a");
    assert_eq!(pack.items[0].options[1].id, "b");
    assert_eq!(pack.items[0].options[1].text, "B");
    assert!(!pack.items[0].options[1].correct);
}

#[test]
fn infers_multi_when_more_than_one_option_is_marked_correct() {
    let fixed = auto_fix(&json!({
        "items": [
            {"options": [{"text": "A", "correct": true}, {"text": "B", "correct": true}]}
        ]
    }));

    assert_eq!(fixed["items"][0]["type"], json!("multi"));
}

#[test]
fn infers_single_when_at_most_one_option_is_marked_correct() {
    let fixed = auto_fix(&json!({
        "items": [
            {"options": [{"text": "A", "correct": true}, {"text": "B"}]}
        ]
    }));

    assert_eq!(fixed["items"][0]["type"], json!("single"));
}

#[test]
fn infers_text_when_options_are_absent_or_empty() {
    let fixed = auto_fix(&json!({"items": [{"text": "Q"}, {"text": "R", "options": []}]}));

    assert_eq!(fixed["items"][0]["type"], json!("text"));
    assert_eq!(fixed["items"][1]["type"], json!("text"));
    assert!(parse_pack_value(&fixed).is_ok());
}

#[test]
fn never_fabricates_a_true_correct_flag() {
    let fixed = auto_fix(&json!({
        "items": [
            {"type": "single", "options": [{"text": "A", "correct": "yes"}, {"text": "B", "correct": 1}]}
        ]
    }));

    assert_eq!(fixed["items"][0]["options"][0]["correct"], json!(false));
    assert_eq!(fixed["items"][0]["options"][1]["correct"], json!(false));
}

#[test]
fn assigns_sequential_letter_ids() {
    let fixed = auto_fix(&json!({
        "items": [
            {"type": "multi", "options": [
                {"text": "A", "correct": true},
                {"text": "B", "correct": true},
                {"text": "C", "correct": false}
            ]}
        ]
    }));

    let options = fixed["items"][0]["options"].as_array().expect("options");
    assert_eq!(options[0]["id"], json!("a"));
    assert_eq!(options[1]["id"], json!("b"));
    assert_eq!(options[2]["id"], json!("c"));
}

#[test]
fn preserves_authored_content_and_unknown_fields() {
    let candidate = json!({
        "title": "Kept",
        "author": "someone",
        "items": [
            {"id": "x7", "text": "Kept question", "type": "single", "difficulty": 3,
             "options": [{"id": "z", "text": "Kept option", "correct": true}]}
        ]
    });

    let fixed = auto_fix(&candidate);

    assert_eq!(fixed["title"], json!("Kept"));
    assert_eq!(fixed["author"], json!("someone"));
    assert_eq!(fixed["items"][0]["id"], json!("x7"));
    assert_eq!(fixed["items"][0]["difficulty"], json!(3));
    assert_eq!(fixed["items"][0]["options"][0]["id"], json!("z"));
    assert_eq!(fixed["items"][0]["options"][0]["correct"], json!(true));
}

#[test]
fn coerces_public_to_strict_boolean() {
    assert_eq!(auto_fix(&json!({"public": "yes"}))["public"], json!(false));
    assert_eq!(auto_fix(&json!({"public": true}))["public"], json!(true));
}

#[test]
fn treats_empty_strings_as_missing() {
    let fixed = auto_fix(&json!({
        "title": "",
        "items": [{"id": "", "text": "", "type": "text"}]
    }));

    assert_eq!(fixed["title"], json!("Untitled Pack"));
    assert_eq!(fixed["items"][0]["id"], json!("item-1"));
    assert_eq!(fixed["items"][0]["text"], json!("Question 1"));
}

#[test]
fn replaces_non_array_items_to_stay_total() {
    let fixed = auto_fix(&json!({"title": "T", "items": "oops"}));
    assert_eq!(fixed["items"], json!([]));
}

#[test]
fn non_object_candidate_becomes_a_default_pack() {
    let fixed = auto_fix(&json!(42));
    assert!(parse_pack_value(&fixed).is_ok());
}

#[test]
fn fix_pack_text_runs_the_lenient_pipeline() {
    let fixed = fix_pack_text("{'items': [{'options': [{'text': 'A', 'correct': true},]}],}")
        .expect("fixable text");

    assert_eq!(fixed["title"], json!("Untitled Pack"));
    assert_eq!(fixed["items"][0]["type"], json!("single"));
    assert!(parse_pack_value(&fixed).is_ok());
}
