use packlab_core::{sample_pack, AnswerOption, Item, ItemKind, Pack};
use packlab_eval::score_pack;

fn option(id: &str, correct: bool) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: format!("Option {id}"),
        correct,
        explanation: None,
    }
}

fn explained_item(id: &str, kind: ItemKind, options: Vec<AnswerOption>) -> Item {
    Item {
        id: id.to_string(),
        text: format!("Question {id}"),
        kind,
        options,
        explanation: Some("Because this is the documented behavior.".to_string()),
    }
}

fn good_pack() -> Pack {
    Pack {
        title: "Good pack".to_string(),
        description: Some("A description comfortably over twenty characters.".to_string()),
        tags: vec!["tag".to_string()],
        public: None,
        items: vec![
            explained_item("1", ItemKind::Single, vec![option("a", true), option("b", false)]),
            explained_item("2", ItemKind::Multi, vec![option("a", true), option("b", true)]),
            explained_item("3", ItemKind::Text, Vec::new()),
        ],
    }
}

#[test]
fn sample_pack_scores_a_clean_hundred() {
    let report = score_pack(&sample_pack());
    assert_eq!(report.score, 100);
    assert!(report.suggestions.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn good_pack_scores_a_clean_hundred() {
    let report = score_pack(&good_pack());
    assert_eq!(report.score, 100);
    assert!(report.suggestions.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn short_description_costs_ten() {
    let mut pack = good_pack();
    pack.description = Some("too short".to_string());

    let report = score_pack(&pack);
    assert_eq!(report.score, 90);
    assert_eq!(
        report.suggestions,
        vec!["Add a more detailed description (at least 20 characters)".to_string()]
    );
}

#[test]
fn missing_description_costs_ten() {
    let mut pack = good_pack();
    pack.description = None;

    assert_eq!(score_pack(&pack).score, 90);
}

#[test]
fn missing_tags_cost_five() {
    let mut pack = good_pack();
    pack.tags = Vec::new();

    let report = score_pack(&pack);
    assert_eq!(report.score, 95);
    assert_eq!(
        report.suggestions,
        vec!["Add relevant tags to improve discoverability".to_string()]
    );
}

#[test]
fn too_many_tags_cost_five() {
    let mut pack = good_pack();
    pack.tags = (0..11).map(|idx| format!("tag-{idx}")).collect();

    let report = score_pack(&pack);
    assert_eq!(report.score, 95);
    assert_eq!(
        report.warnings,
        vec!["Too many tags might reduce focus - consider limiting to 8-10 tags".to_string()]
    );
}

#[test]
fn fewer_than_three_items_costs_fifteen() {
    let mut pack = good_pack();
    pack.items.truncate(1);

    let report = score_pack(&pack);
    assert_eq!(report.score, 85);
    assert_eq!(
        report.warnings,
        vec!["Pack should have at least 3 questions for meaningful learning".to_string()]
    );
}

#[test]
fn more_than_twenty_items_costs_five() {
    let mut pack = good_pack();
    for idx in 0..18 {
        pack.items
            .push(explained_item(&format!("extra-{idx}"), ItemKind::Text, Vec::new()));
    }

    let report = score_pack(&pack);
    assert_eq!(report.score, 95);
    assert!(report
        .suggestions
        .contains(&"Consider splitting into multiple packs - large packs can be overwhelming".to_string()));
}

#[test]
fn missing_explanation_costs_three_per_item() {
    let mut pack = good_pack();
    pack.items[2].explanation = None;

    let report = score_pack(&pack);
    assert_eq!(report.score, 97);
    assert_eq!(
        report.suggestions,
        vec!["Question 3: Add explanation for better learning experience".to_string()]
    );
}

#[test]
fn single_option_item_warns() {
    let mut pack = good_pack();
    pack.items[0] = explained_item("1", ItemKind::Single, vec![option("a", true)]);

    let report = score_pack(&pack);
    assert_eq!(report.score, 90);
    assert_eq!(
        report.warnings,
        vec!["Question 1: Should have at least 2 options".to_string()]
    );
}

#[test]
fn multi_with_exactly_one_correct_suggests_single() {
    let mut pack = good_pack();
    pack.items[1] = explained_item("2", ItemKind::Multi, vec![option("a", true), option("b", false)]);

    let report = score_pack(&pack);
    assert_eq!(report.score, 95);
    assert_eq!(
        report.suggestions,
        vec!["Question 2: Consider changing to single choice or add more correct options".to_string()]
    );
}

#[test]
fn unmarked_and_overmarked_items_warn() {
    // The scorer is advisory and still reports on packs a caller assembled
    // by hand, outside the validator.
    let mut pack = good_pack();
    pack.items[0] = explained_item("1", ItemKind::Single, vec![option("a", true), option("b", true)]);
    pack.items[1] = explained_item("2", ItemKind::Multi, vec![option("a", false), option("b", false)]);

    let report = score_pack(&pack);
    assert_eq!(report.score, 75);
    assert!(report
        .warnings
        .contains(&"Question 1: Single choice should have exactly one correct answer".to_string()));
    assert!(report
        .warnings
        .contains(&"Question 2: No correct answer marked".to_string()));
}

#[test]
fn score_is_clamped_at_zero() {
    let items = (0..30)
        .map(|idx| Item {
            id: format!("q-{idx}"),
            text: format!("Question {idx}"),
            kind: ItemKind::Text,
            options: Vec::new(),
            explanation: None,
        })
        .collect();
    let pack = Pack {
        title: "Bare".to_string(),
        description: None,
        tags: Vec::new(),
        public: None,
        items,
    };

    let report = score_pack(&pack);
    assert_eq!(report.score, 0);
    assert_eq!(report.suggestions.len(), 33);
}
