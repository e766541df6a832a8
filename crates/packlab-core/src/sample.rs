use crate::model::{AnswerOption, Item, ItemKind, Pack};

/// Deterministic demo pack exercising all three item kinds.
///
/// Used by the CLI `sample` subcommand and as a fixture in tests.
pub fn sample_pack() -> Pack {
    Pack {
        title: "Sample Learning Pack".to_string(),
        description: Some(
            "A sample pack demonstrating all question types and features".to_string(),
        ),
        tags: vec![
            "sample".to_string(),
            "demo".to_string(),
            "testing".to_string(),
        ],
        public: Some(true),
        items: vec![
            Item {
                id: "sample-1".to_string(),
                text: "What is the capital of France?".to_string(),
                kind: ItemKind::Single,
                options: vec![
                    option("a", "London", false, None),
                    option(
                        "b",
                        "Paris",
                        true,
                        Some("Paris is the capital and most populous city of France."),
                    ),
                    option("c", "Berlin", false, None),
                    option("d", "Madrid", false, None),
                ],
                explanation: Some(
                    "Paris is the capital and most populous city of France.".to_string(),
                ),
            },
            Item {
                id: "sample-2".to_string(),
                text: "Which of the following are programming languages?".to_string(),
                kind: ItemKind::Multi,
                options: vec![
                    option("a", "JavaScript", true, None),
                    option("b", "HTML", false, None),
                    option("c", "Python", true, None),
                    option("d", "CSS", false, None),
                ],
                explanation: Some(
                    "JavaScript and Python are programming languages, while HTML and CSS \
                     are markup and styling languages."
                        .to_string(),
                ),
            },
            Item {
                id: "sample-3".to_string(),
                text: "Explain the concept of recursion in programming.".to_string(),
                kind: ItemKind::Text,
                options: Vec::new(),
                explanation: Some(
                    "Recursion is a programming technique where a function calls itself \
                     to solve smaller instances of the same problem."
                        .to_string(),
                ),
            },
        ],
    }
}

fn option(id: &str, text: &str, correct: bool, explanation: Option<&str>) -> AnswerOption {
    AnswerOption {
        id: id.to_string(),
        text: text.to_string(),
        correct,
        explanation: explanation.map(str::to_string),
    }
}
