use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One selectable answer choice of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnswerOption {
    /// Short identifier, unique within its item.
    pub id: String,
    /// Display text shown to the learner.
    pub text: String,
    /// Marks a correct answer. Required on the wire, never inferred.
    pub correct: bool,
    /// Optional explanation shown only for this option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Question kinds supported by a pack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Exactly one option is correct.
    #[default]
    Single,
    /// One or more options are correct.
    Multi,
    /// Free-text answer; carries no options.
    Text,
}

impl ItemKind {
    /// Wire spelling of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Single => "single",
            ItemKind::Multi => "multi",
            ItemKind::Text => "text",
        }
    }
}

/// One question within a pack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Item {
    /// Identifier, unique within the pack.
    pub id: String,
    /// The question prompt.
    pub text: String,
    /// Question kind; `single` when absent from the raw input.
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    /// Answer choices in display order. Absent and empty are equivalent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AnswerOption>,
    /// Optional explanation shown after answering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl Item {
    /// True for `single` and `multi` items.
    pub fn is_choice(&self) -> bool {
        !matches!(self.kind, ItemKind::Text)
    }

    /// Number of options marked correct.
    pub fn correct_count(&self) -> usize {
        self.options.iter().filter(|option| option.correct).count()
    }
}

/// A named, taggable collection of quiz items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Pack {
    /// Display title.
    pub title: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags in insertion order; duplicates are kept as authored.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Visibility flag; callers decide the default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    /// Items in display order.
    pub items: Vec<Item>,
}
