use packlab_core::{ItemKind, Pack};
use serde::{Deserialize, Serialize};

/// Advisory quality rating for a schema-valid pack.
///
/// Suggestions are non-blocking advice; warnings flag quality concerns.
/// Neither blocks persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityReport {
    /// Heuristic content-completeness score, 0 to 100.
    pub score: u8,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
}

/// Score a pack against the content-quality heuristics.
///
/// The pack must already be schema-valid; behavior on invalid input is
/// unspecified. Each triggered rule subtracts a fixed penalty, with a single
/// floor-at-zero clamp at the end.
pub fn score_pack(pack: &Pack) -> QualityReport {
    let mut suggestions = Vec::new();
    let mut warnings = Vec::new();
    let mut score: i32 = 100;

    let description_len = pack
        .description
        .as_deref()
        .map_or(0, |description| description.chars().count());
    if description_len < 20 {
        suggestions.push("Add a more detailed description (at least 20 characters)".to_string());
        score -= 10;
    }

    if pack.tags.is_empty() {
        suggestions.push("Add relevant tags to improve discoverability".to_string());
        score -= 5;
    }
    if pack.tags.len() > 10 {
        warnings
            .push("Too many tags might reduce focus - consider limiting to 8-10 tags".to_string());
        score -= 5;
    }

    if pack.items.len() < 3 {
        warnings.push("Pack should have at least 3 questions for meaningful learning".to_string());
        score -= 15;
    }
    if pack.items.len() > 20 {
        suggestions.push(
            "Consider splitting into multiple packs - large packs can be overwhelming".to_string(),
        );
        score -= 5;
    }

    for (idx, item) in pack.items.iter().enumerate() {
        let number = idx + 1;

        let has_explanation = item
            .explanation
            .as_deref()
            .is_some_and(|explanation| !explanation.is_empty());
        if !has_explanation {
            suggestions.push(format!(
                "Question {number}: Add explanation for better learning experience"
            ));
            score -= 3;
        }

        if !item.is_choice() {
            continue;
        }

        if item.options.len() < 2 {
            warnings.push(format!("Question {number}: Should have at least 2 options"));
            score -= 10;
        }

        let correct = item.correct_count();
        if correct == 0 {
            warnings.push(format!("Question {number}: No correct answer marked"));
            score -= 15;
        }
        if item.kind == ItemKind::Single && correct > 1 {
            warnings.push(format!(
                "Question {number}: Single choice should have exactly one correct answer"
            ));
            score -= 10;
        }
        if item.kind == ItemKind::Multi && correct == 1 {
            suggestions.push(format!(
                "Question {number}: Consider changing to single choice or add more correct options"
            ));
            score -= 5;
        }
    }

    QualityReport {
        score: score.max(0) as u8,
        suggestions,
        warnings,
    }
}
