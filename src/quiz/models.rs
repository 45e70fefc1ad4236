//! Data models for generated quiz questions

use serde::{Deserialize, Serialize};

/// How a quiz question was built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Asks what the text says about an extracted key term
    Concept,
    /// Sentence with its middle word blanked out
    FillBlank,
    /// Document-order fallback with fixed filler distractors
    Simple,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Concept => "concept",
            QuestionKind::FillBlank => "fill_blank",
            QuestionKind::Simple => "simple",
        }
    }
}

/// A multiple-choice question. The correct answer always appears in
/// `options`, whose order is randomized per question; distractors are not
/// guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_kind_snake_case_under_type_key() {
        let question = QuizQuestion {
            question: "Fill in the blank: water _____ downhill".to_string(),
            options: vec!["flows".to_string(), "sings".to_string()],
            correct_answer: "flows".to_string(),
            kind: QuestionKind::FillBlank,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["type"], "fill_blank");
        assert_eq!(json["correct_answer"], "flows");
        assert_eq!(json["options"].as_array().unwrap().len(), 2);
    }
}
