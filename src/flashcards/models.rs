//! Data models for generated flashcards

use serde::{Deserialize, Serialize};

/// Category a flashcard was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Key term pulled from the text
    Concept,
    /// Term/definition pair matched by a connector pattern
    Definition,
    /// Complete-the-sentence card
    Fact,
    /// Paragraph describing an ordered procedure
    Process,
    /// Random sentence wrapped in a templated question stem
    General,
    /// Document-order fallback card
    Simple,
}

impl CardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Concept => "concept",
            CardKind::Definition => "definition",
            CardKind::Fact => "fact",
            CardKind::Process => "process",
            CardKind::General => "general",
            CardKind::Simple => "simple",
        }
    }
}

/// A question/answer pair. Records carry no identity; the consuming
/// persistence layer assigns IDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    pub question: String,
    pub answer: String,
    #[serde(rename = "type")]
    pub kind: CardKind,
}

impl Flashcard {
    pub fn new(question: impl Into<String>, answer: impl Into<String>, kind: CardKind) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            kind,
        }
    }
}
