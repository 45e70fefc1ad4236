//! Heuristic study-material generation.
//!
//! Turns a body of extracted document text into two kinds of study
//! artifacts: question/answer flashcards and multiple-choice quiz
//! questions. Everything is regex and frequency heuristics over the input
//! string; there is no semantic understanding and no guarantee the
//! generated material is factually sound.
//!
//! The two entry points always return a list for valid string input: thin
//! or degenerate text yields fewer (possibly zero) records, and internal
//! failures switch to a document-order fallback instead of propagating.
//!
//! ```
//! let text = "The mitochondria is the powerhouse of the cell. \
//!             The mitochondria produces ATP through cellular respiration.";
//!
//! let cards = swot::generate_flashcards(text, 5);
//! assert!(cards.len() <= 5);
//!
//! let questions = swot::generate_questions(text, 3);
//! for q in &questions {
//!     assert!(q.options.contains(&q.correct_answer));
//! }
//! ```

mod analysis;
mod config;
mod flashcards;
mod quiz;

pub use analysis::{Definition, TextAnalyzer};
pub use config::{ConfigError, GeneratorConfig};
pub use flashcards::{generate_flashcards, generate_flashcards_with, CardKind, Flashcard};
pub use quiz::{generate_questions, generate_questions_with, QuestionKind, QuizQuestion};
