//! Multiple-choice quiz generation
//!
//! This module provides:
//! - Quiz question records with shuffled options
//! - Concept questions with distractors drawn from unrelated sentences
//! - Fill-in-the-blank questions built from substantial sentences
//! - A document-order fallback with fixed filler distractors

pub mod generator;
pub mod models;

pub use generator::{generate_questions, generate_questions_with};
pub use models::*;
