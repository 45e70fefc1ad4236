//! Flashcard generation
//!
//! This module provides:
//! - Flashcard records handed to collaborators as-is
//! - Quota-mixed generation across concept/definition/fact/process categories
//! - General and simple fallback generation when material is thin

pub mod generator;
pub mod models;

pub use generator::{generate_flashcards, generate_flashcards_with};
pub use models::*;
