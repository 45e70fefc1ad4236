//! Plain-text rendering of generated study material

use swot::{Flashcard, QuizQuestion};

pub fn cards(cards: &[Flashcard]) {
    if cards.is_empty() {
        println!("No flashcards could be generated from the input.");
        return;
    }

    for (i, card) in cards.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, card.kind.as_str(), card.question);
        println!("   {}", card.answer);
        println!();
    }
}

pub fn questions(questions: &[QuizQuestion]) {
    if questions.is_empty() {
        println!("No questions could be generated from the input.");
        return;
    }

    let letters = ["a", "b", "c", "d"];

    for (i, q) in questions.iter().enumerate() {
        println!("{}. [{}] {}", i + 1, q.kind.as_str(), q.question);
        for (option, letter) in q.options.iter().zip(letters.iter()) {
            println!("   {}) {}", letter, option);
        }
        println!("   Answer: {}", q.correct_answer);
        println!();
    }
}
