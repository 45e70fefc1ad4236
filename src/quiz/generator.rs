//! Multiple-choice question generation
//!
//! A source pool mixes extracted concepts with substantial sentences; the
//! pool is shuffled and drained until enough questions were built or the
//! pool runs out. Sources that cannot yield a question (a concept no
//! sentence mentions, a sentence that lost too many words to splitting)
//! are skipped without costing a slot.

use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

use super::models::{QuestionKind, QuizQuestion};
use crate::analysis::{splitter, truncate_chars, TextAnalyzer};
use crate::config::GeneratorConfig;

/// Sentences need at least this many words to seed a fill-blank question
const MIN_SENTENCE_WORDS: usize = 8;

/// Distractor words must be longer than this many characters
const MIN_DISTRACTOR_LEN: usize = 3;

/// Filler options for the simple fallback path
const SIMPLE_DISTRACTORS: [&str; 3] = [
    "This information is not mentioned in the text",
    "The text discusses a different topic",
    "This refers to a different concept",
];

/// What a question is built from
enum QuestionSource {
    Concept(String),
    Sentence(String),
}

#[derive(Error, Debug)]
enum BuildError {
    #[error("invalid heuristic pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("sampled from an empty pool")]
    EmptyPool,
}

/// Generate up to `num_questions` multiple-choice questions with default
/// thresholds and a thread-local random source.
pub fn generate_questions(text: &str, num_questions: usize) -> Vec<QuizQuestion> {
    generate_questions_with(
        text,
        num_questions,
        &GeneratorConfig::default(),
        &mut rand::thread_rng(),
    )
}

/// Generate up to `num_questions` multiple-choice questions. The random
/// source drives pool and option shuffles as well as distractor sampling.
pub fn generate_questions_with<R: Rng>(
    text: &str,
    num_questions: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    match build_questions(text, num_questions, config, rng) {
        Ok(questions) => questions,
        Err(e) => {
            log::warn!("Quiz generation failed, using simple questions: {}", e);
            simple_questions(text, num_questions, config, rng)
        }
    }
}

fn build_questions<R: Rng>(
    text: &str,
    num_questions: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<Vec<QuizQuestion>, BuildError> {
    let analyzer = TextAnalyzer::new(config.clone())?;

    let sentences = analyzer.split_into_sentences(text);
    let concepts = analyzer.extract_key_concepts(text);

    let mut pool: Vec<QuestionSource> = Vec::new();
    for concept in concepts.into_iter().take(num_questions) {
        pool.push(QuestionSource::Concept(concept));
    }
    for sentence in sentences.iter().take(num_questions) {
        if sentence.split_whitespace().count() > MIN_SENTENCE_WORDS {
            pool.push(QuestionSource::Sentence(sentence.clone()));
        }
    }

    pool.shuffle(rng);

    let mut questions = Vec::new();
    for source in pool {
        if questions.len() >= num_questions {
            break;
        }

        let question = match source {
            QuestionSource::Concept(concept) => {
                concept_question(&concept, &sentences, config, rng)
            }
            QuestionSource::Sentence(sentence) => fill_blank_question(&sentence, text, rng)?,
        };

        if let Some(q) = question {
            questions.push(q);
        }
    }

    Ok(questions)
}

/// Ask what the text mentions about a concept. The first sentence naming
/// the concept is the correct answer; distractors come from sentences that
/// never mention it. Returns None when no sentence contains the concept.
fn concept_question<R: Rng>(
    concept: &str,
    sentences: &[String],
    config: &GeneratorConfig,
    rng: &mut R,
) -> Option<QuizQuestion> {
    let needle = concept.to_lowercase();
    let (matching, other): (Vec<&String>, Vec<&String>) = sentences
        .iter()
        .partition(|s| s.to_lowercase().contains(&needle));

    let context = matching.first()?;
    let correct = truncate_chars(context, config.quiz_option_len);

    let mut options = vec![correct.clone()];
    options.extend(
        other
            .choose_multiple(rng, 3)
            .map(|s| truncate_chars(s, config.quiz_option_len)),
    );
    options.shuffle(rng);

    Some(QuizQuestion {
        question: format!("What is mentioned about {} in the text?", concept),
        options,
        correct_answer: correct,
        kind: QuestionKind::Concept,
    })
}

/// Blank out the middle word of a sentence and offer other long words from
/// the text as distractors.
fn fill_blank_question<R: Rng>(
    sentence: &str,
    text: &str,
    rng: &mut R,
) -> Result<Option<QuizQuestion>, BuildError> {
    let words: Vec<&str> = sentence.split_whitespace().collect();
    if words.len() < MIN_SENTENCE_WORDS {
        return Ok(None);
    }

    let blank_index = words.len() / 2;
    let answer = *words.get(blank_index).ok_or(BuildError::EmptyPool)?;

    let mut question_words = words.clone();
    question_words[blank_index] = "_____";

    let candidates: Vec<&str> = text
        .split_whitespace()
        .filter(|w| {
            w.chars().count() > MIN_DISTRACTOR_LEN
                && *w != answer
                && w.chars().all(char::is_alphabetic)
        })
        .collect();

    let mut options = vec![answer.to_string()];
    options.extend(candidates.choose_multiple(rng, 3).map(|w| w.to_string()));
    options.shuffle(rng);

    Ok(Some(QuizQuestion {
        question: format!("Fill in the blank: {}", question_words.join(" ")),
        options,
        correct_answer: answer.to_string(),
        kind: QuestionKind::FillBlank,
    }))
}

/// Document-order fallback: the first sentences become questions with
/// fixed filler distractors.
fn simple_questions<R: Rng>(
    text: &str,
    num_questions: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    splitter::split_into_sentences(text, config.min_sentence_len)
        .into_iter()
        .take(num_questions)
        .enumerate()
        .map(|(i, sentence)| {
            let correct = truncate_chars(&sentence, config.simple_answer_len);
            let mut options = vec![correct.clone()];
            options.extend(SIMPLE_DISTRACTORS.iter().map(|d| d.to_string()));
            options.shuffle(rng);

            QuizQuestion {
                question: format!("What does statement {} in the text refer to?", i + 1),
                options,
                correct_answer: correct,
                kind: QuestionKind::Simple,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generate_seeded(text: &str, num_questions: usize, seed: u64) -> Vec<QuizQuestion> {
        let mut rng = StdRng::seed_from_u64(seed);
        generate_questions_with(text, num_questions, &GeneratorConfig::default(), &mut rng)
    }

    const BIOLOGY_TEXT: &str =
        "The Mitochondria is known as the powerhouse of every living cell. \
         Chloroplasts capture sunlight and convert it into usable chemical energy reserves. \
         The Nucleus stores the genetic material that directs all cellular activity.";

    #[test]
    fn test_empty_text_yields_no_questions() {
        assert!(generate_questions("", 10).is_empty());
    }

    #[test]
    fn test_never_more_than_requested() {
        for n in [0, 1, 2, 20] {
            assert!(generate_seeded(BIOLOGY_TEXT, n, 3).len() <= n);
        }
    }

    #[test]
    fn test_requested_count_reached_with_rich_text() {
        let questions = generate_seeded(BIOLOGY_TEXT, 2, 11);
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_correct_answer_always_among_options() {
        let questions = generate_seeded(BIOLOGY_TEXT, 10, 21);
        assert!(!questions.is_empty());
        for q in &questions {
            assert!(q.options.contains(&q.correct_answer));
            assert!(!q.options.is_empty() && q.options.len() <= 4);
        }
    }

    #[test]
    fn test_concept_question_shape() {
        let mut rng = StdRng::seed_from_u64(5);
        let sentences: Vec<String> = vec![
            "The Krebs cycle runs inside the mitochondrial matrix".to_string(),
            "Ribosomes assemble proteins from amino acid chains".to_string(),
            "Lysosomes digest worn-out organelles and waste".to_string(),
        ];
        let q = concept_question("Krebs", &sentences, &GeneratorConfig::default(), &mut rng)
            .expect("concept appears in a sentence");
        assert_eq!(q.kind, QuestionKind::Concept);
        assert_eq!(q.question, "What is mentioned about Krebs in the text?");
        assert!(q.correct_answer.contains("Krebs cycle"));
        // One correct answer plus both non-matching sentences as distractors
        assert_eq!(q.options.len(), 3);
        assert!(q.options.contains(&q.correct_answer));
    }

    #[test]
    fn test_concept_without_matching_sentence_is_skipped() {
        let mut rng = StdRng::seed_from_u64(5);
        let sentences = vec!["Ribosomes assemble proteins from amino acids".to_string()];
        let q = concept_question("Golgi", &sentences, &GeneratorConfig::default(), &mut rng);
        assert!(q.is_none());
    }

    #[test]
    fn test_concept_match_is_case_insensitive() {
        let mut rng = StdRng::seed_from_u64(5);
        let sentences = vec!["the krebs cycle runs in the matrix all day".to_string()];
        let q = concept_question("Krebs", &sentences, &GeneratorConfig::default(), &mut rng);
        assert!(q.is_some());
    }

    #[test]
    fn test_fill_blank_blanks_middle_word() {
        let mut rng = StdRng::seed_from_u64(9);
        let sentence = "one two three four five six seven eight nine";
        let q = fill_blank_question(sentence, sentence, &mut rng)
            .unwrap()
            .expect("sentence is long enough");
        assert_eq!(q.kind, QuestionKind::FillBlank);
        // Nine words: the blank replaces index 4
        assert_eq!(q.correct_answer, "five");
        assert!(q.question.starts_with("Fill in the blank: "));
        assert!(q.question.contains("_____"));
        assert!(!q.question.contains("five"));
        assert!(q.options.contains(&"five".to_string()));
    }

    #[test]
    fn test_fill_blank_rejects_short_sentence() {
        let mut rng = StdRng::seed_from_u64(9);
        let q = fill_blank_question("only five words right here", "text", &mut rng).unwrap();
        assert!(q.is_none());
    }

    #[test]
    fn test_long_options_truncated() {
        let mut rng = StdRng::seed_from_u64(2);
        let long_sentence = format!("The Watershed covers {}", "a".repeat(150));
        let sentences = vec![long_sentence];
        let q = concept_question("Watershed", &sentences, &GeneratorConfig::default(), &mut rng)
            .unwrap();
        assert!(q.correct_answer.ends_with("..."));
        assert_eq!(q.correct_answer.chars().count(), 103);
    }

    #[test]
    fn test_deterministic_with_seed() {
        let a = generate_seeded(BIOLOGY_TEXT, 5, 123);
        let b = generate_seeded(BIOLOGY_TEXT, 5, 123);
        assert_eq!(a, b);
    }

    #[test]
    fn test_short_fragment_text_does_not_panic() {
        let questions = generate_questions("Hi. Ok. No.", 5);
        assert!(questions.len() <= 5);
    }

    #[test]
    fn test_simple_questions_fixed_distractors() {
        let mut rng = StdRng::seed_from_u64(0);
        let questions = simple_questions(BIOLOGY_TEXT, 2, &GeneratorConfig::default(), &mut rng);
        assert_eq!(questions.len(), 2);
        for q in &questions {
            assert_eq!(q.kind, QuestionKind::Simple);
            assert_eq!(q.options.len(), 4);
            assert!(q.options.contains(&q.correct_answer));
            assert!(q
                .options
                .iter()
                .any(|o| o == "The text discusses a different topic"));
        }
        assert!(questions[0].question.starts_with("What does statement 1"));
    }
}
