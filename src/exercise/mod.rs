//! Practice exercises derived from normalized vocabulary.

mod flashcards;
mod quiz;

pub use flashcards::{flashcard, flashcards, generate_flashcards};
pub use quiz::{
    generate_quiz, quiz_from_entries, quiz_from_entries_with_rng, Quiz, QuizOptions,
    CORRECT_FEEDBACK, DEFAULT_QUESTION_COUNT, DEFAULT_QUIZ_TITLE, MIN_QUIZ_ENTRIES,
};
