use std::collections::HashSet;

use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::lesson::{BlockBody, ContentBlock, Feedback, QuizData, QuizQuestion};
use crate::vocab::{detect_and_normalize, VocabularyEntry};

pub const DEFAULT_QUIZ_TITLE: &str = "Vocabulary Quiz";
pub const DEFAULT_QUESTION_COUNT: usize = 20;

/// Fewer entries with a definition than this and no quiz is generated.
pub const MIN_QUIZ_ENTRIES: usize = 4;

pub const CORRECT_FEEDBACK: &str = "Correct! Well done!";

const DISTRACTORS: usize = MIN_QUIZ_ENTRIES - 1;

#[derive(Debug, Clone)]
pub struct QuizOptions {
    pub title: String,
    pub question_count: usize,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_QUIZ_TITLE.to_string(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub quiz_title: String,
    pub questions: Vec<QuizQuestion>,
}

impl Quiz {
    pub fn into_block(self, block_id: impl Into<String>) -> ContentBlock {
        ContentBlock::new(
            block_id,
            BlockBody::Quiz(QuizData {
                title: self.quiz_title,
                questions: self.questions,
            }),
        )
    }
}

/// Multiple-choice quiz for any recognized vocabulary shape, `None` when there
/// is not enough vocabulary.
pub fn generate_quiz(raw: &Value, options: &QuizOptions) -> Option<Quiz> {
    quiz_from_entries(&detect_and_normalize(raw), options)
}

pub fn quiz_from_entries(entries: &[VocabularyEntry], options: &QuizOptions) -> Option<Quiz> {
    quiz_from_entries_with_rng(entries, options, &mut rand::thread_rng())
}

/// Questions draw their entry without replacement; distractors are drawn
/// afresh for every question from all other entries. Shuffles are
/// Fisher-Yates.
pub fn quiz_from_entries_with_rng<R: Rng + ?Sized>(
    entries: &[VocabularyEntry],
    options: &QuizOptions,
    rng: &mut R,
) -> Option<Quiz> {
    let pool: Vec<&VocabularyEntry> = entries
        .iter()
        .filter(|e| !e.definition.trim().is_empty())
        .collect();

    if pool.len() < MIN_QUIZ_ENTRIES {
        debug!(
            entries = pool.len(),
            required = MIN_QUIZ_ENTRIES,
            "not enough vocabulary for a quiz"
        );
        return None;
    }

    let count = options.question_count.min(pool.len());
    let mut used = HashSet::with_capacity(count);
    let mut questions = Vec::with_capacity(count);

    while questions.len() < count {
        let index = rng.gen_range(0..pool.len());
        if !used.insert(index) {
            continue;
        }
        questions.push(question(&pool, index, rng));
    }

    Some(Quiz {
        quiz_title: options.title.clone(),
        questions,
    })
}

fn question<R: Rng + ?Sized>(pool: &[&VocabularyEntry], index: usize, rng: &mut R) -> QuizQuestion {
    let entry = pool[index];
    let correct = entry.definition.as_str();

    // identical definitions under other terms would make two answers right
    let mut seen = HashSet::from([correct]);
    let mut others: Vec<&str> = pool
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, e)| e.definition.as_str())
        .filter(|d| seen.insert(*d))
        .collect();
    others.shuffle(rng);

    let mut answers: Vec<(bool, &str)> = std::iter::once((true, correct))
        .chain(others.into_iter().take(DISTRACTORS).map(|d| (false, d)))
        .collect();
    answers.shuffle(rng);

    let position = answers
        .iter()
        .position(|(is_correct, _)| *is_correct)
        .map_or(1, |p| p + 1);

    QuizQuestion {
        question: format!("What does \"{}\" mean?", entry.term),
        answers: answers.into_iter().map(|(_, a)| a.to_string()).collect(),
        correct_answer: position.to_string(),
        feedback: Some(Feedback {
            correct: CORRECT_FEEDBACK.to_string(),
            incorrect: format!("Not quite. The correct answer is: {}", correct),
        }),
    }
}
