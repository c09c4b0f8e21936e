use serde_json::Value;
use tracing::debug;

use super::{first_attribute, VocabularyEntry};

pub(super) fn words(lessons: &[Value]) -> Vec<VocabularyEntry> {
    rows(lessons, "words")
        .filter_map(|(lesson, word)| {
            let Some(term) = first_attribute(word, &["word", "term"]) else {
                debug!(lesson, "skipping word without a term");
                return None;
            };
            Some(VocabularyEntry {
                term,
                definition: first_attribute(word, &["definition", "meaning"]).unwrap_or_default(),
                example: first_attribute(word, &["sampleSentence", "challengeSentence"])
                    .unwrap_or_default(),
                story: String::new(),
            })
        })
        .collect()
}

pub(super) fn idioms(lessons: &[Value]) -> Vec<VocabularyEntry> {
    rows(lessons, "idioms")
        .filter_map(|(lesson, idiom)| {
            let Some(term) = first_attribute(idiom, &["idiom"]) else {
                debug!(lesson, "skipping idiom without text");
                return None;
            };
            Some(VocabularyEntry {
                term,
                definition: first_attribute(idiom, &["meaning"]).unwrap_or_default(),
                example: first_attribute(idiom, &["example"]).unwrap_or_default(),
                story: first_attribute(idiom, &["story"]).unwrap_or_default(),
            })
        })
        .collect()
}

// every row of `key` across all lessons, tagged with the lesson index
fn rows<'a>(lessons: &'a [Value], key: &'a str) -> impl Iterator<Item = (usize, &'a Value)> {
    lessons.iter().enumerate().flat_map(move |(index, lesson)| {
        lesson
            .get(key)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(move |row| (index, row))
    })
}
