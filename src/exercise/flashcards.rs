use serde_json::Value;

use crate::lesson::Card;
use crate::vocab::{detect_and_normalize, VocabularyEntry};

/// Flashcard deck for any recognized vocabulary shape.
pub fn generate_flashcards(raw: &Value) -> Vec<Card> {
    flashcards(&detect_and_normalize(raw))
}

pub fn flashcards(entries: &[VocabularyEntry]) -> Vec<Card> {
    entries.iter().map(flashcard).collect()
}

/// Term on the front; meaning, example and story on the back, each as its
/// own paragraph and only when present.
pub fn flashcard(entry: &VocabularyEntry) -> Card {
    let mut back = String::new();

    if !entry.definition.trim().is_empty() {
        back.push_str(&format!(
            "<p><strong>Meaning:</strong> {}</p>",
            entry.definition
        ));
    }
    if !entry.example.trim().is_empty() {
        back.push_str(&format!("<p><em>Example: \"{}\"</em></p>", entry.example));
    }
    if !entry.story.trim().is_empty() {
        back.push_str(&format!("<p><strong>Story:</strong> {}</p>", entry.story));
    }

    Card {
        front: format!("<h3>{}</h3>", entry.term),
        back,
    }
}
