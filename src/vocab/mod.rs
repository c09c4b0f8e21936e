//! Vocabulary extraction from the raw lesson data shapes.
//!
//! Each raw shape has its own adapter; all of them produce a flat list of
//! [`VocabularyEntry`] with duplicate terms removed (first occurrence wins).
//! Callers that know their input pick a [`VocabSource`] variant directly,
//! untyped JSON goes through [`VocabSource::detect`].

mod html;
mod prepositions;
mod table;

use std::{collections::HashSet, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub use prepositions::PREPOSITION_CATEGORIES;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub term: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub example: String,
    /// only idioms carry a story
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub story: String,
}

/// A raw vocabulary source, tagged with its shape.
#[derive(Debug, Clone, Copy)]
pub enum VocabSource<'a> {
    /// content blocks whose `text` HTML follows `<strong>term</strong> – definition`
    HtmlBlocks(&'a [Value]),
    /// `lessons` whose entries carry a `words` list
    WordTable(&'a [Value]),
    /// `lessons` whose entries carry an `idioms` list
    IdiomTable(&'a [Value]),
    /// object keyed by `place`, `time`, `movement`, `other`
    Prepositions(&'a Map<String, Value>),
}

impl<'a> VocabSource<'a> {
    /// Classifies untyped data, first matching shape wins.
    pub fn detect(raw: &'a Value) -> Option<Self> {
        if let Some(blocks) = raw.as_array() {
            if blocks.first().is_some_and(|b| b.get("type").is_some()) {
                return Some(VocabSource::HtmlBlocks(blocks));
            }
        }

        if let Some(lessons) = raw.get("lessons").and_then(|l| l.as_array()) {
            let first = lessons.first();
            if first.is_some_and(|l| l.get("words").is_some_and(Value::is_array)) {
                return Some(VocabSource::WordTable(lessons));
            }
            if first.is_some_and(|l| l.get("idioms").is_some_and(Value::is_array)) {
                return Some(VocabSource::IdiomTable(lessons));
            }
        }

        if let Some(table) = raw.as_object() {
            if PREPOSITION_CATEGORIES
                .iter()
                .any(|category| table.contains_key(*category))
            {
                return Some(VocabSource::Prepositions(table));
            }
        }

        None
    }

    pub fn name(&self) -> &'static str {
        match self {
            VocabSource::HtmlBlocks(_) => "html-blocks",
            VocabSource::WordTable(_) => "word-table",
            VocabSource::IdiomTable(_) => "idiom-table",
            VocabSource::Prepositions(_) => "prepositions",
        }
    }

    pub fn normalize(&self) -> Vec<VocabularyEntry> {
        let entries = match self {
            VocabSource::HtmlBlocks(blocks) => html::extract(blocks),
            VocabSource::WordTable(lessons) => table::words(lessons),
            VocabSource::IdiomTable(lessons) => table::idioms(lessons),
            VocabSource::Prepositions(categories) => prepositions::extract(categories),
        };
        let extracted = entries.len();
        let entries = dedup_terms(entries);

        debug!(
            source = self.name(),
            extracted,
            kept = entries.len(),
            "normalized vocabulary"
        );
        entries
    }
}

/// Detects the shape of `raw` and normalizes it; unrecognized data gives an
/// empty list.
pub fn detect_and_normalize(raw: &Value) -> Vec<VocabularyEntry> {
    match VocabSource::detect(raw) {
        Some(source) => source.normalize(),
        None => {
            warn!("no vocabulary shape recognized, nothing to normalize");
            Vec::new()
        }
    }
}

fn dedup_terms(entries: Vec<VocabularyEntry>) -> Vec<VocabularyEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.term.clone()))
        .collect()
}

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

pub(crate) fn strip_tags(html: &str) -> String {
    TAG.replace_all(html, "").trim().to_string()
}

pub(crate) fn get_attribute<T>(value: &Value, attribute: &str) -> Option<T>
where
    T: FromStr,
{
    value.get(attribute).and_then(|v| match v {
        Value::String(s) => T::from_str(s).ok(),
        Value::Number(n) => T::from_str(&n.to_string()).ok(),
        Value::Bool(b) => T::from_str(&b.to_string()).ok(),
        _ => None,
    })
}

/// First non-empty string among `attributes`.
pub(crate) fn first_attribute(value: &Value, attributes: &[&str]) -> Option<String> {
    attributes
        .iter()
        .filter_map(|a| get_attribute::<String>(value, a))
        .find(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detection_order() {
        let blocks = json!([{"type": "text", "content": ""}]);
        assert!(matches!(
            VocabSource::detect(&blocks),
            Some(VocabSource::HtmlBlocks(_))
        ));

        let words = json!({"lessons": [{"words": []}]});
        assert!(matches!(
            VocabSource::detect(&words),
            Some(VocabSource::WordTable(_))
        ));

        let idioms = json!({"lessons": [{"idioms": []}]});
        assert!(matches!(
            VocabSource::detect(&idioms),
            Some(VocabSource::IdiomTable(_))
        ));

        let prepositions = json!({"time": []});
        assert!(matches!(
            VocabSource::detect(&prepositions),
            Some(VocabSource::Prepositions(_))
        ));
    }

    #[test]
    fn words_win_over_idioms_when_both_present() {
        let raw = json!({"lessons": [{"words": [], "idioms": []}]});
        assert_eq!(VocabSource::detect(&raw).unwrap().name(), "word-table");
    }

    #[test]
    fn unrecognized_data_is_empty() {
        for raw in [
            json!(null),
            json!([]),
            json!([1, 2]),
            json!({"lessons": []}),
            json!({"chapters": [{"words": []}]}),
            json!("text"),
        ] {
            assert!(VocabSource::detect(&raw).is_none(), "{raw}");
            assert!(detect_and_normalize(&raw).is_empty());
        }
    }

    #[test]
    fn duplicate_terms_keep_first() {
        let raw = json!({"lessons": [
            {"words": [
                {"word": "run out", "definition": "to have none left"},
                {"word": "give up", "definition": "to stop trying"}
            ]},
            {"words": [{"word": "run out", "definition": "second meaning"}]}
        ]});

        let entries = detect_and_normalize(&raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].term, "run out");
        assert_eq!(entries[0].definition, "to have none left");
        assert_eq!(entries[1].term, "give up");
    }

    #[test]
    fn normalizing_twice_is_identical() {
        let raw = json!({"lessons": [{"idioms": [
            {"idiom": "break the ice", "meaning": "to start a conversation", "story": "Ships..."}
        ]}]});
        assert_eq!(detect_and_normalize(&raw), detect_and_normalize(&raw));
    }

    #[test]
    fn strips_tags() {
        assert_eq!(strip_tags(" <b>in</b> the <i>box</i> "), "in the box");
    }
}
