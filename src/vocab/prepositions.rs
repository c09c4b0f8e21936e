use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};
use tracing::debug;

use super::{first_attribute, strip_tags, VocabularyEntry};

/// Categories of the preposition table, in output order.
pub const PREPOSITION_CATEGORIES: [&str; 4] = ["place", "time", "movement", "other"];

static MEANING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<p>\s*<strong>Meaning:</strong>(.*?)</p>").unwrap());

static FIRST_LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<ul[^>]*>.*?<li[^>]*>(.*?)</li>").unwrap());

/// A category is an HTML string, an object with `content`, or a list of such
/// objects each naming its own `preposition`.
pub(super) fn extract(table: &Map<String, Value>) -> Vec<VocabularyEntry> {
    let mut entries = Vec::new();

    for category in PREPOSITION_CATEGORIES {
        match table.get(category) {
            Some(Value::String(html)) => entries.extend(entry(category.to_string(), html)),
            Some(Value::Array(items)) => {
                for item in items {
                    let Some(term) = first_attribute(item, &["preposition", "title"]) else {
                        debug!(category, "skipping preposition without a name");
                        continue;
                    };
                    let html = first_attribute(item, &["content", "html"]).unwrap_or_default();
                    entries.extend(entry(term, &html));
                }
            }
            Some(item @ Value::Object(_)) => {
                let term = first_attribute(item, &["title", "preposition"])
                    .unwrap_or_else(|| category.to_string());
                let html = first_attribute(item, &["content", "html"]).unwrap_or_default();
                entries.extend(entry(term, &html));
            }
            Some(_) | None => {}
        }
    }

    entries
}

fn entry(term: String, html: &str) -> Option<VocabularyEntry> {
    let term = strip_tags(&term);
    if term.is_empty() {
        return None;
    }

    Some(VocabularyEntry {
        term,
        definition: first_capture(&MEANING, html),
        example: first_capture(&FIRST_LIST_ITEM, html),
        story: String::new(),
    })
}

fn first_capture(re: &Regex, html: &str) -> String {
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| strip_tags(m.as_str()))
        .unwrap_or_default()
}
