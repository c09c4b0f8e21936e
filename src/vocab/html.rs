use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use tracing::debug;

use super::{first_attribute, get_attribute, strip_tags, VocabularyEntry};

// `<strong>term</strong> – definition`, en dash only
static TERM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<strong>([^<]+)</strong>\s*–\s*").unwrap());

static EXAMPLE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<br\s*/?>\s*<em>").unwrap());

static EXAMPLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?s)^<em>\s*Example:\s*["“](.*?)["”]"#).unwrap());

pub(super) fn extract(blocks: &[Value]) -> Vec<VocabularyEntry> {
    blocks
        .iter()
        .filter(|b| get_attribute::<String>(b, "type").as_deref() == Some("text"))
        .filter_map(block_html)
        .flat_map(|html| entries_in(&html))
        .collect()
}

// text blocks carry their HTML either inline or under `data`
fn block_html(block: &Value) -> Option<String> {
    first_attribute(block, &["content", "html"]).or_else(|| {
        block
            .get("data")
            .and_then(|data| first_attribute(data, &["content", "html"]))
    })
}

fn entries_in(html: &str) -> Vec<VocabularyEntry> {
    let terms: Vec<_> = TERM.captures_iter(html).collect();
    let mut entries = Vec::with_capacity(terms.len());

    for (index, caps) in terms.iter().enumerate() {
        let (Some(whole), Some(term)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        // a definition never runs into the next term
        let end = terms
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(html.len(), |m| m.start());
        let rest = &html[whole.end()..end];

        let (definition, example) = match EXAMPLE_MARKER.find(rest) {
            Some(marker) => {
                let em = &rest[marker.end() - "<em>".len()..];
                let example = EXAMPLE
                    .captures(em)
                    .and_then(|c| c.get(1))
                    .map(|m| strip_tags(m.as_str()))
                    .unwrap_or_default();
                (&rest[..marker.start()], example)
            }
            None => (rest, String::new()),
        };

        let term = strip_tags(term.as_str());
        if term.is_empty() {
            debug!("skipping empty <strong> term");
            continue;
        }

        entries.push(VocabularyEntry {
            term,
            definition: strip_tags(definition),
            example,
            story: String::new(),
        });
    }

    entries
}
