use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use super::{Accessibility, BlockBody, ContentBlock, Lesson};
use crate::LessonError;

/// Lesson as authored; block ids may be left out.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LessonSource {
    lesson_id: String,
    title: String,
    #[serde(default)]
    subtitle: String,
    #[serde(default)]
    content: Vec<BlockSource>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlockSource {
    #[serde(default)]
    block_id: Option<String>,
    #[serde(flatten)]
    body: BlockBody,
    #[serde(default)]
    accessibility: Option<Accessibility>,
}

/// Reads a lesson from a `.json`, `.yaml` or `.yml` file.
pub fn load_lesson(path: impl AsRef<Path>) -> Result<Lesson, LessonError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let source: LessonSource = match extension.as_str() {
        "json" => serde_json::from_str(&text)?,
        "yaml" | "yml" => serde_yaml_ng::from_str(&text)?,
        other => return Err(LessonError::UnsupportedFormat(other.to_string())),
    };

    debug!(path = %path.display(), lesson_id = %source.lesson_id, "loaded lesson file");
    Ok(assign_block_ids(source))
}

/// Parses a lesson from JSON text.
pub fn lesson_from_json(text: &str) -> Result<Lesson, LessonError> {
    let source: LessonSource = serde_json::from_str(text)?;
    Ok(assign_block_ids(source))
}

// blocks without an id are named after their type; explicit ids are registered
// first so generated ones are suffixed around them
fn assign_block_ids(source: LessonSource) -> Lesson {
    let mut slugger = github_slugger::Slugger::default();
    for id in source.content.iter().filter_map(|b| b.block_id.as_deref()) {
        slugger.slug(id);
    }

    let content = source
        .content
        .into_iter()
        .map(|block| {
            let block_id = match block.block_id {
                Some(id) => id,
                None => slugger.slug(block.body.block_type().as_str()),
            };
            ContentBlock {
                block_id,
                body: block.body,
                accessibility: block.accessibility,
            }
        })
        .collect();

    Lesson {
        lesson_id: source.lesson_id,
        title: source.title,
        subtitle: source.subtitle,
        content,
    }
}
